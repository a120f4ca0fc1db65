//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: Renders a parse as stable, human-readable text for `insta`
//!   snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (pool partition,
//!   pre-order flattening, lookup tie-breaking)
//!
//! ## Testing Strategy
//!
//! Fixture outlines are rendered and compared against reviewed snapshots; every
//! fixture is also pushed through the invariant checks so a snapshot can never
//! bless a structurally broken parse.

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::render;
