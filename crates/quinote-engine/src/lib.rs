//! # quinote-engine
//!
//! Turns tab-indented study notes into a typed outline plus the flattened
//! pools a quiz generator draws from.
//!
//! ```text
//! lines ──tokenize──▶ RawNode forest ──classify──▶ Element forest + pools ──▶ ParseResult
//! ```

pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{Element, ElementKind, ParseResult};
pub use parsing::{ParseWarning, Parsed, parse_lines, parse_lines_with, parse_text};
pub use quinote_config::ParserSettings;
