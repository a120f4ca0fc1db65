//! # Outline Parsing
//!
//! Two-phase parsing of tab-indented study notes.
//!
//! ## Parsing Phases
//!
//! 1. **Tokenizing** (`tokenize`): lines are grouped into a `RawNode` forest by
//!    leading-tab depth. Each recursive level reports how many lines it
//!    consumed so the caller can skip past the subtree.
//!
//! 2. **Classification** (`classify`): each `RawNode` becomes a Date or
//!    Identifier `Element`. Aliases and definitions are split off, and the
//!    `PoolCollector` files every element in pre-order.
//!
//! ## Key Invariants
//!
//! - Elements in `identifiers`/`dates` have definitions; elements in `other`
//!   have none
//! - `definitions`/`events` are the pre-order concatenation of identifier/date
//!   definitions
//! - All state is local to one call; parsing is a pure function of its input

pub mod classify;
pub mod pools;
pub mod snapshot;
pub mod tokenize;
pub mod warnings;

#[cfg(test)]
mod tests;

use quinote_config::ParserSettings;
use serde::Serialize;

use crate::models::ParseResult;
use classify::ElementClassifier;
pub use warnings::ParseWarning;

/// The outcome of a parse: the result plus any non-fatal warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed {
    pub result: ParseResult,
    pub warnings: Vec<ParseWarning>,
}

/// Parses lines with the default [`ParserSettings`].
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Parsed {
    parse_lines_with(lines, &ParserSettings::default())
}

/// Parses a whole document, splitting it into lines first.
pub fn parse_text(text: &str) -> Parsed {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines)
}

/// Parses lines, clamping indentation to `settings.max_depth` (capped at
/// [`HARD_MAX_DEPTH`](quinote_config::HARD_MAX_DEPTH)) and, when
/// `settings.skip_blank_lines` is set, dropping empty root lines with their
/// subtrees.
pub fn parse_lines_with<S: AsRef<str>>(lines: &[S], settings: &ParserSettings) -> Parsed {
    let (forest, mut warnings) = tokenize::tokenize(lines, settings.effective_max_depth());

    let mut classifier = ElementClassifier::new();
    let parsed_elements = forest
        .iter()
        .filter(|node| !(settings.skip_blank_lines && node.text.is_empty()))
        .map(|node| classifier.classify(node))
        .collect();
    let (result, classify_warnings) = classifier.finish(parsed_elements);
    warnings.extend(classify_warnings);

    log::debug!(
        "parsed {} lines into {} root elements ({} identifiers, {} dates, {} other, {} warnings)",
        lines.len(),
        result.parsed_elements.len(),
        result.identifiers.len(),
        result.dates.len(),
        result.other.len(),
        warnings.len()
    );

    Parsed { result, warnings }
}
