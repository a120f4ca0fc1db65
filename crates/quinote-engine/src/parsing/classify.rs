//! Phase 2: turn raw nodes into typed elements and fill the pools.

use std::sync::{Arc, OnceLock};

use regex::Regex;

use super::{
    pools::{Pool, PoolCollector},
    tokenize::RawNode,
    warnings::ParseWarning,
};
use crate::models::{Element, ElementKind, ParseResult};

const KEY_DELIMITER: char = ':';
const DEFINITION_SEPARATOR: char = ';';
const ALIAS_SEPARATORS: [char; 2] = [';', ','];

/// Whether `text` contains a `digits-digits-digits` date.
pub fn is_date(text: &str) -> bool {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    DATE_REGEX
        .get_or_init(|| Regex::new(r"[0-9]+-[0-9]+-[0-9]+").expect("Invalid date regex"))
        .is_match(text)
}

/// Splits a `Key [alias; alias]` head into the bare key and its aliases.
///
/// Only the first bracket pair is read. An unclosed `[` is left in the key.
pub fn extract_aliases(head: &str) -> (String, Vec<String>) {
    let Some(open) = head.find('[') else {
        return (head.to_string(), Vec::new());
    };
    let Some(len) = head[open..].find(']') else {
        return (head.to_string(), Vec::new());
    };
    let close = open + len;

    let aliases = head[open + 1..close]
        .split(ALIAS_SEPARATORS)
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(String::from)
        .collect();

    let before = head[..open].trim_end();
    let after = head[close + 1..].trim_start();
    let key = match (before.is_empty(), after.is_empty()) {
        (_, true) => before.to_string(),
        (true, false) => after.to_string(),
        (false, false) => format!("{before} {after}"),
    };

    (key, aliases)
}

fn split_definitions(body: &str) -> Vec<String> {
    body.split(DEFINITION_SEPARATOR)
        .map(str::trim)
        .map(String::from)
        .collect()
}

/// Classifies raw nodes depth-first, collecting pools as it goes.
///
/// One classifier serves exactly one parse; [`finish`](Self::finish) hands
/// back the pools and any warnings.
#[derive(Debug, Default)]
pub struct ElementClassifier {
    pools: PoolCollector,
    warnings: Vec<ParseWarning>,
}

impl ElementClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `node` and, recursively, all of its children.
    pub fn classify(&mut self, node: &RawNode<'_>) -> Arc<Element> {
        let mut parts = node.text.split(KEY_DELIMITER).map(str::trim);
        let head = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        let (key, aliases) = extract_aliases(head);
        let kind = if is_date(&key) {
            ElementKind::Date
        } else {
            ElementKind::Identifier
        };

        let definitions = match rest.as_slice() {
            [body] if !body.is_empty() => split_definitions(body),
            _ => Vec::new(),
        };

        if rest.len() > 1 {
            let dropped = node
                .text
                .split_once(KEY_DELIMITER)
                .map(|(_, body)| body.trim())
                .unwrap_or_default();
            self.warn(ParseWarning::ExtraDelimiters {
                line: node.line,
                key: key.clone(),
                dropped: dropped.to_string(),
            });
        }

        // Pre-order: the parent's pool entries precede its children's.
        let slot = if definitions.is_empty() {
            self.pools.reserve(Pool::Other)
        } else {
            self.pools.record_definitions(kind, &definitions);
            self.pools.reserve(Pool::for_kind(kind))
        };

        let subelements = node
            .children
            .iter()
            .map(|child| self.classify(child))
            .collect();

        let element = Arc::new(Element::new(
            kind,
            key,
            aliases,
            definitions,
            subelements,
            node.line,
        ));
        self.pools.fill(slot, &element);
        element
    }

    pub fn finish(
        self,
        parsed_elements: Vec<Arc<Element>>,
    ) -> (ParseResult, Vec<ParseWarning>) {
        (self.pools.finish(parsed_elements), self.warnings)
    }

    fn warn(&mut self, warning: ParseWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}
