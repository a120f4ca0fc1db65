use std::sync::Arc;

use serde::Serialize;

use super::element::{Element, PreOrder};

/// Everything one parse produces: the root elements and the flattened pools.
///
/// Pool entries share their allocation with the tree. Callers that want to
/// consume a pool destructively (e.g. drawing quiz answers without
/// replacement) clone the `Vec` first; the `Arc`s make that cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Root-level elements in input order.
    pub parsed_elements: Vec<Arc<Element>>,
    /// Identifier elements with at least one definition, pre-order.
    pub identifiers: Vec<Arc<Element>>,
    /// Date elements with at least one definition, pre-order.
    pub dates: Vec<Arc<Element>>,
    /// Definitions of every identifier element, pre-order.
    pub definitions: Vec<String>,
    /// Definitions of every date element, pre-order.
    pub events: Vec<String>,
    /// Elements without definitions, pre-order.
    pub other: Vec<Arc<Element>>,
}

impl ParseResult {
    /// Keys quiz generation draws from: identifiers first, then dates.
    pub fn identifier_pool(&self) -> Vec<Arc<Element>> {
        self.identifiers
            .iter()
            .chain(&self.dates)
            .cloned()
            .collect()
    }

    /// Finds the first element whose key equals `key` exactly.
    ///
    /// Identifiers are scanned before dates, so an identifier wins a key
    /// collision.
    pub fn lookup(&self, key: &str) -> Option<&Arc<Element>> {
        self.identifiers
            .iter()
            .chain(&self.dates)
            .find(|element| element.key() == key)
    }

    /// Walks every element of the tree in pre-order.
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder::over(&self.parsed_elements)
    }

    pub fn element_count(&self) -> usize {
        self.walk().count()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed_elements.is_empty()
    }
}
