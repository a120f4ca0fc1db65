use std::sync::Arc;

use crate::models::{Element, ElementKind, ParseResult};

/// Which element pool a classified node is filed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Identifiers,
    Dates,
    Other,
}

impl Pool {
    /// Pool for an element that carries definitions.
    pub fn for_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Identifier => Pool::Identifiers,
            ElementKind::Date => Pool::Dates,
        }
    }
}

/// A place in a pool held for an element whose children are still being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PoolSlot {
    pool: Pool,
    index: usize,
}

/// Accumulates the flattened pools for a single parse.
///
/// Elements are registered in pre-order: a slot is reserved when a node is
/// first visited and filled once its subtree exists.
#[derive(Debug, Default)]
pub struct PoolCollector {
    identifiers: Vec<Option<Arc<Element>>>,
    dates: Vec<Option<Arc<Element>>>,
    other: Vec<Option<Arc<Element>>>,
    definitions: Vec<String>,
    events: Vec<String>,
}

impl PoolCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self, pool: Pool) -> PoolSlot {
        let entries = self.entries_mut(pool);
        entries.push(None);
        PoolSlot {
            pool,
            index: entries.len() - 1,
        }
    }

    /// Appends an element's definitions to `definitions` or `events`.
    pub fn record_definitions(&mut self, kind: ElementKind, definitions: &[String]) {
        let target = match kind {
            ElementKind::Identifier => &mut self.definitions,
            ElementKind::Date => &mut self.events,
        };
        target.extend_from_slice(definitions);
    }

    pub fn fill(&mut self, slot: PoolSlot, element: &Arc<Element>) {
        self.entries_mut(slot.pool)[slot.index] = Some(Arc::clone(element));
    }

    pub fn finish(self, parsed_elements: Vec<Arc<Element>>) -> ParseResult {
        ParseResult {
            parsed_elements,
            identifiers: self.identifiers.into_iter().flatten().collect(),
            dates: self.dates.into_iter().flatten().collect(),
            definitions: self.definitions,
            events: self.events,
            other: self.other.into_iter().flatten().collect(),
        }
    }

    fn entries_mut(&mut self, pool: Pool) -> &mut Vec<Option<Arc<Element>>> {
        match pool {
            Pool::Identifiers => &mut self.identifiers,
            Pool::Dates => &mut self.dates,
            Pool::Other => &mut self.other,
        }
    }
}
