use std::sync::Arc;

use serde::Serialize;

use crate::parsing::{ParseWarning, classify::is_date};

/// Which pool family an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    /// A term or topic; its definitions feed the `definitions` pool.
    Identifier,
    /// A date key; its definitions are events and feed the `events` pool.
    Date,
}

/// A classified outline line with its classified children.
///
/// Children are shared through [`Arc`] so the pools in a
/// [`ParseResult`](super::ParseResult) point at the very same elements as
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    kind: ElementKind,
    key: String,
    aliases: Vec<String>,
    definitions: Vec<String>,
    subelements: Vec<Arc<Element>>,
    line: usize,
}

impl Element {
    pub(crate) fn new(
        kind: ElementKind,
        key: String,
        aliases: Vec<String>,
        definitions: Vec<String>,
        subelements: Vec<Arc<Element>>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            key,
            aliases,
            definitions,
            subelements,
            line,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The identifier or date string.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    pub fn subelements(&self) -> &[Arc<Element>] {
        &self.subelements
    }

    /// 1-based source line this element was parsed from.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn has_definitions(&self) -> bool {
        !self.definitions.is_empty()
    }

    /// Replaces the key.
    ///
    /// The key is always assigned. A date element given a key that does not
    /// look like a date yields a [`ParseWarning::NonDateKey`].
    pub fn set_key(&mut self, key: impl Into<String>) -> Option<ParseWarning> {
        let key = key.into();
        let warning = (self.kind == ElementKind::Date && !is_date(&key))
            .then(|| ParseWarning::NonDateKey { key: key.clone() });
        if let Some(w) = &warning {
            log::warn!("{w}");
        }
        self.key = key;
        warning
    }

    /// Iterates this element and all of its descendants in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Depth-first, parent-before-children walk over an element tree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn over(roots: &'a [Arc<Element>]) -> Self {
        Self {
            stack: roots.iter().rev().map(Arc::as_ref).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack
            .extend(current.subelements.iter().rev().map(Arc::as_ref));
        Some(current)
    }
}
