use std::sync::Arc;

use crate::models::{Element, ElementKind, ParseResult};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Elements in `identifiers`/`dates` have definitions and the right kind
/// - Elements in `other` have no definitions
/// - Every element of the tree is in exactly one element pool
/// - `definitions`/`events` are the pre-order concatenation of identifier/date
///   definitions
/// - `lookup` finds every pooled key, preferring identifiers
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(result: &ParseResult) {
    for (pool, kind) in [
        (&result.identifiers, ElementKind::Identifier),
        (&result.dates, ElementKind::Date),
    ] {
        for element in pool {
            assert_eq!(
                element.kind(),
                kind,
                "element {:?} (line {}) filed in the wrong pool",
                element.key(),
                element.line()
            );
            assert!(
                element.has_definitions(),
                "pooled element {:?} (line {}) has no definitions",
                element.key(),
                element.line()
            );
        }
    }
    for element in &result.other {
        assert!(
            !element.has_definitions(),
            "element {:?} (line {}) in `other` has definitions",
            element.key(),
            element.line()
        );
    }

    let pooled = result.identifiers.len() + result.dates.len() + result.other.len();
    assert_eq!(
        pooled,
        result.element_count(),
        "pool sizes do not cover the tree exactly once"
    );

    let flattened = |kind: ElementKind| -> Vec<String> {
        result
            .walk()
            .filter(|element| element.kind() == kind)
            .flat_map(|element| element.definitions().iter().cloned())
            .collect()
    };
    assert_eq!(
        result.definitions,
        flattened(ElementKind::Identifier),
        "definitions pool is not the pre-order flattening"
    );
    assert_eq!(
        result.events,
        flattened(ElementKind::Date),
        "events pool is not the pre-order flattening"
    );

    for element in result.identifiers.iter().chain(&result.dates) {
        let found = result
            .lookup(element.key())
            .unwrap_or_else(|| panic!("lookup missed pooled key {:?}", element.key()));
        assert_eq!(found.key(), element.key());
        if result
            .identifiers
            .iter()
            .any(|identifier| identifier.key() == element.key())
        {
            assert_eq!(
                found.kind(),
                ElementKind::Identifier,
                "identifier should win lookup of {:?}",
                element.key()
            );
        }
    }

    let tree: Vec<&Element> = result.walk().collect();
    for element in result.identifiers.iter().chain(&result.dates).chain(&result.other) {
        assert!(
            tree.iter().any(|node| std::ptr::eq(*node, Arc::as_ref(element))),
            "pooled element {:?} (line {}) is not part of the tree",
            element.key(),
            element.line()
        );
    }
}
