use std::fmt::Write;
use std::sync::Arc;

use crate::models::Element;
use crate::parsing::Parsed;

const INDENT: &str = "  ";

/// Renders a parse as text: the element tree, then pools, then warnings.
pub fn render(parsed: &Parsed) -> String {
    let result = &parsed.result;
    let mut out = String::new();

    for element in &result.parsed_elements {
        render_element(&mut out, element, 0);
    }

    out.push_str("---\n");
    writeln!(out, "identifiers: {:?}", keys(&result.identifiers)).ok();
    writeln!(out, "dates: {:?}", keys(&result.dates)).ok();
    writeln!(out, "other: {:?}", keys(&result.other)).ok();
    writeln!(out, "definitions: {:?}", result.definitions).ok();
    writeln!(out, "events: {:?}", result.events).ok();

    if parsed.warnings.is_empty() {
        out.push_str("warnings: []");
    } else {
        out.push_str("warnings:");
        for warning in &parsed.warnings {
            write!(out, "\n{INDENT}{warning}").ok();
        }
    }

    out
}

fn render_element(out: &mut String, element: &Element, depth: usize) {
    write!(
        out,
        "{}{:?} {:?}",
        INDENT.repeat(depth),
        element.kind(),
        element.key()
    )
    .ok();
    if !element.aliases().is_empty() {
        write!(out, " aliases={:?}", element.aliases()).ok();
    }
    if element.has_definitions() {
        write!(out, " definitions={:?}", element.definitions()).ok();
    }
    out.push('\n');

    for child in element.subelements() {
        render_element(out, child, depth + 1);
    }
}

fn keys(pool: &[Arc<Element>]) -> Vec<&str> {
    pool.iter().map(|element| element.key()).collect()
}
