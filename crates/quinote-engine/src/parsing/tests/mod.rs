//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with rendered outlines for readability.
//! Fixtures (.txt) and snapshots (.snap) are co-located in `fixtures/`.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use quinote_config::{HARD_MAX_DEPTH, ParserSettings};

use crate::models::{Element, ElementKind, ParseResult};
use crate::parsing::{ParseWarning, parse_lines, parse_lines_with, parse_text, snapshot};

// Fixture-based snapshot tests

#[test]
fn fixture_study_notes() {
    assert_fixture("study_notes");
}

#[test]
fn fixture_delimiter_edge_cases() {
    assert_fixture("delimiter_edge_cases");
}

#[test]
fn fixture_indentation_quirks() {
    assert_fixture("indentation_quirks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let notes = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();

    let parsed = parse_text(&notes);
    snapshot::invariants(&parsed.result);

    let rendered = snapshot::render(&parsed);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, rendered);
    });
}

// Worked examples

#[test]
fn date_line_feeds_dates_and_events() {
    let parsed = parse_lines(&["2024-01-01: New Year; Holiday"]);
    let result = &parsed.result;

    assert_eq!(result.parsed_elements.len(), 1);
    let root = &result.parsed_elements[0];
    assert_eq!(root.kind(), ElementKind::Date);
    assert_eq!(root.key(), "2024-01-01");
    assert_eq!(root.definitions(), ["New Year", "Holiday"]);
    assert!(Arc::ptr_eq(&result.dates[0], root));
    assert_eq!(result.events, vec!["New Year", "Holiday"]);
}

#[test]
fn nested_definitions_flatten_in_pre_order() {
    let parsed = parse_lines(&["Topic: def1; def2", "\tSub: subdef"]);
    let result = &parsed.result;

    let root = &result.parsed_elements[0];
    assert_eq!(root.key(), "Topic");
    assert_eq!(root.definitions(), ["def1", "def2"]);
    assert_eq!(root.subelements().len(), 1);
    assert_eq!(root.subelements()[0].key(), "Sub");
    assert_eq!(root.subelements()[0].definitions(), ["subdef"]);
    assert_eq!(result.definitions, vec!["def1", "def2", "subdef"]);
}

#[test]
fn line_without_colon_is_other() {
    let parsed = parse_lines(&["Note without colon"]);
    let result = &parsed.result;

    assert_eq!(result.other.len(), 1);
    assert_eq!(result.other[0].key(), "Note without colon");
    assert!(result.other[0].definitions().is_empty());
    assert!(result.identifiers.is_empty());
}

#[test]
fn aliases_are_split_from_key() {
    let parsed = parse_lines(&["Topic [alt1; alt2]: definition"]);
    let root = &parsed.result.parsed_elements[0];

    assert_eq!(root.key(), "Topic");
    assert_eq!(root.aliases(), ["alt1", "alt2"]);
    assert_eq!(root.definitions(), ["definition"]);
}

#[test]
fn second_colon_drops_body() {
    let parsed = parse_lines(&["A: B: C"]);

    assert_eq!(parsed.result.other.len(), 1);
    assert!(parsed.result.other[0].definitions().is_empty());
    assert!(parsed.result.definitions.is_empty());
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::ExtraDelimiters {
            line: 1,
            key: "A".into(),
            dropped: "B: C".into(),
        }]
    );
}

// Result accessors

#[test]
fn identifier_pool_lists_identifiers_before_dates() {
    let parsed = parse_lines(&[
        "1914-07-28: war begins",
        "Treaty: agreement",
        "\t1919-06-28: signed",
    ]);

    let keys: Vec<String> = parsed
        .result
        .identifier_pool()
        .iter()
        .map(|element| element.key().to_string())
        .collect();

    assert_eq!(keys, vec!["Treaty", "1914-07-28", "1919-06-28"]);
}

#[test]
fn lookup_returns_the_pooled_element() {
    let parsed = parse_lines(&[
        "Cell: unit of life",
        "\tNucleus: control centre",
        "\t2000-01-01: y2k",
    ]);
    let result = &parsed.result;

    let nucleus = result.lookup("Nucleus").unwrap();
    assert!(Arc::ptr_eq(nucleus, &result.parsed_elements[0].subelements()[0]));

    let date = result.lookup("2000-01-01").unwrap();
    assert_eq!(date.kind(), ElementKind::Date);

    assert!(result.lookup("nucleus").is_none());
    assert!(result.lookup("Missing").is_none());
}

#[test]
fn lookup_skips_elements_without_definitions() {
    let parsed = parse_lines(&["Loose"]);

    assert!(parsed.result.lookup("Loose").is_none());
}

#[test]
fn lookup_prefers_identifier_on_collision() {
    let element = |kind, definition: &str| {
        Arc::new(Element::new(
            kind,
            "shared".into(),
            vec![],
            vec![definition.into()],
            vec![],
            1,
        ))
    };
    let date = element(ElementKind::Date, "as date");
    let identifier = element(ElementKind::Identifier, "as identifier");
    let result = ParseResult {
        parsed_elements: vec![Arc::clone(&date), Arc::clone(&identifier)],
        identifiers: vec![Arc::clone(&identifier)],
        dates: vec![date],
        definitions: vec!["as identifier".into()],
        events: vec!["as date".into()],
        other: vec![],
    };

    let found = result.lookup("shared").unwrap();

    assert!(Arc::ptr_eq(found, &identifier));
}

#[test]
fn pools_are_independent_snapshots() {
    let parsed = parse_lines(&["A: a", "B: b", "C: c"]);
    let mut draw = parsed.result.identifier_pool();

    draw.remove(0);
    draw.clear();

    assert_eq!(parsed.result.identifiers.len(), 3);
    assert_eq!(parsed.result.identifier_pool().len(), 3);
}

#[test]
fn element_count_walks_whole_tree() {
    let parsed = parse_lines(&["A", "\tB", "\t\tC", "D"]);

    assert_eq!(parsed.result.element_count(), 4);
    assert_eq!(parsed.result.parsed_elements.len(), 2);
}

#[test]
fn set_key_on_parsed_date_reports_non_date() {
    let parsed = parse_lines(&["1989-11-09: wall falls"]);
    let mut date = Element::clone(&parsed.result.dates[0]);

    let warning = date.set_key("Berlin");

    assert_eq!(
        warning,
        Some(ParseWarning::NonDateKey {
            key: "Berlin".into()
        })
    );
    // the parsed result is untouched
    assert_eq!(parsed.result.dates[0].key(), "1989-11-09");
}

// Whole-parse properties

#[test]
fn parsing_is_idempotent() {
    let notes = "Topic [T]: a; b\n\tSub: c\n\t\t2020-02-02: d\nLoose\n";

    assert_eq!(parse_text(notes), parse_text(notes));
}

#[test]
fn concurrent_parses_do_not_share_state() {
    let first = ["Alpha: a", "\tBeta: b"];
    let second = ["1492-10-12: landfall", "Gamma"];
    let expected_first = parse_lines(&first);
    let expected_second = parse_lines(&second);

    let (got_first, got_second) = std::thread::scope(|scope| {
        let a = scope.spawn(|| parse_lines(&first));
        let b = scope.spawn(|| parse_lines(&second));
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(got_first, expected_first);
    assert_eq!(got_second, expected_second);
    assert!(got_first.result.dates.is_empty());
    assert!(got_second.result.identifiers.is_empty());
}

#[test]
fn empty_input_yields_empty_result() {
    let parsed = parse_lines::<&str>(&[]);

    assert!(parsed.result.is_empty());
    assert_eq!(parsed.result, ParseResult::default());
    assert!(parsed.warnings.is_empty());
}

#[test]
fn blank_lines_are_kept_by_default() {
    let parsed = parse_text("A: a\n\nB: b");

    assert_eq!(parsed.result.parsed_elements.len(), 3);
    assert_eq!(parsed.result.other.len(), 1);
    assert_eq!(parsed.result.other[0].key(), "");
}

#[test]
fn blank_root_lines_can_be_skipped() {
    let settings = ParserSettings {
        skip_blank_lines: true,
        ..ParserSettings::default()
    };

    let parsed = parse_lines_with(&["A: a", "", "   ", "B: b"], &settings);

    // only raw-empty lines are skipped; whitespace is still a line
    assert_eq!(parsed.result.parsed_elements.len(), 3);
    assert_eq!(parsed.result.other.len(), 1);
    assert_eq!(parsed.result.other[0].key(), "");
    assert_eq!(parsed.result.other[0].line(), 3);
    snapshot::invariants(&parsed.result);
}

#[test]
fn skipping_blank_lines_keeps_whitespace_only_roots() {
    let settings = ParserSettings {
        skip_blank_lines: true,
        ..ParserSettings::default()
    };

    let parsed = parse_lines_with(&["\t", "A: a", "   ", "B: b"], &settings);

    assert_eq!(parsed.result.parsed_elements.len(), 4);
    assert_eq!(parsed.result.other.len(), 2);
}

#[test]
fn unbounded_depth_setting_is_capped() {
    let settings = ParserSettings {
        max_depth: usize::MAX,
        ..ParserSettings::default()
    };
    let lines: Vec<String> = (0..2_000).map(|i| "\t".repeat(i) + "x").collect();

    let parsed = parse_lines_with(&lines, &settings);

    assert_eq!(parsed.result.parsed_elements.len(), 1);
    assert_eq!(parsed.result.element_count(), 2_000);
    assert_eq!(parsed.warnings.len(), 2_000 - HARD_MAX_DEPTH - 1);
    assert!(matches!(
        parsed.warnings[0],
        ParseWarning::DepthClamped { limit: HARD_MAX_DEPTH, .. }
    ));
    snapshot::invariants(&parsed.result);
    assert!(!snapshot::render(&parsed).is_empty());
}

#[test]
fn crlf_input_is_split_into_lines() {
    let parsed = parse_text("Topic: def\r\n\tSub: subdef\r\n");

    let root = &parsed.result.parsed_elements[0];
    assert_eq!(root.definitions(), ["def"]);
    assert_eq!(root.subelements()[0].definitions(), ["subdef"]);
}

#[test]
fn depth_limit_from_settings_clamps_tree() {
    let settings = ParserSettings {
        max_depth: 1,
        ..ParserSettings::default()
    };

    let parsed = parse_lines_with(&["A", "\tB", "\t\tC: c"], &settings);

    let root = &parsed.result.parsed_elements[0];
    assert_eq!(root.subelements().len(), 2);
    assert_eq!(root.subelements()[1].key(), "C");
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::DepthClamped {
            line: 3,
            indent: 2,
            limit: 1
        }]
    );
    snapshot::invariants(&parsed.result);
}

#[test]
fn warnings_list_depth_before_delimiters() {
    let settings = ParserSettings {
        max_depth: 0,
        ..ParserSettings::default()
    };

    let parsed = parse_lines_with(&["x: y: z", "\tdeep"], &settings);

    assert_eq!(parsed.warnings.len(), 2);
    assert!(matches!(parsed.warnings[0], ParseWarning::DepthClamped { line: 2, .. }));
    assert!(matches!(parsed.warnings[1], ParseWarning::ExtraDelimiters { line: 1, .. }));
}
