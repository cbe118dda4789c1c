//! Tests for catalog loading and the query operations.

use std::io::Write;

use horaire_catalog::{
    course_codes, filter_by_courses, load_catalog, section_details, sections_for_term,
    CatalogError, MeetingRecord,
};
use horaire_engine::UNPARSED_MINUTES;
use tempfile::NamedTempFile;

/// Helper to build an in-memory record with the fields the queries read.
fn record(name: &str, day: &str, start: &str, end: &str) -> MeetingRecord {
    MeetingRecord {
        name: name.to_string(),
        group: String::new(),
        day: day.to_string(),
        dates: String::new(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        location: String::new(),
        kind: String::new(),
        teacher: String::new(),
    }
}

/// Helper to write a catalog JSON file and return its handle.
fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(file, "{}", content).unwrap();
    file
}

// ─────────────────────────────────────────────────────────────────────────────
// load_catalog
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn load_catalog_reads_records_with_defaults() {
    let file = write_catalog(
        r#"[
            {
                "name": "MAT1000-automne2025-A",
                "group": "A",
                "day": "Lundi",
                "start_time": "10h30",
                "end_time": "12h00",
                "location": "B-1234",
                "type": "TH",
                "teacher": "Dupont"
            },
            {"name": "INF1120-automne2025-A"}
        ]"#,
    );

    let records = load_catalog(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "MAT1000-automne2025-A");
    assert_eq!(records[0].kind, "TH", "the `type` column maps to `kind`");
    assert_eq!(records[0].teacher, "Dupont");
    // Absent fields come back as empty strings, not as errors.
    assert_eq!(records[1].day, "");
    assert_eq!(records[1].start_time, "");
}

#[test]
fn load_catalog_missing_file_is_an_io_error() {
    let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }), "got {err}");
}

#[test]
fn load_catalog_rejects_malformed_json() {
    let file = write_catalog("{ not json ]");
    let err = load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)), "got {err}");
}

#[test]
fn load_catalog_rejects_a_non_array_document() {
    let file = write_catalog(r#"{"name": "MAT1000-automne2025-A"}"#);
    let err = load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)), "got {err}");
}

// ─────────────────────────────────────────────────────────────────────────────
// sections_for_term
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn rows_sharing_an_identifier_become_one_section() {
    let records = vec![
        record("MAT1000-automne2025-A", "Lundi", "10h30", "12h00"),
        record("MAT1000-automne2025-A", "Jeudi", "10h30", "12h00"),
    ];

    let sections = sections_for_term(&records, "automne2025");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].slots.len(), 2);
    assert_eq!(sections[0].slots[0].day, "Lundi");
    assert_eq!(sections[0].slots[1].day, "Jeudi");
}

#[test]
fn term_match_is_case_insensitive() {
    let records = vec![record("MAT1000-Automne2025-A", "Lundi", "10h30", "12h00")];

    let sections = sections_for_term(&records, "AUTOMNE2025");

    assert_eq!(sections.len(), 1);
}

#[test]
fn other_terms_and_malformed_names_are_skipped() {
    let records = vec![
        record("MAT1000-automne2025-A", "Lundi", "10h30", "12h00"),
        record("PHI1001-ete2025-A", "Mardi", "9h00", "10h30"),
        record("SEMINAIRE", "Vendredi", "14h00", "16h00"),
        record("INF1120-automne2025-A-extra", "Lundi", "8h30", "10h00"),
    ];

    let sections = sections_for_term(&records, "automne2025");

    assert_eq!(sections.len(), 1, "only the well-formed automne2025 row stays");
    assert_eq!(sections[0].identifier, "MAT1000-automne2025-A");
}

#[test]
fn clock_text_is_parsed_into_minutes() {
    let records = vec![
        record("MAT1000-automne2025-A", "Lundi", "10h30", "12h00"),
        record("CHM1301-automne2025-A", "Mercredi", "midi", "13h00"),
    ];

    let sections = sections_for_term(&records, "automne2025");

    assert_eq!(sections[0].slots[0].start, 630);
    assert_eq!(sections[0].slots[0].end, 720);
    // Garbage clock text degrades to the sentinel instead of dropping the row.
    assert_eq!(sections[1].slots[0].start, UNPARSED_MINUTES);
    assert_eq!(sections[1].slots[0].end, 780);
}

#[test]
fn sections_come_in_first_seen_file_order() {
    let records = vec![
        record("PHI1001-automne2025-A", "Mardi", "9h00", "10h30"),
        record("MAT1000-automne2025-A", "Lundi", "10h30", "12h00"),
        record("PHI1001-automne2025-A", "Jeudi", "9h00", "10h30"),
    ];

    let sections = sections_for_term(&records, "automne2025");

    let order: Vec<&str> = sections.iter().map(|s| s.identifier.as_str()).collect();
    assert_eq!(order, vec!["PHI1001-automne2025-A", "MAT1000-automne2025-A"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// filter_by_courses / section_details / course_codes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn course_filter_matches_by_substring() {
    let records = vec![
        record("MAT1000-automne2025-A", "Lundi", "10h30", "12h00"),
        record("MAT2050-automne2025-A", "Mardi", "10h30", "12h00"),
        record("INF1120-automne2025-A", "Mercredi", "10h30", "12h00"),
    ];
    let sections = sections_for_term(&records, "automne2025");

    let just_one = filter_by_courses(&sections, &["MAT1000".to_string()]);
    assert_eq!(just_one.len(), 1);

    // A bare prefix selects every course containing it.
    let prefix = filter_by_courses(&sections, &["MAT".to_string()]);
    assert_eq!(prefix.len(), 2);

    let none = filter_by_courses(&sections, &[]);
    assert!(none.is_empty(), "no requested codes selects nothing");
}

#[test]
fn section_details_returns_every_row_of_the_exact_match() {
    let records = vec![
        record("MAT1000-automne2025-A", "Lundi", "10h30", "12h00"),
        record("MAT1000-automne2025-A", "Jeudi", "10h30", "12h00"),
        record("MAT1000-automne2025-B", "Mardi", "9h00", "10h30"),
    ];

    let rows = section_details(&records, "MAT1000-automne2025-A");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.name == "MAT1000-automne2025-A"));

    assert!(section_details(&records, "MAT1000").is_empty(), "prefix is not exact");
    assert!(section_details(&records, "XYZ9999-automne2025-A").is_empty());
}

#[test]
fn course_codes_are_sorted_and_deduplicated() {
    let records = vec![
        record("PHI1001-ete2025-A", "Mardi", "9h00", "10h30"),
        record("MAT1000-automne2025-A", "Lundi", "10h30", "12h00"),
        record("MAT1000-automne2025-B", "Mardi", "9h00", "10h30"),
        record("INF1120-automne2025-A", "Mercredi", "13h30", "15h00"),
    ];

    let all = course_codes(&records, None);
    assert_eq!(all, vec!["INF1120", "MAT1000", "PHI1001"]);

    let fall_only = course_codes(&records, Some("automne2025"));
    assert_eq!(fall_only, vec!["INF1120", "MAT1000"]);
}
