use delorean_providers::{SourceAdapter, create_adapter, detect_source, load_file};
use delorean_types::SourceKind;
use std::path::Path;

const CSV_SAMPLE: &str = "tests/samples/toggl_export.csv";
const API_SAMPLE: &str = "tests/samples/toggl_api.json";

#[test]
fn test_detects_sample_formats() {
    assert_eq!(detect_source(Path::new(CSV_SAMPLE)).unwrap(), SourceKind::TogglCsv);
    assert_eq!(detect_source(Path::new(API_SAMPLE)).unwrap(), SourceKind::TogglApi);
}

#[test]
fn test_csv_export_normalizes_every_row() {
    let collection = load_file(Path::new(CSV_SAMPLE), None).unwrap();

    // The malformed last row is kept, not dropped
    assert_eq!(collection.len(), 6);
    assert!(collection.has_client_data);
    assert!(collection.has_billable_data);

    let first = &collection.entries[0];
    assert_eq!(first.description, "Portal login fix DLG 4411");
    assert_eq!(first.duration_seconds, Some(3600));
    assert_eq!(first.tag_names, vec!["tlp12345"]);
    assert_eq!(first.client_name.as_deref(), Some("Acme"));
    assert_eq!(first.user_name, "Sam Rivera");
    assert_eq!(first.original.raw["Email"], "sam@example.com");

    // Empty Duration column falls back to stop - start
    assert_eq!(collection.entries[2].duration_seconds, Some(2700));
    assert_eq!(collection.entries[2].tag_names, vec!["tlp12345", "qa"]);

    let standup = &collection.entries[3];
    assert_eq!(standup.client_name, None);
    assert_eq!(standup.billable, Some(false));
    assert!(standup.tag_names.is_empty());

    let broken = &collection.entries[5];
    assert_eq!(broken.start, None);
    assert_eq!(broken.stop, None);
    assert_eq!(broken.duration_seconds, Some(0));
    assert_eq!(broken.billable, None);
}

#[test]
fn test_api_response_normalizes_every_row() {
    let collection = load_file(Path::new(API_SAMPLE), None).unwrap();

    assert_eq!(collection.len(), 4);
    assert!(collection.has_client_data);
    assert!(collection.has_billable_data);

    // stop - start (90 min) wins over the duration field (60 s)
    assert_eq!(collection.entries[0].duration_seconds, Some(5400));
    assert_eq!(collection.entries[0].project_name, "PRJ 7 Customer Portal");

    // No stop: the duration field is used
    assert_eq!(collection.entries[1].duration_seconds, Some(1200));
    assert_eq!(collection.entries[1].client_name, None);
    assert!(collection.entries[1].tag_names.is_empty());

    // Running timer: magnitude of the negative duration
    assert_eq!(collection.entries[2].duration_seconds, Some(1));
    assert_eq!(collection.entries[2].tag_names, vec!["tlp54321"]);

    // A non-object item still yields an (empty) entry
    let junk = &collection.entries[3];
    assert_eq!(junk.start, None);
    assert_eq!(junk.duration_seconds, Some(0));
    assert_eq!(junk.original.raw, "not an entry");
}

#[test]
fn test_adapter_parse_str_matches_load_file() {
    let text = std::fs::read_to_string(CSV_SAMPLE).unwrap();
    let rows = create_adapter(SourceKind::TogglCsv).parse_str(&text).unwrap();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.kind() == SourceKind::TogglCsv));
}

#[test]
fn test_missing_duration_uses_rounded_span() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(
        &path,
        "Description,Start date,Start time,Stop date,Stop time\n\
         Overnight,2025-11-27,23:30:00,2025-11-28,00:15:10\n",
    )
    .unwrap();

    let collection = load_file(&path, None).unwrap();
    assert_eq!(collection.entries[0].duration_seconds, Some(45 * 60 + 10));
}

#[test]
fn test_invalid_utf8_row_keeps_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.csv");

    let mut bytes = b"Description,Duration,Tags\nFirst,0:30:00,tlp12345\n".to_vec();
    // Latin-1 "Caf\xe9"
    bytes.extend_from_slice(b"Caf\xe9 review,0:15:00,tlp12345\n");
    bytes.extend_from_slice(b"Last,1:00:00,tlp54321\n");
    std::fs::write(&path, bytes).unwrap();

    let collection = load_file(&path, Some(SourceKind::TogglCsv)).unwrap();
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.entries[0].description, "First");
    assert_eq!(collection.entries[1].description, "Caf\u{fffd} review");
    assert_eq!(collection.entries[1].duration_seconds, Some(900));
    assert_eq!(collection.entries[2].duration_seconds, Some(3600));

    // Detection sniffs the same bytes without failing
    assert_eq!(detect_source(&path).unwrap(), SourceKind::TogglCsv);
}
