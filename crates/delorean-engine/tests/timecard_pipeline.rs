use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use delorean_engine::{
    GroupedAggregate, PeriodScale, ReportOptions, group_and_aggregate, render_report,
};
use delorean_providers::load_csv_reader;
use delorean_testing::assertions::{assert_timecard_lines, report_value, table_rows};
use delorean_testing::{EntryBuilder, TogglCsv};
use delorean_types::{EntryCollection, InvalidStartPolicy, TimeEntry};

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 28)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
}

fn portal_csv() -> EntryCollection {
    let csv = TogglCsv::new()
        .row(&[
            ("Description", "Portal fix DLG 4411"),
            ("Billable", "Yes"),
            ("Duration", "1:00:00"),
            ("Project", "PRJ 7 Portal"),
            ("Tags", "tlp12345"),
            ("Start date", "2025-11-27"),
            ("Start time", "09:00:00"),
        ])
        .row(&[
            ("Description", "Portal fix DLG 4411"),
            ("Billable", "Yes"),
            ("Duration", "0:20:00"),
            ("Project", "PRJ 7 Portal"),
            ("Tags", "tlp12345"),
            ("Start date", "2025-11-27"),
            ("Start time", "14:00:00"),
        ])
        .build();
    load_csv_reader(csv.as_bytes()).unwrap()
}

#[test]
fn test_two_csv_rows_collapse_into_one_line() {
    let collection = portal_csv();
    let options = ReportOptions::for_collection(&collection, generated_at())
        .with_period(day(27), PeriodScale::Day);
    assert!(options.require_billable);

    let report = render_report(&collection, &options);

    let rule = "=".repeat(89);
    let dash = "-".repeat(89);
    let expected = [
        "DeLorean Transfer Timecard Report".to_string(),
        "Report date: 2025-11-27".to_string(),
        String::new(),
        "Timecard Entries:".to_string(),
        format!(
            "TLP   | Dev Log  | QAN      | PRJ      | Hours | {:<40}",
            "Descriptions (Sample)"
        ),
        rule,
        format!(
            "12345 |     4411 |          |        7 |  1.25 | {:<40}",
            "Portal fix DLG 4411"
        ),
        dash,
        format!(
            "    1 |        1 |        0 |        1 |  1.25 | {:<40}",
            "1   (distinct entities)"
        ),
        String::new(),
        String::new(),
        "Total Rounded hours: 1.25 hrs".to_string(),
        "Total Actual hours: 1.33 hrs  (Gap: -5.0 mins)".to_string(),
        String::new(),
        "Total Timecard Lines: 1".to_string(),
        "Total Represented Entries: 2".to_string(),
        String::new(),
        String::new(),
        "Generated on: 2025-11-28 12:00:00".to_string(),
    ]
    .join("\n")
        + "\n";

    assert_eq!(report, expected);
}

#[test]
fn test_other_days_are_filtered_out() {
    let collection = portal_csv();
    let options = ReportOptions::for_collection(&collection, generated_at())
        .with_period(day(26), PeriodScale::Day);
    let report = render_report(&collection, &options);
    assert!(report.contains("No loggable time entries.\n"));
    assert!(!report.contains("Report date:"));
}

#[test]
fn test_empty_input_only_has_message() {
    let collection = EntryCollection::default();
    let options = ReportOptions::for_collection(&collection, generated_at());
    assert_eq!(
        render_report(&collection, &options),
        "DeLorean Transfer Timecard Report\n\nNo loggable time entries.\n\n\nGenerated on: 2025-11-28 12:00:00\n"
    );
}

#[test]
fn test_rows_without_tlp_count_toward_totals_only() {
    let collection = EntryCollection::from_entries(vec![
        EntryBuilder::new()
            .tags(&["tlp12345"])
            .description("coded")
            .seconds(3600)
            .build(),
        EntryBuilder::new()
            .tags(&["tlp00000"])
            .description("zero code")
            .seconds(1800)
            .build(),
        EntryBuilder::new()
            .description("uncoded")
            .seconds(1800)
            .build(),
    ]);
    let options = ReportOptions::for_collection(&collection, generated_at());
    let report = render_report(&collection, &options);

    assert_timecard_lines(&report, 1).unwrap();
    assert_eq!(table_rows(&report).len(), 1);
    assert!(!report.contains("uncoded"));
    assert!(!report.contains("zero code"));
    assert_eq!(report_value(&report, "Total Actual hours:").unwrap(), "2.00 hrs");
    assert_eq!(report_value(&report, "Total Rounded hours:").unwrap(), "2.00 hrs");
    assert_eq!(report_value(&report, "Total Represented Entries:").unwrap(), "1");
}

#[test]
fn test_quarter_hour_gap_reconciliation() {
    let collection = EntryCollection::from_entries(vec![
        EntryBuilder::new().tags(&["tlp12345"]).seconds(5000).build(),
        EntryBuilder::new().tags(&["tlp12345"]).seconds(430).build(),
    ]);
    let report = render_report(
        &collection,
        &ReportOptions::for_collection(&collection, generated_at()),
    );
    assert!(report.contains("Total Rounded hours: 1.50 hrs\n"));
    assert!(report.contains("Total Actual hours: 1.51 hrs  (Gap: -0.5 mins)\n"));
}

fn sample_entries() -> Vec<TimeEntry> {
    let at = |d: u32, h: u32| Local.with_ymd_and_hms(2025, 11, d, h, 0, 0).unwrap();
    vec![
        EntryBuilder::new().tags(&["tlp12345"]).project("PRJ 7").description("a").seconds(600).start(at(24, 9)).build(),
        EntryBuilder::new().tags(&["tlp12345"]).project("PRJ 100").description("b").seconds(1200).start(at(24, 10)).build(),
        EntryBuilder::new().tags(&["tlp54321"]).project("PRJ 99").description("c DLG 3").seconds(1800).start(at(25, 9)).build(),
        EntryBuilder::new().tags(&["tlp12345"]).project("PRJ 7").description("d").seconds(2400).start(at(25, 11)).build(),
        EntryBuilder::new().tags(&["tlp54321"]).project("PRJ 99").description("QAN 12").seconds(3000).start(at(26, 9)).build(),
        EntryBuilder::new().description("no codes").seconds(3600).start(at(26, 10)).build(),
        EntryBuilder::new().tags(&["tlp54321"]).project("PRJ 99").description("e DLG 3").seconds(4200).start(at(27, 9)).build(),
    ]
}

fn summarize(aggregates: &[GroupedAggregate<'_>]) -> Vec<(String, u64, Vec<String>)> {
    aggregates
        .iter()
        .map(|a| {
            let mut descriptions: Vec<String> =
                a.entries.iter().map(|e| e.description.clone()).collect();
            descriptions.sort();
            (a.key.composite(), a.total_seconds, descriptions)
        })
        .collect()
}

#[test]
fn test_grouping_ignores_input_order() {
    let entries = sample_entries();
    let baseline = summarize(&group_and_aggregate(&entries));

    let mut reversed = entries.clone();
    reversed.reverse();
    assert_eq!(summarize(&group_and_aggregate(&reversed)), baseline);

    for shift in 1..entries.len() {
        let mut rotated = entries.clone();
        rotated.rotate_left(shift);
        assert_eq!(summarize(&group_and_aggregate(&rotated)), baseline);
    }

    let keys: Vec<&str> = baseline.iter().map(|(key, _, _)| key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "|||",
            "12345|100||",
            "12345|7||",
            "54321|99||12",
            "54321|99|3|",
        ]
    );
}

#[test]
fn test_report_text_ignores_input_order() {
    let entries = sample_entries();
    let mut reversed = entries.clone();
    reversed.reverse();

    let options = ReportOptions {
        show_all_descriptions: true,
        ..ReportOptions::for_collection(&EntryCollection::default(), generated_at())
    };
    let forward = render_report(&EntryCollection::from_entries(entries), &options);
    let backward = render_report(&EntryCollection::from_entries(reversed), &options);
    assert_eq!(forward, backward);
    assert!(forward.contains("Report date: 2025-11-24 to 2025-11-27\n"));
}

#[test]
fn test_invalid_start_policy_in_bounded_report() {
    let collection = EntryCollection::from_entries(vec![
        EntryBuilder::new().tags(&["tlp12345"]).seconds(3600).build(),
    ]);
    let mut options = ReportOptions::for_collection(&collection, generated_at())
        .with_period(day(27), PeriodScale::Week);

    let report = render_report(&collection, &options);
    assert!(report.contains("No loggable time entries."));

    options.invalid_start = InvalidStartPolicy::Include;
    let report = render_report(&collection, &options);
    assert_timecard_lines(&report, 1).unwrap();
    // No valid start, so no date caption
    assert!(report.starts_with("DeLorean Transfer Timecard Report\n\n"));
}

#[test]
fn test_client_filter() {
    let collection = EntryCollection::from_entries(vec![
        EntryBuilder::new().tags(&["tlp12345"]).client("Acme").seconds(3600).build(),
        EntryBuilder::new().tags(&["tlp54321"]).client("Globex").seconds(3600).build(),
    ]);
    let options = ReportOptions {
        client_filter: Some("Globex".to_string()),
        ..ReportOptions::for_collection(&collection, generated_at())
    };
    let report = render_report(&collection, &options);
    let rows = table_rows(&report);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("54321 |"));
}
