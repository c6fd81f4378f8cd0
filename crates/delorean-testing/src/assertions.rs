//! Assertions over rendered report text.

use anyhow::{Context, Result};

/// Value after `label` on the line starting with it
pub fn report_value<'a>(report: &'a str, label: &str) -> Result<&'a str> {
    report
        .lines()
        .find_map(|line| line.strip_prefix(label))
        .map(str::trim)
        .with_context(|| format!("report has no line starting with {label:?}"))
}

/// Assert the `Total Timecard Lines` count
pub fn assert_timecard_lines(report: &str, expected: usize) -> Result<()> {
    let value = report_value(report, "Total Timecard Lines:")?;
    let actual: usize = value
        .parse()
        .with_context(|| format!("invalid line count {value:?}"))?;
    if actual != expected {
        anyhow::bail!("Expected {} timecard lines, got {}", expected, actual);
    }
    Ok(())
}

/// Itemized table rows (between the `=` and `-` rules)
pub fn table_rows(report: &str) -> Vec<&str> {
    report
        .lines()
        .skip_while(|line| !line.starts_with("==="))
        .skip(1)
        .take_while(|line| !line.starts_with("---"))
        .collect()
}
