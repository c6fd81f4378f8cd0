use crate::args::ReportArgs;
use crate::config::Config;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use delorean_engine::{
    PeriodScale, ReportOptions, available_periods, period_start, render_report, step_period,
};
use delorean_types::TimeEntry;
use tracing::debug;

use super::load_collection;

/// Period start to report on: the explicit date's period, else the first
/// available one, moved `shift` periods with wrap-around
fn select_period(
    entries: &[TimeEntry],
    scale: PeriodScale,
    requested: Option<NaiveDate>,
    shift: i64,
) -> Option<NaiveDate> {
    if scale == PeriodScale::All {
        return None;
    }

    let periods = available_periods(entries, scale);
    let anchor = match requested {
        Some(date) => period_start(date, scale),
        None => periods.first().copied(),
    };

    if shift == 0 {
        anchor
    } else {
        step_period(&periods, anchor, shift).or(anchor)
    }
}

pub fn handle(config: &Config, args: ReportArgs) -> Result<()> {
    let collection = load_collection(&args.file, args.source)?;

    let scale = args.scale.map(Into::into).unwrap_or(config.report.scale);
    let period = select_period(&collection.entries, scale, args.period, args.shift);
    debug!(scale = %scale, period = ?period, "selected report period");

    let mut options = ReportOptions::for_collection(&collection, Local::now().naive_local());
    if let Some(anchor) = period {
        options = options.with_period(anchor, scale);
    }
    options.require_billable = collection.has_billable_data && !args.include_non_billable;
    options.client_filter = args.client.or_else(|| config.report.client.clone());
    options.show_all_descriptions = args.all_descriptions || config.report.show_all_descriptions;
    options.invalid_start = args
        .invalid_start
        .map(Into::into)
        .unwrap_or(config.report.invalid_start);

    print!("{}", render_report(&collection, &options));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use delorean_testing::EntryBuilder;

    fn ymd(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    fn entries() -> Vec<TimeEntry> {
        [24, 25, 26]
            .into_iter()
            .map(|d| {
                EntryBuilder::new()
                    .start(Local.with_ymd_and_hms(2025, 11, d, 9, 0, 0).unwrap())
                    .build()
            })
            .collect()
    }

    #[test]
    fn test_defaults_to_first_period() {
        assert_eq!(select_period(&entries(), PeriodScale::Day, None, 0), Some(ymd(24)));
        assert_eq!(select_period(&entries(), PeriodScale::Week, None, 0), Some(ymd(23)));
        assert_eq!(select_period(&entries(), PeriodScale::All, None, 0), None);
    }

    #[test]
    fn test_shift_wraps() {
        assert_eq!(select_period(&entries(), PeriodScale::Day, None, 1), Some(ymd(25)));
        assert_eq!(select_period(&entries(), PeriodScale::Day, None, -1), Some(ymd(26)));
        assert_eq!(
            select_period(&entries(), PeriodScale::Day, Some(ymd(26)), 1),
            Some(ymd(24))
        );
    }

    #[test]
    fn test_requested_date_snaps_to_period_start() {
        assert_eq!(
            select_period(&entries(), PeriodScale::Month, Some(ymd(27)), 0),
            Some(ymd(1))
        );
        // Dates without data are still reportable
        assert_eq!(
            select_period(&entries(), PeriodScale::Day, Some(ymd(30)), 0),
            Some(ymd(30))
        );
    }

    #[test]
    fn test_no_entries_without_request() {
        assert_eq!(select_period(&[], PeriodScale::Day, None, 3), None);
    }
}
