use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveTime, TimeZone};
use delorean_types::TimeEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Granularity of a report period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodScale {
    #[default]
    Day,
    Week,
    Month,
    All,
}

impl PeriodScale {
    pub fn id(&self) -> &'static str {
        match self {
            PeriodScale::Day => "day",
            PeriodScale::Week => "week",
            PeriodScale::Month => "month",
            PeriodScale::All => "all",
        }
    }
}

impl fmt::Display for PeriodScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// First day of the period containing `date`; weeks start on Sunday
pub fn period_start(date: NaiveDate, scale: PeriodScale) -> Option<NaiveDate> {
    match scale {
        PeriodScale::Day => Some(date),
        PeriodScale::Week => {
            let back = date.weekday().num_days_from_sunday();
            Some(date - Duration::days(i64::from(back)))
        }
        PeriodScale::Month => date.with_day(1),
        PeriodScale::All => None,
    }
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        // Midnight skipped by a DST change
        .or_else(|| {
            date.and_hms_opt(1, 0, 0)
                .and_then(|t| Local.from_local_datetime(&t).earliest())
        })
}

/// Half-open `[min, max)` instant bounds of the period containing `anchor`
pub fn period_bounds(
    anchor: NaiveDate,
    scale: PeriodScale,
) -> (Option<DateTime<Local>>, Option<DateTime<Local>>) {
    let Some(start) = period_start(anchor, scale) else {
        return (None, None);
    };

    let end = match scale {
        PeriodScale::Day => start.checked_add_days(chrono::Days::new(1)),
        PeriodScale::Week => start.checked_add_days(chrono::Days::new(7)),
        PeriodScale::Month => start.checked_add_months(Months::new(1)),
        PeriodScale::All => None,
    };

    (local_midnight(start), end.and_then(local_midnight))
}

/// Sorted distinct period starts covering every entry with a valid start
pub fn available_periods(entries: &[TimeEntry], scale: PeriodScale) -> Vec<NaiveDate> {
    entries
        .iter()
        .filter_map(TimeEntry::start_day)
        .filter_map(|day| period_start(day, scale))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Move `steps` positions from `current`, wrapping at either end
///
/// When `current` is absent or not among `periods` the walk starts at the
/// first period.
pub fn step_period(
    periods: &[NaiveDate],
    current: Option<NaiveDate>,
    steps: i64,
) -> Option<NaiveDate> {
    if periods.is_empty() {
        return None;
    }

    let index = current
        .and_then(|c| periods.iter().position(|p| *p == c))
        .unwrap_or(0) as i64;
    let len = periods.len() as i64;
    let next = (index + steps.rem_euclid(len)).rem_euclid(len) as usize;
    periods.get(next).copied()
}

/// Human label for a period start
pub fn period_label(date: NaiveDate, scale: PeriodScale) -> String {
    match scale {
        PeriodScale::Day => date.format("%Y-%m-%d (%a)").to_string(),
        PeriodScale::Week => {
            let end = date + Duration::days(6);
            format!("{} - {}", date.format("%b %-d"), end.format("%b %-d, %y"))
        }
        PeriodScale::Month => date.format("%B %Y").to_string(),
        PeriodScale::All => "All time".to_string(),
    }
}
