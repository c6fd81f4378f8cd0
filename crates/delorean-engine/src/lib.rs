//! Timecard engine: billing-code extraction, filtering, grouping and
//! fixed-width report rendering over canonical time entries.
//!
//! Everything here is a pure function of its inputs. Callers own the
//! loaded [`EntryCollection`] and a [`ReportOptions`] value and pass both
//! into [`render_report`] for every render.

pub mod aggregate;
pub mod calendar;
pub mod codes;
pub mod filter;
pub mod report;

pub use aggregate::{GroupedAggregate, group_and_aggregate};
pub use calendar::{
    PeriodScale, available_periods, period_bounds, period_label, period_start, step_period,
};
pub use codes::{
    code_key, extract_dlg_number, extract_prj_number, extract_qan_number, extract_tlp_code,
};
pub use filter::{EntryFilter, filter_entries};
pub use report::{Timecard, TimecardBody, TimecardLine, format_report, round_to_quarter_hour};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use delorean_types::{EntryCollection, InvalidStartPolicy};
use tracing::debug;

/// Everything one report render depends on besides the entries
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub range_start: Option<DateTime<Local>>,
    pub range_end_exclusive: Option<DateTime<Local>>,
    pub require_billable: bool,
    pub client_filter: Option<String>,
    pub show_all_descriptions: bool,
    pub invalid_start: InvalidStartPolicy,
    pub generated_at: NaiveDateTime,
}

impl ReportOptions {
    /// Unbounded options; billable filtering is on when the data carries billable flags
    pub fn for_collection(collection: &EntryCollection, generated_at: NaiveDateTime) -> Self {
        Self {
            range_start: None,
            range_end_exclusive: None,
            require_billable: collection.has_billable_data,
            client_filter: None,
            show_all_descriptions: false,
            invalid_start: InvalidStartPolicy::default(),
            generated_at,
        }
    }

    /// Restrict to the period of `scale` containing `anchor`
    pub fn with_period(mut self, anchor: NaiveDate, scale: PeriodScale) -> Self {
        let (start, end) = period_bounds(anchor, scale);
        self.range_start = start;
        self.range_end_exclusive = end;
        self
    }

    pub fn filter(&self) -> EntryFilter {
        EntryFilter {
            min_inclusive: self.range_start,
            max_exclusive: self.range_end_exclusive,
            require_billable: self.require_billable,
            client_name: self.client_filter.clone(),
            invalid_start: self.invalid_start,
        }
    }
}

/// Filter, group and format a collection into the timecard report text
pub fn render_report(collection: &EntryCollection, options: &ReportOptions) -> String {
    let filtered = filter_entries(&collection.entries, &options.filter());
    let aggregates = group_and_aggregate(filtered.iter().copied());
    debug!(
        entries = collection.len(),
        kept = filtered.len(),
        groups = aggregates.len(),
        "rendering timecard"
    );
    format_report(
        &aggregates,
        options.show_all_descriptions,
        options.generated_at,
    )
}
