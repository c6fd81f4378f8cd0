use chrono::{DateTime, Local};
use delorean_types::{InvalidStartPolicy, TimeEntry};

/// Predicate deciding which entries reach the timecard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub min_inclusive: Option<DateTime<Local>>,
    pub max_exclusive: Option<DateTime<Local>>,
    pub require_billable: bool,
    pub client_name: Option<String>,
    pub invalid_start: InvalidStartPolicy,
}

impl EntryFilter {
    fn has_bounds(&self) -> bool {
        self.min_inclusive.is_some() || self.max_exclusive.is_some()
    }

    pub fn matches(&self, entry: &TimeEntry) -> bool {
        if self.require_billable && !entry.is_billable() {
            return false;
        }

        if let Some(client) = &self.client_name
            && entry.client_name.as_deref() != Some(client.as_str())
        {
            return false;
        }

        if !self.has_bounds() {
            return true;
        }

        let Some(start) = entry.start else {
            return self.invalid_start == InvalidStartPolicy::Include;
        };

        self.min_inclusive.is_none_or(|min| start >= min)
            && self.max_exclusive.is_none_or(|max| start < max)
    }
}

/// Entries accepted by `filter`, in input order
pub fn filter_entries<'a>(entries: &'a [TimeEntry], filter: &EntryFilter) -> Vec<&'a TimeEntry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}
