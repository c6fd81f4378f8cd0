use delorean_types::{CodeKey, TimeEntry};
use std::collections::HashMap;

use crate::codes::code_key;

/// Entries sharing one billing-code key
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedAggregate<'a> {
    pub key: CodeKey,
    pub total_seconds: u64,
    pub entries: Vec<&'a TimeEntry>,
}

impl<'a> GroupedAggregate<'a> {
    fn new(key: CodeKey) -> Self {
        Self {
            key,
            total_seconds: 0,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, entry: &'a TimeEntry) {
        self.total_seconds += entry.seconds();
        self.entries.push(entry);
    }

    pub fn hours(&self) -> f64 {
        self.total_seconds as f64 / 3600.0
    }
}

/// Group entries by composite code key, in report order
///
/// Order: PRJ, TLP, DLG, QAN (lexical), then total seconds descending.
pub fn group_and_aggregate<'a, I>(entries: I) -> Vec<GroupedAggregate<'a>>
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut groups: HashMap<String, GroupedAggregate<'a>> = HashMap::new();

    for entry in entries {
        let key = code_key(entry);
        groups
            .entry(key.composite())
            .or_insert_with(|| GroupedAggregate::new(key))
            .push(entry);
    }

    let mut aggregates: Vec<_> = groups.into_values().collect();
    aggregates.sort_by(|a, b| {
        a.key
            .report_cmp(&b.key)
            .then_with(|| b.total_seconds.cmp(&a.total_seconds))
    });
    aggregates
}
