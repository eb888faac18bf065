//! The in-memory collection of all event records for the session.

use crate::model::{EventId, EventRecord};
use std::collections::{BTreeSet, HashSet};
use tracing::warn;

/// Ordered, read-only sequence of event records with unique identifiers.
///
/// Source order is preserved: it is the order the pass-through sort mode,
/// the featured subset and the similar-events subset all report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<EventRecord>,
}

impl EventStore {
    /// Build a store from records in source order.
    ///
    /// A record whose identifier was already seen is dropped with a warning,
    /// keeping the first occurrence.
    pub fn from_records(records: Vec<EventRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut events = Vec::with_capacity(records.len());

        for record in records {
            if seen.insert(record.id) {
                events.push(record);
            } else {
                warn!(id = %record.id, title = %record.title, "Skipping record with duplicate id");
            }
        }

        Self { events }
    }

    /// All records in source order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up a record by identifier.
    pub fn get(&self, id: EventId) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Distinct categories, sorted. These are the category filter options.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.events.iter().map(|e| e.category.as_str()))
    }

    /// Distinct cities, sorted. These are the location filter options.
    pub fn cities(&self) -> Vec<String> {
        distinct(self.events.iter().map(|e| e.city.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
