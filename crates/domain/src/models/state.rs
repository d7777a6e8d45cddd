//! The persisted state record, aggregate root of the tracker.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::location::default_locations;
use super::{Location, LocationId, ScheduleConfig, UsageEvent};

/// Everything the tracker knows, loaded and saved as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Locations keyed by id, iterated in ascending id order.
    #[serde(default = "default_locations")]
    pub locations: BTreeMap<LocationId, Location>,
    /// Entries that fail to parse are dropped on load; the rest are kept.
    #[serde(default, deserialize_with = "deserialize_history")]
    pub history: Vec<UsageEvent>,
    #[serde(default, alias = "total_sprays")]
    pub total_usage_count: u64,
    #[serde(default = "default_cycle")]
    pub current_cycle: u32,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_cycle() -> u32 {
    1
}

fn deserialize_history<'de, D>(deserializer: D) -> Result<Vec<UsageEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawEntry {
        Event(UsageEvent),
        Malformed(serde::de::IgnoredAny),
    }

    let entries = Vec::<RawEntry>::deserialize(deserializer)?;
    let total = entries.len();
    let history: Vec<UsageEvent> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            RawEntry::Event(event) => Some(event),
            RawEntry::Malformed(_) => None,
        })
        .collect();

    if history.len() < total {
        warn!(
            skipped = total - history.len(),
            "Dropped unreadable history entries"
        );
    }
    Ok(history)
}

impl Default for StateRecord {
    fn default() -> Self {
        Self {
            locations: default_locations(),
            history: Vec::new(),
            total_usage_count: 0,
            current_cycle: default_cycle(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl StateRecord {
    /// Re-adds any default location missing from the record.
    ///
    /// Returns the ids that were added.
    pub fn backfill_default_locations(&mut self) -> Vec<LocationId> {
        let mut added = Vec::new();
        for (id, location) in default_locations() {
            if let std::collections::btree_map::Entry::Vacant(entry) = self.locations.entry(id) {
                entry.insert(location);
                added.push(id);
            }
        }
        added
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Number of locations used in the current cycle.
    pub fn used_count(&self) -> usize {
        self.locations.values().filter(|l| l.used).count()
    }

    /// Timestamps of the events recorded on `date`, in history order.
    pub fn timestamps_on(&self, date: NaiveDate) -> Vec<NaiveDateTime> {
        self.history
            .iter()
            .map(|event| event.timestamp)
            .filter(|ts| ts.date() == date)
            .collect()
    }
}
