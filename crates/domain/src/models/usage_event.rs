//! Usage event domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::LocationId;

/// One recorded use of a location. Appended to the history, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEvent {
    #[serde(deserialize_with = "deserialize_location_id")]
    pub location_id: LocationId,
    /// Location name at the time of the event.
    pub location_name: String,
    pub timestamp: NaiveDateTime,
    /// Cycle the event was recorded in.
    pub cycle: u32,
}

/// Older records store the location id as a decimal string.
fn deserialize_location_id<'de, D>(deserializer: D) -> Result<LocationId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(LocationId),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
