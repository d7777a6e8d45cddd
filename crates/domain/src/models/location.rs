//! Location domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a tracked location. Stable and never reused.
pub type LocationId = u32;

/// A physical site that takes part in the rotation.
///
/// The id is the key of the location map in [`super::StateRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Short slug used by clients to place the site on a map.
    #[serde(default)]
    pub position: String,
    /// Whether the location was used in the current cycle.
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub last_used: Option<NaiveDateTime>,
}

impl Location {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            used: false,
            last_used: None,
        }
    }
}

/// The location set every fresh record starts with.
pub fn default_locations() -> BTreeMap<LocationId, Location> {
    BTreeMap::from([
        (1, Location::new("Left of Mouth", "left-mouth")),
        (2, Location::new("Right of Mouth", "right-mouth")),
        (3, Location::new("Under the Tongue", "under-tongue")),
    ])
}
