//! Event record and identifier types.
//!
//! Records are deserialized once by the loader and never mutated afterwards.
//! Field names on the wire are camelCase to match the data files produced
//! for the listing site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown when a record has no `imageUrl`.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.svg";

/// Description shown when a record has no `description`.
pub const DEFAULT_DESCRIPTION: &str = "Join us for an amazing community event!";

/// Extended description shown when a record has no `extendedDescription`.
pub const DEFAULT_EXTENDED_DESCRIPTION: &str =
    "Experience the vibrant culture and community spirit.";

/// Organizer shown when a record has no `organizer`.
pub const DEFAULT_ORGANIZER: &str = "Community Organizer";

/// Admission label. Every listed event is free.
pub const ADMISSION: &str = "FREE";

/// Unique identifier of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One bookable community event with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Unique identifier.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Category label, e.g. "music" or "art".
    pub category: String,
    /// City the event takes place in.
    pub city: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Free-form start time, e.g. "18:00".
    pub time: String,
    /// Venue name.
    pub location_name: String,
    /// Organizer name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    /// Image location, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Long description shown on the detail screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_description: Option<String>,
    /// Flagged for promotional display on the home screen.
    #[serde(default)]
    pub is_featured: bool,
}

impl EventRecord {
    /// Image location with the placeholder fallback.
    pub fn image_or_placeholder(&self) -> &str {
        non_blank(self.image_url.as_deref()).unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Description with the default fallback.
    pub fn description_or_default(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Extended description with the default fallback.
    pub fn extended_description_or_default(&self) -> &str {
        non_blank(self.extended_description.as_deref()).unwrap_or(DEFAULT_EXTENDED_DESCRIPTION)
    }

    /// Organizer with the default fallback.
    pub fn organizer_or_default(&self) -> &str {
        non_blank(self.organizer.as_deref()).unwrap_or(DEFAULT_ORGANIZER)
    }

    /// Location of this record's detail screen.
    pub fn detail_location(&self) -> String {
        format!("landingpage.html?id={}", self.id)
    }

    /// Location of this record's RSVP screen.
    pub fn rsvp_location(&self) -> String {
        format!("RSVP.html?id={}", self.id)
    }
}

// The data files use empty strings as often as they omit the key.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
