//! Reminder model

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a reminder.
///
/// Freshly generated ids are UUID v7 strings, but any string is accepted so
/// ids created elsewhere (or by older clients) survive a round trip. The same
/// value doubles as the geofence request id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(String);

impl ReminderId {
    /// Create a new unique reminder ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ReminderId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ReminderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ReminderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A persisted location reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier, assigned once at creation
    pub id: ReminderId,
    /// Reminder title (required before saving)
    pub title: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Human-readable place name
    pub location: Option<String>,
    /// Latitude of the picked place
    pub latitude: Option<f64>,
    /// Longitude of the picked place
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Create a reminder with a freshly generated id
    #[must_use]
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self::with_id(ReminderId::new(), title, description, location, latitude, longitude)
    }

    /// Create a reminder that keeps a caller-supplied id
    #[must_use]
    pub const fn with_id(
        id: ReminderId,
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }

    /// Coordinates of the picked place, when both are present
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Title for display, falling back to an empty string
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}
