//! Map locations handed back by the place picker

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Label used when the user long-presses an arbitrary spot on the map
pub const CUSTOM_LOCATION_LABEL: &str = "Custom location";
/// Label used when the user keeps the device's current position
pub const CURRENT_LOCATION_LABEL: &str = "Current location";

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reject coordinates outside the WGS84 range (or NaN)
    pub fn validate(self) -> Result<Self> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidInput(format!(
                "latitude {} is out of range",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidInput(format!(
                "longitude {} is out of range",
                self.longitude
            )));
        }
        Ok(self)
    }
}

/// A named place reported by the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub lat_lng: LatLng,
    pub place_id: String,
    pub name: String,
}

/// The marker the user confirmed on the map picker
#[derive(Debug, Clone, PartialEq)]
pub enum MapSelection {
    /// A tapped point of interest
    Poi(PointOfInterest),
    /// A long-pressed arbitrary location
    Custom(LatLng),
    /// The device's last known location
    Current(LatLng),
}

impl MapSelection {
    /// Human-readable label stored with the reminder
    pub fn label(&self) -> String {
        match self {
            Self::Poi(poi) => poi.name.clone(),
            Self::Custom(_) => CUSTOM_LOCATION_LABEL.to_string(),
            Self::Current(_) => CURRENT_LOCATION_LABEL.to_string(),
        }
    }

    pub const fn lat_lng(&self) -> LatLng {
        match self {
            Self::Poi(poi) => poi.lat_lng,
            Self::Custom(lat_lng) | Self::Current(lat_lng) => *lat_lng,
        }
    }

    pub const fn poi(&self) -> Option<&PointOfInterest> {
        match self {
            Self::Poi(poi) => Some(poi),
            Self::Custom(_) | Self::Current(_) => None,
        }
    }
}
