//! Geofence definitions handed to the platform registrar

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{LatLng, Reminder};

/// Radius used when none is configured
pub const DEFAULT_RADIUS_METERS: f32 = 100.0;

/// Region transitions a geofence can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionType {
    Enter,
    Exit,
    Dwell,
}

/// How long the platform keeps a geofence alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceExpiration {
    #[default]
    Never,
    AfterSeconds(u64),
}

impl GeofenceExpiration {
    /// `None` means the geofence never expires
    pub const fn duration(self) -> Option<Duration> {
        match self {
            Self::Never => None,
            Self::AfterSeconds(secs) => Some(Duration::from_secs(secs)),
        }
    }
}

/// A circular region tagged with the reminder it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Geofence {
    /// Equal to the reminder id so a triggered fence maps back to it
    pub request_id: String,
    pub center: LatLng,
    pub radius_meters: f32,
    pub expiration: GeofenceExpiration,
    pub transition: TransitionType,
}

impl Geofence {
    /// Build an enter-triggered geofence centered on the reminder's place
    pub fn for_reminder(
        reminder: &Reminder,
        radius_meters: f32,
        expiration: GeofenceExpiration,
    ) -> Result<Self> {
        let (latitude, longitude) = reminder.coordinates().ok_or_else(|| {
            Error::InvalidInput(format!("reminder {} has no coordinates", reminder.id))
        })?;
        let center = LatLng::new(latitude, longitude).validate()?;

        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "geofence radius must be positive, got {radius_meters}"
            )));
        }

        Ok(Self {
            request_id: reminder.id.to_string(),
            center,
            radius_meters,
            expiration,
            transition: TransitionType::Enter,
        })
    }
}

/// A batch of geofences plus the transition to report on registration
#[derive(Debug, Clone, PartialEq)]
pub struct GeofencingRequest {
    /// Fire immediately if the device is already inside the region
    pub initial_trigger: Option<TransitionType>,
    pub geofences: Vec<Geofence>,
}

impl GeofencingRequest {
    pub fn single(geofence: Geofence) -> Self {
        Self {
            initial_trigger: Some(TransitionType::Enter),
            geofences: vec![geofence],
        }
    }
}
