//! Application configuration.
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below. Unknown fields are rejected so typos surface early.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geofence::{FlowConfig, GeofenceExpiration, DEFAULT_RADIUS_METERS};
use crate::util::normalize_text_option;

/// Default database file name inside the data directory
pub const DEFAULT_DB_FILE: &str = "georemind.db";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Reminder database path; the front end picks one when unset
    pub database_path: Option<String>,
    pub geofence_radius_meters: f32,
    pub geofence_expiration: GeofenceExpiration,
    pub require_background_permission: bool,
    pub max_settings_resolutions: u32,
    /// Run store calls on the blocking thread pool
    pub blocking_store: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            geofence_radius_meters: DEFAULT_RADIUS_METERS,
            geofence_expiration: GeofenceExpiration::Never,
            require_background_permission: true,
            max_settings_resolutions: 3,
            blocking_store: true,
        }
    }
}

impl AppConfig {
    /// Load config from `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(error) => return Err(error.into()),
        };
        Self::parse(&raw)
    }

    /// Parse and validate a JSON config payload
    pub fn parse(raw: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.database_path = normalize_text_option(config.database_path);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.geofence_radius_meters.is_finite() || self.geofence_radius_meters <= 0.0 {
            return Err(Error::Config(format!(
                "geofence_radius_meters must be positive, got {}",
                self.geofence_radius_meters
            )));
        }
        if self.geofence_expiration == GeofenceExpiration::AfterSeconds(0) {
            return Err(Error::Config(
                "geofence_expiration must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    /// Database path, resolved against `data_dir` when not configured
    pub fn database_path_or(&self, data_dir: &Path) -> PathBuf {
        self.database_path
            .as_ref()
            .map_or_else(|| data_dir.join(DEFAULT_DB_FILE), PathBuf::from)
    }

    pub const fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            radius_meters: self.geofence_radius_meters,
            expiration: self.geofence_expiration,
            require_background_permission: self.require_background_permission,
            max_settings_resolutions: self.max_settings_resolutions,
        }
    }
}
