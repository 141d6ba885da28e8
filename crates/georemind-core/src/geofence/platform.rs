//! Platform services the registration flow depends on

use std::future::Future;

use thiserror::Error;

use super::GeofencingRequest;

/// Runtime location permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationPermission {
    /// Precise location while the app is in use
    Foreground,
    /// Location access while the app is in the background
    Background,
}

/// Runtime permission checks and prompts
pub trait PermissionService: Send + Sync {
    fn is_granted(&self, permission: LocationPermission) -> bool;

    /// Whether this platform version grants background location separately
    fn requires_background_permission(&self) -> bool;

    /// Prompt for the given permissions, returning the ones granted
    fn request(
        &self,
        permissions: &[LocationPermission],
    ) -> impl Future<Output = Vec<LocationPermission>> + Send;
}

/// State of the device-wide location setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCheck {
    Satisfied,
    /// Unsatisfied, but the platform can prompt the user to fix it
    Resolvable,
    /// Unsatisfied with no fix-it prompt available
    Unavailable,
}

/// User's answer to the fix-it prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResolution {
    Accepted,
    Rejected,
}

/// Device-wide location setting and its fix-it prompt
pub trait LocationSettingsService: Send + Sync {
    fn check(&self) -> impl Future<Output = SettingsCheck> + Send;

    fn resolve(&self) -> impl Future<Output = SettingsResolution> + Send;
}

/// Reasons the platform refused a geofence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeofenceError {
    #[error("Geofence service is not available now")]
    NotAvailable,
    #[error("Too many geofences registered by this app")]
    TooManyGeofences,
    #[error("Too many pending geofence callbacks")]
    TooManyPendingIntents,
    #[error("Geofence registration failed: {0}")]
    Other(String),
}

/// Opaque registrar for geofences
pub trait GeofencingClient: Send + Sync {
    fn add_geofences(
        &self,
        request: &GeofencingRequest,
    ) -> impl Future<Output = Result<(), GeofenceError>> + Send;
}
