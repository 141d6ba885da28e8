//! Location permission negotiation and geofence registration

mod flow;
mod platform;
mod request;
mod transitions;

pub use flow::{FlowConfig, FlowOutcome, GeofenceRegistrationFlow};
pub use platform::{
    GeofenceError, GeofencingClient, LocationPermission, LocationSettingsService,
    PermissionService, SettingsCheck, SettingsResolution,
};
pub use request::{
    Geofence, GeofenceExpiration, GeofencingRequest, TransitionType, DEFAULT_RADIUS_METERS,
};
pub use transitions::{GeofenceTransitionHandler, GeofencingEvent, ReminderNotifier};
