//! Save flow: permissions, location settings, geofence, then persistence.
//!
//! Each platform call is one await point with a single success and a single
//! failure continuation. The flow walks [`FlowState`] until it reaches a
//! terminal [`FlowOutcome`]; every failure leaves the draft untouched so the
//! user can retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::platform::{
    GeofencingClient, LocationPermission, LocationSettingsService, PermissionService,
    SettingsCheck, SettingsResolution,
};
use super::request::{Geofence, GeofenceExpiration, GeofencingRequest, DEFAULT_RADIUS_METERS};
use crate::data::ReminderDataSource;
use crate::models::{Reminder, ReminderId};
use crate::viewmodel::{NoticeAction, SaveReminderViewModel, StringResource, UiSignal};

/// Tunables for the registration flow
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    pub radius_meters: f32,
    pub expiration: GeofenceExpiration,
    /// Ask for background location where the platform separates it
    pub require_background_permission: bool,
    /// Fix-it prompts shown per save before giving up
    pub max_settings_resolutions: u32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            expiration: GeofenceExpiration::Never,
            require_background_permission: true,
            max_settings_resolutions: 3,
        }
    }
}

/// How a save attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Geofence registered and reminder stored
    Saved(ReminderId),
    PermissionDenied,
    LocationSettingsRejected,
    /// Draft failed validation; a signal says which field
    InvalidDraft,
    GeofenceFailed(String),
    /// Geofence registered but the store rejected the reminder
    SaveFailed,
    /// Another save on this flow has not finished yet
    AlreadyInFlight,
}

#[derive(Debug)]
enum FlowState {
    CheckPermissions,
    RequestPermissions(Vec<LocationPermission>),
    CheckSettings,
    ResolveSettings,
    RegisterGeofence,
    Persist(Reminder),
    Finished(FlowOutcome),
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives one save button through the platform preconditions
pub struct GeofenceRegistrationFlow<D, P, L, G> {
    view_model: Arc<SaveReminderViewModel<D>>,
    permissions: P,
    settings: L,
    geofencing: G,
    config: FlowConfig,
    in_flight: AtomicBool,
}

impl<D, P, L, G> GeofenceRegistrationFlow<D, P, L, G>
where
    D: ReminderDataSource,
    P: PermissionService,
    L: LocationSettingsService,
    G: GeofencingClient,
{
    pub fn new(
        view_model: Arc<SaveReminderViewModel<D>>,
        permissions: P,
        settings: L,
        geofencing: G,
        config: FlowConfig,
    ) -> Self {
        Self {
            view_model,
            permissions,
            settings,
            geofencing,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    pub const fn view_model(&self) -> &Arc<SaveReminderViewModel<D>> {
        &self.view_model
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run the whole save flow for the current draft.
    ///
    /// A second call while one is running returns
    /// [`FlowOutcome::AlreadyInFlight`] without touching the platform.
    pub async fn save(&self) -> FlowOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Ignoring save while a registration is in flight");
            return FlowOutcome::AlreadyInFlight;
        }
        let _guard = InFlightGuard(&self.in_flight);

        let mut resolutions = 0u32;
        let mut state = FlowState::CheckPermissions;
        loop {
            tracing::trace!(?state, "save flow step");
            state = match state {
                FlowState::CheckPermissions => {
                    let missing = self.missing_permissions();
                    if missing.is_empty() {
                        FlowState::CheckSettings
                    } else {
                        FlowState::RequestPermissions(missing)
                    }
                }
                FlowState::RequestPermissions(missing) => {
                    let granted = self.permissions.request(&missing).await;
                    if missing.iter().all(|permission| granted.contains(permission)) {
                        FlowState::CheckSettings
                    } else {
                        tracing::info!("Location permission denied: requested {missing:?}");
                        self.publish(UiSignal::ToastResource(
                            StringResource::PermissionDeniedExplanation,
                        ));
                        FlowState::Finished(FlowOutcome::PermissionDenied)
                    }
                }
                FlowState::CheckSettings => match self.settings.check().await {
                    SettingsCheck::Satisfied => FlowState::RegisterGeofence,
                    SettingsCheck::Resolvable
                        if resolutions < self.config.max_settings_resolutions =>
                    {
                        FlowState::ResolveSettings
                    }
                    SettingsCheck::Resolvable | SettingsCheck::Unavailable => {
                        self.location_required()
                    }
                },
                FlowState::ResolveSettings => {
                    resolutions += 1;
                    match self.settings.resolve().await {
                        SettingsResolution::Accepted => FlowState::CheckSettings,
                        SettingsResolution::Rejected => self.location_required(),
                    }
                }
                FlowState::RegisterGeofence => self.register_geofence().await,
                FlowState::Persist(reminder) => {
                    if self.view_model.validate_and_save_reminder(&reminder).await {
                        FlowState::Finished(FlowOutcome::Saved(reminder.id))
                    } else {
                        FlowState::Finished(FlowOutcome::SaveFailed)
                    }
                }
                FlowState::Finished(outcome) => return outcome,
            };
        }
    }

    fn missing_permissions(&self) -> Vec<LocationPermission> {
        let mut required = vec![LocationPermission::Foreground];
        if self.config.require_background_permission
            && self.permissions.requires_background_permission()
        {
            required.push(LocationPermission::Background);
        }

        required
            .into_iter()
            .filter(|permission| !self.permissions.is_granted(*permission))
            .collect()
    }

    fn location_required(&self) -> FlowState {
        tracing::info!("Device location is off; waiting for the user to retry");
        self.publish(UiSignal::ActionSnackbar {
            message: StringResource::LocationRequired,
            action: NoticeAction::RetrySave,
        });
        FlowState::Finished(FlowOutcome::LocationSettingsRejected)
    }

    async fn register_geofence(&self) -> FlowState {
        let reminder = self.view_model.current_reminder();
        if !self.view_model.validate_entered_data(&reminder) {
            return FlowState::Finished(FlowOutcome::InvalidDraft);
        }

        let geofence = match Geofence::for_reminder(
            &reminder,
            self.config.radius_meters,
            self.config.expiration,
        ) {
            Ok(geofence) => geofence,
            Err(error) => {
                tracing::warn!("Cannot build geofence for {}: {error}", reminder.id);
                self.publish(UiSignal::SnackbarResource(StringResource::SelectLocation));
                return FlowState::Finished(FlowOutcome::InvalidDraft);
            }
        };

        let request = GeofencingRequest::single(geofence);
        match self.geofencing.add_geofences(&request).await {
            Ok(()) => {
                tracing::info!("Registered geofence {}", reminder.id);
                self.publish(UiSignal::ToastResource(StringResource::GeofenceAdded));
                FlowState::Persist(reminder)
            }
            Err(error) => {
                tracing::warn!("Geofence registration for {} failed: {error}", reminder.id);
                self.publish(UiSignal::ToastResource(StringResource::GeofenceFailed));
                FlowState::Finished(FlowOutcome::GeofenceFailed(error.to_string()))
            }
        }
    }

    fn publish(&self, signal: UiSignal) {
        self.view_model.signals().publish(signal);
    }
}
