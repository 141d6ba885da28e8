//! End-to-end checks wiring the real store through the view-models

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::data::{Outcome, ReminderDataSource, RemindersLocalRepository};
use crate::db::{Database, SqliteReminderStore};
use crate::geofence::{
    FlowConfig, FlowOutcome, GeofenceError, GeofenceRegistrationFlow, GeofencingClient,
    GeofencingRequest, LocationPermission, LocationSettingsService, PermissionService,
    SettingsCheck, SettingsResolution,
};
use crate::models::{LatLng, MapSelection};
use crate::viewmodel::{
    drain_signals, RemindersListViewModel, SaveReminderViewModel, StringResource, UiSignal,
};

type Repository = RemindersLocalRepository<SqliteReminderStore>;

struct AllowAll;

impl PermissionService for AllowAll {
    fn is_granted(&self, _permission: LocationPermission) -> bool {
        true
    }

    fn requires_background_permission(&self) -> bool {
        true
    }

    async fn request(&self, permissions: &[LocationPermission]) -> Vec<LocationPermission> {
        permissions.to_vec()
    }
}

impl LocationSettingsService for AllowAll {
    async fn check(&self) -> SettingsCheck {
        SettingsCheck::Satisfied
    }

    async fn resolve(&self) -> SettingsResolution {
        SettingsResolution::Accepted
    }
}

impl GeofencingClient for AllowAll {
    async fn add_geofences(&self, _request: &GeofencingRequest) -> Result<(), GeofenceError> {
        Ok(())
    }
}

fn repository() -> Arc<Repository> {
    let db = Database::open_in_memory().unwrap();
    Arc::new(RemindersLocalRepository::new(SqliteReminderStore::new(
        Arc::new(db),
    )))
}

fn save_flow(
    repository: &Arc<Repository>,
) -> GeofenceRegistrationFlow<Repository, AllowAll, AllowAll, AllowAll> {
    let view_model = Arc::new(SaveReminderViewModel::new(Arc::clone(repository)));
    GeofenceRegistrationFlow::new(view_model, AllowAll, AllowAll, AllowAll, FlowConfig::default())
}

#[tokio::test(flavor = "multi_thread")]
async fn saved_reminder_appears_once_in_list() {
    let repository = repository();
    let flow = save_flow(&repository);
    let save_vm = flow.view_model();
    save_vm.set_title(Some("go for a walk".into()));
    save_vm.set_description(Some("description of the title".into()));
    save_vm.select_location(Some(MapSelection::Current(LatLng::new(-33.86, 151.21))));

    assert!(matches!(flow.save().await, FlowOutcome::Saved(_)));
    assert!(save_vm.draft().is_empty());

    let list_vm = RemindersListViewModel::new(Arc::clone(&repository));
    list_vm.load_reminders().await;

    let state = list_vm.state();
    assert_eq!(state.reminders.len(), 1);
    assert_eq!(state.reminders[0].title.as_deref(), Some("go for a walk"));
    assert_eq!(
        state.reminders[0].description.as_deref(),
        Some("description of the title")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_form_shows_enter_title_and_persists_nothing() {
    let repository = repository();
    let flow = save_flow(&repository);
    let mut signals = flow.view_model().subscribe_signals();

    assert_eq!(flow.save().await, FlowOutcome::InvalidDraft);

    let inline = drain_signals(&mut signals);
    assert_eq!(
        inline,
        vec![UiSignal::SnackbarResource(StringResource::EnterTitle)]
    );
    assert_eq!(inline[0].text(), Some(StringResource::EnterTitle.text()));
    assert_eq!(repository.get_reminders().await, Outcome::Success(Vec::new()));
}
