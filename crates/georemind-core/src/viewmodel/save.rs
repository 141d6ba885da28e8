//! View-model shared by the save-reminder and select-location screens

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use super::{Destination, NavigationCommand, SignalBus, StringResource, UiSignal};
use crate::data::{Outcome, ReminderDataSource};
use crate::models::{DraftReminder, MapSelection, Reminder};
use crate::util::is_null_or_empty;

/// Holds the draft being edited and persists it once valid.
///
/// One instance is shared by the save screen and the map picker. The draft
/// resets after a successful save and through [`Self::on_clear`] on teardown.
pub struct SaveReminderViewModel<D> {
    data_source: Arc<D>,
    draft: watch::Sender<DraftReminder>,
    loading: watch::Sender<bool>,
    signals: SignalBus,
}

impl<D: ReminderDataSource> SaveReminderViewModel<D> {
    /// Start with an empty draft
    pub fn new(data_source: Arc<D>) -> Self {
        Self {
            data_source,
            draft: watch::Sender::new(DraftReminder::default()),
            loading: watch::Sender::new(false),
            signals: SignalBus::new(),
        }
    }

    pub fn draft(&self) -> DraftReminder {
        self.draft.borrow().clone()
    }

    pub fn subscribe_draft(&self) -> watch::Receiver<DraftReminder> {
        self.draft.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub const fn signals(&self) -> &SignalBus {
        &self.signals
    }

    pub fn subscribe_signals(&self) -> broadcast::Receiver<UiSignal> {
        self.signals.subscribe()
    }

    pub fn set_title(&self, title: Option<String>) {
        self.draft.send_modify(|draft| draft.title = title);
    }

    pub fn set_description(&self, description: Option<String>) {
        self.draft.send_modify(|draft| draft.description = description);
    }

    /// Ask the front end to open the map picker
    pub fn navigate_to_select_location(&self) {
        self.signals.publish(UiSignal::Navigate(NavigationCommand::To(
            Destination::SelectLocation,
        )));
    }

    /// Accept the marker confirmed on the map picker.
    ///
    /// Without a marker the picker stays open and asks for one.
    pub fn select_location(&self, selection: Option<MapSelection>) {
        let Some(selection) = selection else {
            self.signals.publish(UiSignal::SnackbarResource(
                StringResource::SelectLocationOnMap,
            ));
            return;
        };

        self.draft
            .send_modify(|draft| draft.apply_selection(&selection));
        self.signals
            .publish(UiSignal::Navigate(NavigationCommand::Back));
    }

    /// Reminder built from the current draft, with a fresh id
    pub fn current_reminder(&self) -> Reminder {
        self.draft.borrow().to_reminder()
    }

    /// Check the required fields, publishing the first failure.
    pub fn validate_entered_data(&self, reminder: &Reminder) -> bool {
        let failure = if is_null_or_empty(reminder.title.as_deref()) {
            Some(StringResource::EnterTitle)
        } else if is_null_or_empty(reminder.location.as_deref()) {
            Some(StringResource::SelectLocation)
        } else {
            None
        };

        match failure {
            Some(resource) => {
                self.signals.publish(UiSignal::SnackbarResource(resource));
                false
            }
            None => true,
        }
    }

    /// Persist the reminder, toggling the loading flag around the write.
    ///
    /// A successful write also resets the draft.
    pub async fn save_reminder(&self, reminder: &Reminder) -> Outcome<()> {
        self.loading.send_replace(true);
        let outcome = self.data_source.save_reminder(reminder.clone()).await;
        self.loading.send_replace(false);

        match &outcome {
            Outcome::Success(()) => {
                tracing::info!("Saved reminder {}", reminder.id);
                self.on_clear();
                self.signals
                    .publish(UiSignal::ToastResource(StringResource::ReminderSaved));
                self.signals
                    .publish(UiSignal::Navigate(NavigationCommand::Back));
            }
            Outcome::Error(message) => {
                tracing::warn!("Failed to save reminder {}: {message}", reminder.id);
                self.signals.publish(UiSignal::Snackbar(message.clone()));
            }
        }
        outcome
    }

    /// Validate and, when valid, persist. Returns whether the reminder was
    /// stored.
    pub async fn validate_and_save_reminder(&self, reminder: &Reminder) -> bool {
        if !self.validate_entered_data(reminder) {
            return false;
        }
        self.save_reminder(reminder).await.is_success()
    }

    /// Reset the draft so the next save session starts empty
    pub fn on_clear(&self) {
        self.draft.send_replace(DraftReminder::default());
    }
}
