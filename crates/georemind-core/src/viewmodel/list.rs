//! View-model behind the reminder list screen

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use super::{Destination, NavigationCommand, SignalBus, UiSignal};
use crate::data::{Outcome, ReminderDataSource};
use crate::models::Reminder;

/// Snapshot rendered by the list screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderListState {
    pub loading: bool,
    pub reminders: Vec<Reminder>,
    /// Show the empty-state placeholder
    pub show_no_data: bool,
}

/// Loads reminders for the list screen and publishes its state
pub struct RemindersListViewModel<D> {
    data_source: Arc<D>,
    state: watch::Sender<ReminderListState>,
    signals: SignalBus,
}

impl<D: ReminderDataSource> RemindersListViewModel<D> {
    /// Start with an empty, idle list
    pub fn new(data_source: Arc<D>) -> Self {
        Self {
            data_source,
            state: watch::Sender::new(ReminderListState::default()),
            signals: SignalBus::new(),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> ReminderListState {
        self.state.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<ReminderListState> {
        self.state.subscribe()
    }

    pub fn subscribe_signals(&self) -> broadcast::Receiver<UiSignal> {
        self.signals.subscribe()
    }

    /// Fetch every reminder and publish the result.
    ///
    /// Concurrent loads are not coalesced; whichever finishes last sets the
    /// final list and loading flag.
    pub async fn load_reminders(&self) {
        self.state.send_modify(|state| state.loading = true);

        let outcome = self.data_source.get_reminders().await;

        let error = match outcome {
            Outcome::Success(reminders) => {
                tracing::debug!("Loaded {} reminders for list", reminders.len());
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.reminders = reminders;
                    state.show_no_data = state.reminders.is_empty();
                });
                None
            }
            Outcome::Error(message) => {
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.show_no_data = state.reminders.is_empty();
                });
                Some(message)
            }
        };

        if let Some(message) = error {
            tracing::warn!("Failed to load reminders: {message}");
            self.signals.publish(UiSignal::Snackbar(message));
        }
    }

    /// Clear every stored reminder and refresh the list
    pub async fn delete_all_reminders(&self) {
        match self.data_source.delete_all_reminders().await {
            Outcome::Success(()) => self.load_reminders().await,
            Outcome::Error(message) => self.signals.publish(UiSignal::Snackbar(message)),
        }
    }

    /// Ask the front end to open the save screen
    pub fn navigate_to_add_reminder(&self) {
        self.signals.publish(UiSignal::Navigate(NavigationCommand::To(
            Destination::SaveReminder,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fake::{FakeDataSource, FORCED_ERROR};
    use crate::viewmodel::drain_signals;
    use pretty_assertions::assert_eq;
    use tokio::sync::Notify;

    fn reminder(title: &str) -> Reminder {
        Reminder::new(
            Some(title.into()),
            Some("description".into()),
            Some("location".into()),
            Some(1.0),
            Some(1.0),
        )
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn zero_reminders_load_returns_empty_list() {
        let vm = RemindersListViewModel::new(Arc::new(FakeDataSource::new()));

        vm.load_reminders().await;

        let state = vm.state();
        assert!(state.reminders.is_empty());
        assert!(state.show_no_data);
        assert!(!state.loading);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn one_reminder_load_returns_one_item() {
        let saved = reminder("title");
        let source = Arc::new(FakeDataSource::with_reminders(vec![saved.clone()]));
        let vm = RemindersListViewModel::new(source);

        vm.load_reminders().await;

        let state = vm.state();
        assert_eq!(state.reminders, vec![saved]);
        assert!(!state.show_no_data);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn forced_error_publishes_snackbar_and_keeps_list_empty() {
        let source = Arc::new(FakeDataSource::new());
        source.force_error(true);
        let vm = RemindersListViewModel::new(source);
        let mut signals = vm.subscribe_signals();

        vm.load_reminders().await;

        assert_eq!(
            drain_signals(&mut signals),
            vec![UiSignal::Snackbar(FORCED_ERROR.to_string())]
        );
        let state = vm.state();
        assert!(state.reminders.is_empty());
        assert!(state.show_no_data);
        assert!(!state.loading);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn loading_flag_is_set_while_fetch_is_in_flight() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(FakeDataSource::gated(Arc::clone(&gate)));
        let vm = Arc::new(RemindersListViewModel::new(source));
        let mut state_rx = vm.subscribe_state();

        let task = tokio::spawn({
            let vm = Arc::clone(&vm);
            async move { vm.load_reminders().await }
        });

        state_rx.wait_for(|state| state.loading).await.unwrap();
        assert!(vm.state().loading);

        gate.notify_one();
        task.await.unwrap();

        assert!(!vm.state().loading);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_all_reminders_reloads_empty_list() {
        let source = Arc::new(FakeDataSource::with_reminders(vec![
            reminder("one"),
            reminder("two"),
        ]));
        let vm = RemindersListViewModel::new(Arc::clone(&source));
        vm.load_reminders().await;
        assert_eq!(vm.state().reminders.len(), 2);

        vm.delete_all_reminders().await;

        assert!(vm.state().reminders.is_empty());
        assert!(source.snapshot().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn navigate_to_add_reminder_publishes_navigation() {
        let vm = RemindersListViewModel::new(Arc::new(FakeDataSource::new()));
        let mut signals = vm.subscribe_signals();

        vm.navigate_to_add_reminder();

        assert_eq!(
            drain_signals(&mut signals),
            vec![UiSignal::Navigate(NavigationCommand::To(
                Destination::SaveReminder
            ))]
        );
    }
}
