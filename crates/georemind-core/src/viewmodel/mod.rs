//! View-models and the signals they publish to screens.
//!
//! State lives in `tokio::sync::watch` channels so a screen (or a test) can
//! read the latest snapshot or await changes. One-shot UI effects such as
//! snackbars, toasts, and navigation go out on a broadcast [`SignalBus`].

mod list;
mod save;

use tokio::sync::broadcast;

pub use list::{ReminderListState, RemindersListViewModel};
pub use save::SaveReminderViewModel;

const SIGNAL_CAPACITY: usize = 64;

/// User-facing strings referenced by id rather than text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringResource {
    EnterTitle,
    SelectLocation,
    SelectLocationOnMap,
    ReminderSaved,
    LocationRequired,
    PermissionDeniedExplanation,
    GeofenceAdded,
    GeofenceFailed,
    NoReminders,
}

impl StringResource {
    /// English text for the resource
    pub const fn text(self) -> &'static str {
        match self {
            Self::EnterTitle => "Please enter title",
            Self::SelectLocation => "Please select location",
            Self::SelectLocationOnMap => "Please select a location on the map",
            Self::ReminderSaved => "Reminder Saved !",
            Self::LocationRequired => "Location services must be enabled to use the app",
            Self::PermissionDeniedExplanation => {
                "You need to grant location permission in order to add a new reminder"
            }
            Self::GeofenceAdded => "Geofence added",
            Self::GeofenceFailed => "Unable to create geofence",
            Self::NoReminders => "No Data",
        }
    }
}

/// Screens reachable through navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Authentication,
    ReminderList,
    SaveReminder,
    SelectLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    To(Destination),
    Back,
}

/// Follow-up offered by a persistent notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    /// Run the save flow again
    RetrySave,
}

/// A transient effect for the screen to render once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiSignal {
    Snackbar(String),
    SnackbarResource(StringResource),
    Toast(String),
    ToastResource(StringResource),
    /// Indefinite notice with an action button
    ActionSnackbar {
        message: StringResource,
        action: NoticeAction,
    },
    Navigate(NavigationCommand),
}

impl UiSignal {
    /// Rendered text, if the signal carries any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Snackbar(message) | Self::Toast(message) => Some(message),
            Self::SnackbarResource(resource)
            | Self::ToastResource(resource)
            | Self::ActionSnackbar {
                message: resource, ..
            } => Some(resource.text()),
            Self::Navigate(_) => None,
        }
    }
}

/// Broadcast channel for [`UiSignal`]s.
///
/// Publishing without subscribers drops the signal.
#[derive(Debug, Clone)]
pub struct SignalBus {
    tx: broadcast::Sender<UiSignal>,
}

impl SignalBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(SIGNAL_CAPACITY);
        Self { tx }
    }

    pub fn publish(&self, signal: UiSignal) {
        tracing::trace!(?signal, "publishing UI signal");
        let _ = self.tx.send(signal);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiSignal> {
        self.tx.subscribe()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain every signal currently buffered in a receiver
pub fn drain_signals(rx: &mut broadcast::Receiver<UiSignal>) -> Vec<UiSignal> {
    let mut signals = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(signal) => signals.push(signal),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!("UI signal receiver lagged, skipped {skipped} signals");
            }
            Err(_) => break,
        }
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let bus = SignalBus::new();
        bus.publish(UiSignal::Toast("ignored".into()));

        let mut rx = bus.subscribe();
        assert!(drain_signals(&mut rx).is_empty());
    }

    #[test]
    fn drain_returns_signals_in_order() {
        let bus = SignalBus::new();
        let mut rx = bus.subscribe();

        bus.publish(UiSignal::ToastResource(StringResource::ReminderSaved));
        bus.publish(UiSignal::Navigate(NavigationCommand::Back));

        assert_eq!(
            drain_signals(&mut rx),
            vec![
                UiSignal::ToastResource(StringResource::ReminderSaved),
                UiSignal::Navigate(NavigationCommand::Back),
            ]
        );
    }

    #[test]
    fn signal_text_resolves_resources() {
        assert_eq!(
            UiSignal::SnackbarResource(StringResource::EnterTitle).text(),
            Some("Please enter title")
        );
        assert_eq!(UiSignal::Navigate(NavigationCommand::Back).text(), None);
    }
}
