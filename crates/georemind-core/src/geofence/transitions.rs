//! Maps triggered geofences back to reminders and notifies the user

use std::sync::Arc;

use super::TransitionType;
use crate::data::{Outcome, ReminderDataSource};
use crate::models::{Reminder, ReminderId};

/// A transition reported by the platform geofencing engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeofencingEvent {
    pub transition: TransitionType,
    /// Request ids of the fences that fired
    pub triggering_ids: Vec<String>,
}

/// Shows a notification for a reminder whose place was entered
pub trait ReminderNotifier: Send + Sync {
    fn notify(&self, reminder: &Reminder);
}

/// Turns triggered geofences back into reminder notifications
pub struct GeofenceTransitionHandler<D, N> {
    data_source: Arc<D>,
    notifier: N,
}

impl<D: ReminderDataSource, N: ReminderNotifier> GeofenceTransitionHandler<D, N> {
    pub const fn new(data_source: Arc<D>, notifier: N) -> Self {
        Self {
            data_source,
            notifier,
        }
    }

    /// Notify for every known reminder behind an enter event.
    ///
    /// Returns how many notifications were sent.
    pub async fn handle(&self, event: &GeofencingEvent) -> usize {
        if event.transition != TransitionType::Enter {
            tracing::debug!("Ignoring {:?} geofence transition", event.transition);
            return 0;
        }

        let mut delivered = 0;
        for request_id in &event.triggering_ids {
            let id = ReminderId::from(request_id.as_str());
            match self.data_source.get_reminder(&id).await {
                Outcome::Success(reminder) => {
                    self.notifier.notify(&reminder);
                    delivered += 1;
                }
                Outcome::Error(message) => {
                    tracing::warn!("No reminder for triggered geofence {request_id}: {message}");
                }
            }
        }
        delivered
    }
}
