//! Data source seam used by the view-models

use std::future::Future;

use super::Outcome;
use crate::models::{Reminder, ReminderId};

/// Async access to reminders.
///
/// Implemented by [`super::RemindersLocalRepository`] in production and by
/// fakes in tests.
pub trait ReminderDataSource: Send + Sync {
    fn get_reminders(&self) -> impl Future<Output = Outcome<Vec<Reminder>>> + Send;

    fn save_reminder(&self, reminder: Reminder) -> impl Future<Output = Outcome<()>> + Send;

    fn get_reminder(&self, id: &ReminderId) -> impl Future<Output = Outcome<Reminder>> + Send;

    fn delete_all_reminders(&self) -> impl Future<Output = Outcome<()>> + Send;
}
