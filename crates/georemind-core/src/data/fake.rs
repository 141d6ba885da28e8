//! In-memory data source for view-model tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use super::{Outcome, ReminderDataSource, REMINDER_NOT_FOUND};
use crate::models::{Reminder, ReminderId};

pub const FORCED_ERROR: &str = "Reminders not found";

/// Test double for [`ReminderDataSource`]
#[derive(Default)]
pub struct FakeDataSource {
    reminders: Mutex<Vec<Reminder>>,
    force_error: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl FakeDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every `get_reminders` call until the gate is notified
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
            ..Self::default()
        }
    }

    pub fn force_error(&self, enabled: bool) {
        self.force_error.store(enabled, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Reminder> {
        self.reminders.lock().unwrap().clone()
    }

    fn failing(&self) -> bool {
        self.force_error.load(Ordering::SeqCst)
    }
}

impl ReminderDataSource for FakeDataSource {
    async fn get_reminders(&self) -> Outcome<Vec<Reminder>> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.failing() {
            return Outcome::Error(FORCED_ERROR.to_string());
        }
        Outcome::Success(self.snapshot())
    }

    async fn save_reminder(&self, reminder: Reminder) -> Outcome<()> {
        if self.failing() {
            return Outcome::Error(FORCED_ERROR.to_string());
        }
        let mut reminders = self.reminders.lock().unwrap();
        reminders.retain(|existing| existing.id != reminder.id);
        reminders.push(reminder);
        Outcome::Success(())
    }

    async fn get_reminder(&self, id: &ReminderId) -> Outcome<Reminder> {
        if self.failing() {
            return Outcome::Error(FORCED_ERROR.to_string());
        }
        self.reminders
            .lock()
            .unwrap()
            .iter()
            .find(|reminder| &reminder.id == id)
            .cloned()
            .map_or_else(
                || Outcome::Error(REMINDER_NOT_FOUND.to_string()),
                Outcome::Success,
            )
    }

    async fn delete_all_reminders(&self) -> Outcome<()> {
        if self.failing() {
            return Outcome::Error(FORCED_ERROR.to_string());
        }
        self.reminders.lock().unwrap().clear();
        Outcome::Success(())
    }
}
