//! Reminder store implementation

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::{Reminder, ReminderId};

/// Trait for reminder storage operations
pub trait ReminderStore {
    /// All stored reminders; order is not significant
    fn get_all(&self) -> Result<Vec<Reminder>>;

    /// Get a reminder by ID, `None` when absent
    fn get_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>>;

    /// Insert a reminder, replacing any existing record with the same ID
    fn save(&self, reminder: &Reminder) -> Result<()>;

    /// Remove every reminder
    fn delete_all(&self) -> Result<()>;
}

/// `SQLite` implementation of `ReminderStore`
#[derive(Clone)]
pub struct SqliteReminderStore {
    db: Arc<Database>,
}

impl SqliteReminderStore {
    /// Create a new store over the given database
    pub const fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Parse a reminder from a database row
    fn parse_reminder(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reminder> {
        Ok(Reminder {
            id: row.get::<_, String>(0)?.into(),
            title: row.get(1)?,
            description: row.get(2)?,
            location: row.get(3)?,
            latitude: row.get(4)?,
            longitude: row.get(5)?,
        })
    }
}

impl ReminderStore for SqliteReminderStore {
    fn get_all(&self) -> Result<Vec<Reminder>> {
        let conn = self.db.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, location, latitude, longitude FROM reminders",
        )?;

        let reminders = stmt
            .query_map([], Self::parse_reminder)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} reminders", reminders.len());
        Ok(reminders)
    }

    fn get_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>> {
        let conn = self.db.connection()?;
        let reminder = conn
            .query_row(
                "SELECT id, title, description, location, latitude, longitude
                 FROM reminders WHERE id = ?",
                params![id.as_str()],
                Self::parse_reminder,
            )
            .optional()?;

        Ok(reminder)
    }

    fn save(&self, reminder: &Reminder) -> Result<()> {
        let conn = self.db.connection()?;
        conn.execute(
            "INSERT OR REPLACE INTO reminders (id, title, description, location, latitude, longitude)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                reminder.id.as_str(),
                reminder.title,
                reminder.description,
                reminder.location,
                reminder.latitude,
                reminder.longitude
            ],
        )?;

        tracing::debug!("Saved reminder {}", reminder.id);
        Ok(())
    }

    fn delete_all(&self) -> Result<()> {
        let conn = self.db.connection()?;
        let removed = conn.execute("DELETE FROM reminders", [])?;
        tracing::info!("Deleted {removed} reminders");
        Ok(())
    }
}
