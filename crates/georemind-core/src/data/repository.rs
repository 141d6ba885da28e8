//! Repository wrapping the local store

use std::sync::Arc;

use tokio::runtime::Handle;

use super::{Outcome, ReminderDataSource};
use crate::db::ReminderStore;
use crate::error::{Error, Result};
use crate::models::{Reminder, ReminderId};

/// Message returned when a lookup by id finds nothing
pub const REMINDER_NOT_FOUND: &str = "Reminder not found!";

/// Where store calls are executed.
///
/// Only changes thread placement; every context returns the same outcomes.
#[derive(Debug, Clone, Default)]
pub enum ExecutionContext {
    /// Run on the calling task
    #[default]
    Inline,
    /// Run on the blocking pool of the given runtime
    Blocking(Handle),
}

/// Local repository that turns store results into [`Outcome`]s
pub struct RemindersLocalRepository<S> {
    store: Arc<S>,
    context: ExecutionContext,
}

impl<S> RemindersLocalRepository<S>
where
    S: ReminderStore + Send + Sync + 'static,
{
    /// Create a repository that runs store calls inline
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            context: ExecutionContext::Inline,
        }
    }

    /// Run store calls on the given execution context
    #[must_use]
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&S) -> Result<T> + Send + 'static,
    {
        match &self.context {
            ExecutionContext::Inline => op(&self.store),
            ExecutionContext::Blocking(handle) => {
                let store = Arc::clone(&self.store);
                handle
                    .spawn_blocking(move || op(&store))
                    .await
                    .map_err(|error| Error::Database(format!("store task failed: {error}")))?
            }
        }
    }
}

impl<S> ReminderDataSource for RemindersLocalRepository<S>
where
    S: ReminderStore + Send + Sync + 'static,
{
    async fn get_reminders(&self) -> Outcome<Vec<Reminder>> {
        self.run(|store| store.get_all()).await.into()
    }

    async fn save_reminder(&self, reminder: Reminder) -> Outcome<()> {
        self.run(move |store| store.save(&reminder)).await.into()
    }

    async fn get_reminder(&self, id: &ReminderId) -> Outcome<Reminder> {
        let id = id.clone();
        match self.run(move |store| store.get_by_id(&id)).await {
            Ok(Some(reminder)) => Outcome::Success(reminder),
            Ok(None) => Outcome::Error(REMINDER_NOT_FOUND.to_string()),
            Err(error) => Outcome::Error(error.to_string()),
        }
    }

    async fn delete_all_reminders(&self) -> Outcome<()> {
        self.run(|store| store.delete_all()).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, SqliteReminderStore};
    use pretty_assertions::assert_eq;

    struct FailingStore;

    impl ReminderStore for FailingStore {
        fn get_all(&self) -> Result<Vec<Reminder>> {
            Err(Error::Database("disk I/O error".into()))
        }

        fn get_by_id(&self, _id: &ReminderId) -> Result<Option<Reminder>> {
            Err(Error::Database("disk I/O error".into()))
        }

        fn save(&self, _reminder: &Reminder) -> Result<()> {
            Err(Error::Database("disk I/O error".into()))
        }

        fn delete_all(&self) -> Result<()> {
            Err(Error::Database("disk I/O error".into()))
        }
    }

    fn repository() -> RemindersLocalRepository<SqliteReminderStore> {
        let db = Database::open_in_memory().unwrap();
        RemindersLocalRepository::new(SqliteReminderStore::new(Arc::new(db)))
    }

    fn sample(title: &str) -> Reminder {
        Reminder::new(
            Some(title.into()),
            Some("description".into()),
            Some("location".into()),
            Some(10.0),
            Some(10.0),
        )
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn save_then_get_reminder_returns_same_fields() {
        let repo = repository();
        let reminder = sample("title");

        assert_eq!(repo.save_reminder(reminder.clone()).await, Outcome::Success(()));

        assert_eq!(repo.get_reminder(&reminder.id).await, Outcome::Success(reminder));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_reminder_unknown_id_is_not_found_error() {
        let repo = repository();

        let outcome = repo.get_reminder(&"never-saved".into()).await;

        assert_eq!(outcome, Outcome::Error("Reminder not found!".to_string()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_all_reminders_empties_list() {
        let repo = repository();
        for title in ["one", "two", "three"] {
            let _ = repo.save_reminder(sample(title)).await;
        }

        assert_eq!(repo.delete_all_reminders().await, Outcome::Success(()));

        assert_eq!(repo.get_reminders().await, Outcome::Success(Vec::new()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn store_failures_become_error_outcomes() {
        let repo = RemindersLocalRepository::new(FailingStore);
        let expected = "Database error: disk I/O error".to_string();

        assert_eq!(repo.get_reminders().await, Outcome::Error(expected.clone()));
        assert_eq!(
            repo.save_reminder(sample("title")).await,
            Outcome::Error(expected.clone())
        );
        assert_eq!(
            repo.get_reminder(&"1".into()).await,
            Outcome::Error(expected.clone())
        );
        assert_eq!(repo.delete_all_reminders().await, Outcome::Error(expected));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn blocking_context_returns_same_outcomes() {
        let repo = repository().with_context(ExecutionContext::Blocking(Handle::current()));
        let reminder = sample("blocking");

        assert_eq!(repo.save_reminder(reminder.clone()).await, Outcome::Success(()));
        assert_eq!(repo.get_reminders().await, Outcome::Success(vec![reminder]));
        assert_eq!(
            repo.get_reminder(&"missing".into()).await,
            Outcome::Error(REMINDER_NOT_FOUND.to_string())
        );
    }
}
