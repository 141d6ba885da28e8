//! Repository layer between the view-models and the store

#[cfg(test)]
pub(crate) mod fake;
mod outcome;
mod repository;
mod source;

pub use outcome::Outcome;
pub use repository::{ExecutionContext, RemindersLocalRepository, REMINDER_NOT_FOUND};
pub use source::ReminderDataSource;
