//! Embedded database layer for georemind

mod connection;
mod migrations;
mod store;

pub use connection::Database;
pub use store::{ReminderStore, SqliteReminderStore};
