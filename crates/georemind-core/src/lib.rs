//! georemind-core - Core library for georemind
//!
//! This crate contains the reminder model, the embedded store, the repository
//! result wrapper, the list/save view-models, and the permission and geofence
//! registration flow shared by every georemind front end.

pub mod auth;
pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod geofence;
pub mod models;
#[cfg(test)]
mod scenarios;
mod util;
pub mod viewmodel;

pub use data::{Outcome, ReminderDataSource, RemindersLocalRepository};
pub use error::{Error, Result};
pub use models::{DraftReminder, Reminder, ReminderId};
