use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] georemind_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Repository(String),
    #[error("Reminder ID cannot be empty")]
    EmptyReminderId,
    #[error("Reminder was not saved: {0}")]
    NotSaved(String),
    #[error("Not signed in. Set GEOREMIND_USER (or add it to .env) to sign in.")]
    NotSignedIn,
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
    #[error("Could not determine a data directory; pass --db-path")]
    NoDataDir,
}
