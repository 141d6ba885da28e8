use std::path::Path;

use georemind_core::config::AppConfig;
use georemind_core::ReminderDataSource;

use crate::commands::common::{open_repository, require_signed_in};
use crate::error::CliError;

pub async fn run_clear(db_path: &Path, config: &AppConfig) -> Result<(), CliError> {
    require_signed_in()?;
    let repository = open_repository(db_path, config)?;

    repository
        .delete_all_reminders()
        .await
        .into_result()
        .map_err(CliError::Repository)?;
    println!("Deleted all reminders");
    Ok(())
}
