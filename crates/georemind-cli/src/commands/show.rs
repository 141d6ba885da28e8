use std::path::Path;

use georemind_core::config::AppConfig;
use georemind_core::{ReminderDataSource, ReminderId};

use crate::commands::common::{
    normalize_reminder_id, open_repository, reminder_to_list_item, require_signed_in,
};
use crate::error::CliError;

pub async fn run_show(
    id: &str,
    as_json: bool,
    db_path: &Path,
    config: &AppConfig,
) -> Result<(), CliError> {
    require_signed_in()?;
    let id = ReminderId::from(normalize_reminder_id(id)?);
    let repository = open_repository(db_path, config)?;

    let reminder = repository
        .get_reminder(&id)
        .await
        .into_result()
        .map_err(CliError::Repository)?;

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reminder_to_list_item(&reminder))?
        );
        return Ok(());
    }

    println!("id:          {}", reminder.id);
    println!("title:       {}", reminder.display_title());
    println!(
        "description: {}",
        reminder.description.as_deref().unwrap_or("")
    );
    println!("location:    {}", reminder.location.as_deref().unwrap_or(""));
    if let Some((latitude, longitude)) = reminder.coordinates() {
        println!("coordinates: {latitude}, {longitude}");
    }
    Ok(())
}
