use std::path::Path;

use georemind_core::config::AppConfig;
use georemind_core::geofence::{GeofenceTransitionHandler, GeofencingEvent, TransitionType};

use crate::commands::common::{normalize_reminder_id, open_repository, require_signed_in};
use crate::error::CliError;
use crate::platform::ConsoleNotifier;

pub async fn run_enter(ids: &[String], db_path: &Path, config: &AppConfig) -> Result<(), CliError> {
    require_signed_in()?;
    let triggering_ids = ids
        .iter()
        .map(|id| normalize_reminder_id(id))
        .collect::<Result<Vec<_>, _>>()?;
    let repository = open_repository(db_path, config)?;

    let handler = GeofenceTransitionHandler::new(repository, ConsoleNotifier);
    let delivered = handler
        .handle(&GeofencingEvent {
            transition: TransitionType::Enter,
            triggering_ids,
        })
        .await;

    tracing::info!("Delivered {delivered} of {} notifications", ids.len());
    Ok(())
}
