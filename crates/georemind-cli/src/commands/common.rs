use std::path::{Path, PathBuf};
use std::sync::Arc;

use georemind_core::auth::{AuthState, UserIdentity};
use georemind_core::config::AppConfig;
use georemind_core::data::ExecutionContext;
use georemind_core::db::{Database, SqliteReminderStore};
use georemind_core::geofence::FlowOutcome;
use georemind_core::models::{LatLng, MapSelection, PointOfInterest};
use georemind_core::viewmodel::{Destination, NavigationCommand, UiSignal};
use georemind_core::{Reminder, RemindersLocalRepository};
use serde::Serialize;
use tokio::runtime::Handle;

use crate::error::CliError;
use crate::platform::EnvAuthProvider;

pub type Repository = RemindersLocalRepository<SqliteReminderStore>;

#[derive(Debug, Serialize)]
pub struct ReminderListItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub fn reminder_to_list_item(reminder: &Reminder) -> ReminderListItem {
    ReminderListItem {
        id: reminder.id.to_string(),
        title: reminder.display_title().to_string(),
        description: reminder.description.clone(),
        location: reminder.location.clone(),
        latitude: reminder.latitude,
        longitude: reminder.longitude,
    }
}

pub fn open_repository(db_path: &Path, config: &AppConfig) -> Result<Arc<Repository>, CliError> {
    let db = Database::open(db_path)?;
    let repository = RemindersLocalRepository::new(SqliteReminderStore::new(Arc::new(db)));
    let context = if config.blocking_store {
        ExecutionContext::Blocking(Handle::current())
    } else {
        ExecutionContext::Inline
    };
    Ok(Arc::new(repository.with_context(context)))
}

/// Database path: explicit flag, then config, then the platform data dir
pub fn resolve_db_path(
    explicit: Option<PathBuf>,
    config: &AppConfig,
    data_dir: Option<PathBuf>,
) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = &config.database_path {
        return Ok(PathBuf::from(path));
    }
    let data_dir = data_dir.ok_or(CliError::NoDataDir)?;
    Ok(config.database_path_or(&data_dir.join("georemind")))
}

/// Config from `--config`, which must exist, or from the optional default
/// location
pub fn load_config(
    explicit: Option<PathBuf>,
    fallback: Option<PathBuf>,
) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CliError::ConfigNotFound(path));
        }
        return Ok(AppConfig::load(path)?);
    }
    match fallback {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::default()),
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("georemind").join("config.json"))
}

pub fn require_signed_in() -> Result<UserIdentity, CliError> {
    match AuthState::from_provider(&EnvAuthProvider) {
        AuthState::Authenticated(user) => {
            tracing::debug!("Signed in as {}", user.greeting_name());
            Ok(user)
        }
        AuthState::Unauthenticated => Err(CliError::NotSignedIn),
    }
}

pub fn normalize_reminder_id(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyReminderId);
    }
    Ok(trimmed.to_string())
}

/// Map picker result from command-line flags
pub fn selection_from_args(
    place: Option<String>,
    current: bool,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Option<MapSelection> {
    let lat_lng = LatLng::new(lat?, lon?);
    let selection = match place {
        Some(name) => MapSelection::Poi(PointOfInterest {
            lat_lng,
            place_id: String::new(),
            name,
        }),
        None if current => MapSelection::Current(lat_lng),
        None => MapSelection::Custom(lat_lng),
    };
    Some(selection)
}

/// Text to show for a signal; only the add-reminder navigation is rendered
pub fn render_signal(signal: &UiSignal) -> Option<String> {
    match signal {
        UiSignal::ActionSnackbar { .. } => signal
            .text()
            .map(|text| format!("{text} (run the command again to retry)")),
        UiSignal::Navigate(NavigationCommand::To(Destination::SaveReminder)) => {
            Some("Create one with `georemind add`".to_string())
        }
        UiSignal::Navigate(_) => None,
        _ => signal.text().map(str::to_string),
    }
}

pub fn print_signals(signals: &[UiSignal]) {
    for line in signals.iter().filter_map(render_signal) {
        eprintln!("{line}");
    }
}

pub fn describe_outcome(outcome: &FlowOutcome) -> String {
    match outcome {
        FlowOutcome::Saved(id) => format!("saved {id}"),
        FlowOutcome::PermissionDenied => "location permission denied".to_string(),
        FlowOutcome::LocationSettingsRejected => "device location is off".to_string(),
        FlowOutcome::InvalidDraft => "missing title or location".to_string(),
        FlowOutcome::GeofenceFailed(message) => message.clone(),
        FlowOutcome::SaveFailed => "could not store reminder".to_string(),
        FlowOutcome::AlreadyInFlight => "another save is in progress".to_string(),
    }
}

pub fn format_reminder_lines(reminders: &[Reminder]) -> Vec<String> {
    reminders
        .iter()
        .map(|reminder| {
            let id = reminder.id.to_string();
            let short_id = id.chars().take(13).collect::<String>();
            let title = truncate(reminder.display_title(), 30);
            let location = reminder.location.as_deref().unwrap_or("");
            format!("{short_id:<13}  {title:<30}  {location}")
        })
        .collect()
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect::<String>();
    truncated.push_str("...");
    truncated
}
