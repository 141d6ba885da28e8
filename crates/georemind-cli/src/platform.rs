//! Terminal stand-ins for the platform location services.
//!
//! A CLI process has no permission store or geofencing engine, so prompts go
//! to the terminal and registered geofences are only logged.

use std::collections::HashSet;
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use georemind_core::auth::{AuthProvider, UserIdentity};
use georemind_core::geofence::{
    GeofenceError, GeofenceExpiration, GeofencingClient, GeofencingRequest, LocationPermission,
    LocationSettingsService, PermissionService, ReminderNotifier, SettingsCheck,
    SettingsResolution,
};
use georemind_core::Reminder;

use crate::cli::PromptMode;

pub const USER_ENV: &str = "GEOREMIND_USER";

/// Answer a yes/no question according to the prompt mode.
///
/// Terminal reads run on the blocking pool.
pub async fn confirm(mode: PromptMode, question: String) -> bool {
    match mode {
        PromptMode::Yes => true,
        PromptMode::No => false,
        PromptMode::Ask => match tokio::task::spawn_blocking(move || ask(&question)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(error)) => {
                tracing::warn!("Could not read answer: {error}");
                false
            }
            Err(error) => {
                tracing::warn!("Prompt task failed: {error}");
                false
            }
        },
    }
}

fn ask(question: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}

pub fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub struct ConsolePermissions {
    mode: PromptMode,
    granted: Mutex<HashSet<LocationPermission>>,
}

impl ConsolePermissions {
    pub fn new(mode: PromptMode) -> Self {
        Self {
            mode,
            granted: Mutex::new(HashSet::new()),
        }
    }
}

impl PermissionService for ConsolePermissions {
    fn is_granted(&self, permission: LocationPermission) -> bool {
        self.granted
            .lock()
            .is_ok_and(|granted| granted.contains(&permission))
    }

    fn requires_background_permission(&self) -> bool {
        true
    }

    async fn request(&self, permissions: &[LocationPermission]) -> Vec<LocationPermission> {
        let names = permissions
            .iter()
            .map(|permission| match permission {
                LocationPermission::Foreground => "foreground",
                LocationPermission::Background => "background",
            })
            .collect::<Vec<_>>()
            .join(" and ");

        if !confirm(
            self.mode,
            format!("Allow georemind to use {names} location?"),
        )
        .await
        {
            return Vec::new();
        }

        if let Ok(mut granted) = self.granted.lock() {
            granted.extend(permissions.iter().copied());
        }
        permissions.to_vec()
    }
}

pub struct ConsoleLocationSettings {
    mode: PromptMode,
    enabled: AtomicBool,
}

impl ConsoleLocationSettings {
    pub const fn new(mode: PromptMode, enabled: bool) -> Self {
        Self {
            mode,
            enabled: AtomicBool::new(enabled),
        }
    }
}

impl LocationSettingsService for ConsoleLocationSettings {
    async fn check(&self) -> SettingsCheck {
        if self.enabled.load(Ordering::Acquire) {
            SettingsCheck::Satisfied
        } else {
            SettingsCheck::Resolvable
        }
    }

    async fn resolve(&self) -> SettingsResolution {
        if confirm(self.mode, "Device location is off. Turn it on?".to_string()).await {
            self.enabled.store(true, Ordering::Release);
            SettingsResolution::Accepted
        } else {
            SettingsResolution::Rejected
        }
    }
}

/// Accepts every geofence and logs it
pub struct LoggingGeofencing;

impl GeofencingClient for LoggingGeofencing {
    async fn add_geofences(&self, request: &GeofencingRequest) -> Result<(), GeofenceError> {
        for geofence in &request.geofences {
            tracing::info!(
                "Geofence {} at ({}, {}) radius {}m, {}",
                geofence.request_id,
                geofence.center.latitude,
                geofence.center.longitude,
                geofence.radius_meters,
                describe_expiration(geofence.expiration)
            );
        }
        Ok(())
    }
}

pub fn describe_expiration(expiration: GeofenceExpiration) -> String {
    expiration.duration().map_or_else(
        || "never expires".to_string(),
        |lifetime| format!("expires after {}s", lifetime.as_secs()),
    )
}

/// Prints reminder notifications to stdout
pub struct ConsoleNotifier;

impl ReminderNotifier for ConsoleNotifier {
    fn notify(&self, reminder: &Reminder) {
        println!("{}", format_notification(reminder));
    }
}

pub fn format_notification(reminder: &Reminder) -> String {
    let location = reminder.location.as_deref().unwrap_or("your place");
    match reminder.description.as_deref().filter(|text| !text.is_empty()) {
        Some(description) => format!(
            "Reminder: {} @ {location}\n  {description}",
            reminder.display_title()
        ),
        None => format!("Reminder: {} @ {location}", reminder.display_title()),
    }
}

/// Signed-in identity taken from the environment
pub struct EnvAuthProvider;

impl AuthProvider for EnvAuthProvider {
    fn current_user(&self) -> Option<UserIdentity> {
        let uid = env::var(USER_ENV).ok()?;
        let uid = uid.trim();
        if uid.is_empty() {
            return None;
        }
        Some(UserIdentity {
            uid: uid.to_string(),
            display_name: None,
            email: uid.contains('@').then(|| uid.to_string()),
        })
    }
}
