use std::path::Path;
use std::sync::Arc;

use georemind_core::config::AppConfig;
use georemind_core::geofence::{FlowOutcome, GeofenceRegistrationFlow};
use georemind_core::viewmodel::{drain_signals, SaveReminderViewModel};

use crate::cli::PromptMode;
use crate::commands::common::{
    describe_outcome, open_repository, print_signals, require_signed_in, selection_from_args,
};
use crate::error::CliError;
use crate::platform::{ConsoleLocationSettings, ConsolePermissions, LoggingGeofencing};

pub struct AddArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub place: Option<String>,
    pub current: bool,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub prompts: PromptMode,
    pub location_off: bool,
}

pub async fn run_add(args: AddArgs, db_path: &Path, config: &AppConfig) -> Result<(), CliError> {
    require_signed_in()?;
    let repository = open_repository(db_path, config)?;

    let view_model = Arc::new(SaveReminderViewModel::new(repository));
    let mut signals = view_model.subscribe_signals();

    view_model.set_title(args.title);
    view_model.set_description(args.description);
    view_model.navigate_to_select_location();
    view_model.select_location(selection_from_args(
        args.place,
        args.current,
        args.lat,
        args.lon,
    ));

    let flow = GeofenceRegistrationFlow::new(
        Arc::clone(&view_model),
        ConsolePermissions::new(args.prompts),
        ConsoleLocationSettings::new(args.prompts, !args.location_off),
        LoggingGeofencing,
        config.flow_config(),
    );
    let outcome = flow.save().await;
    view_model.on_clear();

    print_signals(&drain_signals(&mut signals));

    match outcome {
        FlowOutcome::Saved(id) => {
            println!("{id}");
            Ok(())
        }
        other => Err(CliError::NotSaved(describe_outcome(&other))),
    }
}
