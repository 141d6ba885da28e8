use std::path::Path;

use georemind_core::config::AppConfig;
use georemind_core::viewmodel::{
    drain_signals, ReminderListState, RemindersListViewModel, StringResource, UiSignal,
};
use georemind_core::ReminderDataSource;

use crate::commands::common::{
    format_reminder_lines, open_repository, print_signals, reminder_to_list_item,
    require_signed_in, ReminderListItem,
};
use crate::error::CliError;

pub async fn run_list(as_json: bool, db_path: &Path, config: &AppConfig) -> Result<(), CliError> {
    require_signed_in()?;
    let repository = open_repository(db_path, config)?;

    let view_model = RemindersListViewModel::new(repository);
    let state = load_list(&view_model).await?;
    if as_json {
        let json_items = state
            .reminders
            .iter()
            .map(reminder_to_list_item)
            .collect::<Vec<ReminderListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if state.show_no_data {
        println!("{}", StringResource::NoReminders.text());
        let mut signals = view_model.subscribe_signals();
        view_model.navigate_to_add_reminder();
        print_signals(&drain_signals(&mut signals));
    } else {
        for line in format_reminder_lines(&state.reminders) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Load the list, turning a store failure into an error instead of an
/// empty list
pub async fn load_list<D: ReminderDataSource>(
    view_model: &RemindersListViewModel<D>,
) -> Result<ReminderListState, CliError> {
    let mut signals = view_model.subscribe_signals();
    view_model.load_reminders().await;

    let signals = drain_signals(&mut signals);
    if let Some(message) = signals.iter().find_map(|signal| match signal {
        UiSignal::Snackbar(message) => Some(message.clone()),
        _ => None,
    }) {
        return Err(CliError::Repository(message));
    }
    print_signals(&signals);

    Ok(view_model.state())
}
