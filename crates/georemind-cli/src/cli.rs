use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "georemind")]
#[command(about = "Location reminders that fire when you arrive")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Optional path to the JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a reminder and register its geofence
    #[command(alias = "new")]
    Add {
        /// Reminder title
        #[arg(short, long)]
        title: Option<String>,
        /// Reminder description
        #[arg(short, long)]
        description: Option<String>,
        /// Name of the picked place (omit for a custom location)
        #[arg(long, value_name = "NAME")]
        place: Option<String>,
        /// Use the device's current location label
        #[arg(long, conflicts_with = "place")]
        current: bool,
        /// Latitude of the picked place
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude of the picked place
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// How to answer permission and location-setting prompts
        #[arg(long, value_enum, default_value_t = PromptMode::Ask)]
        prompts: PromptMode,
        /// Start with device location switched off
        #[arg(long)]
        location_off: bool,
    },
    /// List saved reminders
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one reminder
    Show {
        /// Reminder ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every reminder
    Clear,
    /// Simulate entering the geofences with the given IDs
    Enter {
        /// Triggered geofence (reminder) IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PromptMode {
    /// Ask on the terminal
    Ask,
    /// Accept every prompt
    Yes,
    /// Decline every prompt
    No,
}
