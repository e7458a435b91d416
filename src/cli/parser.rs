use crate::export::ExportFormat;
use crate::models::StatusFilter;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rPeaklog
/// CLI application to track a hill-walking checklist backed by CSV files
#[derive(Parser)]
#[command(
    name = "rpeaklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track your progress through the Welsh 100 peaks: summits, dates, photos and activity links",
    long_about = None
)]
pub struct Cli {
    /// Override the peak catalog CSV
    #[arg(global = true, long = "catalog", value_name = "FILE")]
    pub catalog: Option<String>,

    /// Override the progress CSV
    #[arg(global = true, long = "progress", value_name = "FILE")]
    pub progress: Option<String>,

    /// Override the photo directory
    #[arg(global = true, long = "photos", value_name = "DIR")]
    pub photos: Option<String>,

    /// Show diagnostic logging on stderr (RUST_LOG also works)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the photo directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the checklist
    List {
        #[arg(long, short, value_enum, default_value = "all", help = "Which peaks to show")]
        filter: StatusFilter,

        #[arg(long, short, help = "Case-insensitive search on the peak name")]
        search: Option<String>,

        #[arg(long, short, help = "Only peaks of this region")]
        region: Option<String>,
    },

    /// Show one peak with all its annotations
    Show {
        /// Peak name (or a unique part of it)
        peak: String,
    },

    /// Mark a peak as summited
    Bag {
        /// Peak name (or a unique part of it)
        peak: String,

        #[arg(long, short, help = "Date reached (YYYY-MM-DD or 'today')")]
        date: Option<String>,

        #[arg(long, short, help = "Activity link (http/https URL)")]
        link: Option<String>,
    },

    /// Clear the summited flag (date, photo and link are kept)
    Unbag {
        /// Peak name (or a unique part of it)
        peak: String,
    },

    /// Change the date or activity link of a peak
    Edit {
        /// Peak name (or a unique part of it)
        peak: String,

        #[arg(
            long,
            short,
            conflicts_with = "clear_date",
            help = "Date reached (YYYY-MM-DD or 'today')"
        )]
        date: Option<String>,

        #[arg(long, short, conflicts_with = "clear_link", help = "Activity link (http/https URL)")]
        link: Option<String>,

        #[arg(long = "clear-date", help = "Remove the recorded date")]
        clear_date: bool,

        #[arg(long = "clear-link", help = "Remove the activity link")]
        clear_link: bool,
    },

    /// Attach or delete the summit photo of a peak
    #[command(group(ArgGroup::new("action").required(true).args(["add", "delete"])))]
    Photo {
        /// Peak name (or a unique part of it)
        peak: String,

        #[arg(long, value_name = "FILE", help = "Image to store (.jpg or .png)")]
        add: Option<String>,

        #[arg(long, help = "Delete the stored photo")]
        delete: bool,
    },

    /// Totals, completion, elevation gained and per-region progress
    Stats,

    /// Report coerced catalog values, bad progress rows and missing photos
    Check {
        #[arg(long, help = "Clear references to photo files that no longer exist")]
        fix: bool,
    },

    /// Back up the progress file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain CSV")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Export the checklist (catalog + progress)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "all", help = "Which peaks to export")]
        filter: StatusFilter,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Delete all recorded progress
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,

        #[arg(long = "purge-photos", help = "Also delete the stored photos")]
        purge_photos: bool,
    },
}
