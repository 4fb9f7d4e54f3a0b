use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Working-hours lookup and booking-slot suggestion.
///
/// Reads a business's weekly hours and answers which window is open on a
/// date, which slot a booking form should suggest, and whether a requested
/// slot is bookable. Results are printed as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "slots",
    version,
    about = "Working-hours lookup and booking-slot suggestion"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Print compact single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,
}

/// Where to read working hours from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct HoursArgs {
    /// Working hours as schedule text, e.g. "Пн-Пт: 09:00-18:00, Сб: 10:00-16:00"
    #[arg(long)]
    pub hours: Option<String>,

    /// JSON file holding schedule text or a weekly schedule document
    #[arg(long)]
    pub schedule: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the working window for a date, or null when closed
    Window {
        #[command(flatten)]
        hours: HoursArgs,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
    },

    /// Suggest the next bookable slot
    Suggest {
        #[command(flatten)]
        hours: HoursArgs,

        /// Reference time as YYYY-MM-DDTHH:MM (default: local clock)
        #[arg(long)]
        now: Option<String>,

        /// Minimum minutes between now and the slot (overrides config)
        #[arg(long)]
        lead: Option<u32>,

        /// Rounding step in minutes (overrides config)
        #[arg(long)]
        step: Option<u32>,

        /// TOML config file with a [booking] table
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check whether a date and time can be booked
    Check {
        #[command(flatten)]
        hours: HoursArgs,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Time as HH:MM
        #[arg(long)]
        time: String,

        /// Reference time as YYYY-MM-DDTHH:MM (default: local clock)
        #[arg(long)]
        now: Option<String>,
    },

    /// Render a weekly schedule document as schedule text
    Format {
        /// JSON file holding a weekly schedule document
        #[arg(long)]
        schedule: PathBuf,
    },

    /// Parse schedule text into a weekly schedule document
    Parse {
        /// Schedule text
        #[arg(long)]
        hours: String,
    },
}
