use clap::{Parser, Subcommand};
use wp_time::{Date, DateTime};

/// Thai Buddhist lunar calendar.
#[derive(Parser)]
#[command(
    name = "wanphra",
    version,
    about = "Wan Phra observance days, moon phases, Thai holidays and festivals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Treat this date (YYYY-MM-DD) as today.
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<Date>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the moon phase now or at a given instant.
    Phase(PhaseArgs),
    /// List the Wan Phra days of a month.
    Month(MonthArgs),
    /// List the Thai holidays of a year.
    Holidays(HolidaysArgs),
    /// Count down to the nearest festivals.
    Festivals,
    /// Show the next Wan Phra day.
    Next,
    /// Show everything known about one date.
    Day(DayArgs),
}

/// Arguments for the `phase` subcommand.
#[derive(clap::Args)]
pub struct PhaseArgs {
    /// Instant to classify (YYYY-MM-DDTHH:MM); defaults to now.
    #[arg(long, value_name = "DATETIME")]
    pub at: Option<DateTime>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Gregorian year.
    #[arg(value_parser = clap::value_parser!(u16).range(1900..=2199))]
    pub year: u16,

    /// Month number, 1 = January.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: u8,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Gregorian year.
    pub year: i32,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date to describe (YYYY-MM-DD).
    pub date: Date,
}
