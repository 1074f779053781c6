use chrono::Local;
use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::core::clock_time::ClockTime;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch today's schedule and print the slug of the program on air.
    #[clap(name = "current")]
    Current(CurrentArgs),

    /// Print today's assembled schedule.
    #[clap(name = "schedule")]
    Schedule(ScheduleArgs),
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Schedule page URL.
    #[clap(
        long = "schedule-url",
        env = "SCHEDULE_URL",
        default_value = "https://radio357.pl/ramowka"
    )]
    pub schedule_url: Url,
}

#[derive(Parser)]
pub struct CurrentArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Minutes added to every announced time before matching.
    ///
    /// Defaults to the local timezone's offset from UTC.
    #[clap(long = "utc-offset-minutes", env = "UTC_OFFSET_MINUTES")]
    pub utc_offset_minutes: Option<i32>,

    /// Resolve against this `HH:MM` time instead of the wall clock.
    #[clap(long)]
    pub at: Option<ClockTime>,

    /// Keep diacritics instead of folding them to ASCII.
    #[clap(long)]
    pub keep_diacritics: bool,
}

impl CurrentArgs {
    #[must_use]
    pub fn offset_minutes(&self) -> i32 {
        self.utc_offset_minutes.unwrap_or_else(|| Local::now().offset().local_minus_utc() / 60)
    }
}

#[derive(Parser)]
pub struct ScheduleArgs {
    #[clap(flatten)]
    pub source: SourceArgs,
}
