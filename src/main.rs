mod api;
mod cli;
mod core;
mod prelude;
mod slug;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    api::radio357,
    cli::{Args, Command, CurrentArgs, ScheduleArgs},
    core::{clock_time::ClockTime, schedule::DailySchedule},
    prelude::*,
    slug::slugify,
    tables::build_schedule_table,
};

#[tokio::main]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    // Logging goes to stderr: stdout carries nothing but the slug.
    tracing_subscriber::fmt().with_writer(std::io::stderr).without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Current(args) => current(&args).await,
        Command::Schedule(args) => schedule(&args).await,
    }
}

async fn current(args: &CurrentArgs) -> Result {
    let announcements =
        radio357::Api::try_new(args.source.schedule_url.clone())?.get_today().await?;
    ensure!(!announcements.is_empty(), "the page announced no programs for today");
    info!(len = announcements.len(), "fetched the announcements");

    let schedule = DailySchedule::assemble(announcements)?;
    let now = args.at.unwrap_or_else(ClockTime::now);
    let entry = schedule.currently_airing(args.offset_minutes(), now)?;
    info!(name = entry.name.as_str(), airs_at = ?entry.airs_at, "resolved");

    // Consumers use the output as a filename, hence no trailing newline.
    print!("{}", slugify(&entry.name, !args.keep_diacritics));
    Ok(())
}

async fn schedule(args: &ScheduleArgs) -> Result {
    let announcements =
        radio357::Api::try_new(args.source.schedule_url.clone())?.get_today().await?;
    let schedule = DailySchedule::assemble(announcements)?;
    println!("{}", build_schedule_table(&schedule));
    Ok(())
}
