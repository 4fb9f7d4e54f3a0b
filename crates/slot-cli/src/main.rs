mod cli;
mod config;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use slot_engine::{
    format_working_hours_from_schedule, parse_iso_date, parse_local_datetime,
    parse_working_hours_string_to_schedule, suggest_booking_slot, validate_requested_slot,
    HoursSource, WeeklySchedule,
};

use crate::cli::{CliArgs, Command, HoursArgs};
use crate::config::SlotsConfig;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let compact = args.compact;

    match args.command {
        Command::Window { hours, date } => {
            let source = load_hours(&hours)?;
            let date = parse_iso_date(&date)?;
            print_json(&source.window_for_date(date), compact)?;
        }

        Command::Suggest {
            hours,
            now,
            lead,
            step,
            config,
        } => {
            let source = load_hours(&hours)?;
            let now = resolve_now(now.as_deref())?;
            let options = SlotsConfig::load(config.as_deref())?.suggest_options(lead, step);
            debug!(%now, ?options, "Suggesting booking slot");

            let suggestion = suggest_booking_slot(&source, now, &options)?;
            print_json(&suggestion, compact)?;
        }

        Command::Check {
            hours,
            date,
            time,
            now,
        } => {
            let source = load_hours(&hours)?;
            let date = parse_iso_date(&date)?;
            let now = resolve_now(now.as_deref())?;

            match validate_requested_slot(&source, date, &time, now) {
                Ok(window) => print_json(&json!({ "ok": true, "window": window }), compact)?,
                Err(rejection) => {
                    print_json(
                        &json!({ "ok": false, "reason": rejection.to_string() }),
                        compact,
                    )?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Command::Format { schedule } => {
            let content = read_file(&schedule)?;
            let schedule: WeeklySchedule = serde_json::from_str(&content)
                .with_context(|| format!("invalid schedule document: {}", schedule.display()))?;
            // Days with broken times would silently vanish from the text.
            schedule.validate()?;
            println!("{}", format_working_hours_from_schedule(&schedule));
        }

        Command::Parse { hours } => {
            print_json(&parse_working_hours_string_to_schedule(&hours), compact)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_hours(args: &HoursArgs) -> Result<HoursSource> {
    if let Some(text) = &args.hours {
        return Ok(HoursSource::from(text.as_str()));
    }
    let path = args
        .schedule
        .as_deref()
        .context("either --hours or --schedule is required")?;
    let content = read_file(path)?;
    HoursSource::from_json(&content)
        .with_context(|| format!("invalid schedule file: {}", path.display()))
}

fn resolve_now(now: Option<&str>) -> Result<NaiveDateTime> {
    match now {
        Some(s) => Ok(parse_local_datetime(s)?),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let output = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{output}");
    Ok(())
}
