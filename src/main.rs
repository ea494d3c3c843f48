//! Unisched - look up cached university timetables from the terminal
//!
//! Thin binary over the library: parses arguments, wires the JSON store and
//! the HTTP remote into a coordinator and prints the requested rows as
//! plain lines.

use std::error::Error;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use unisched::cli::{Cli, DayArg, Request};
use unisched::clock::SemesterClock;
use unisched::coordinator::{RefreshCoordinator, RefreshLimits};
use unisched::data::{ExamEntry, HttpRemote, ScheduleEntry};
use unisched::store::JsonStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let request = Request::from_cli(&cli)?;

    let store = JsonStore::new().ok_or("could not determine a cache directory")?;
    let remote = HttpRemote::new(cli.base_url.as_str());
    let clock = SemesterClock::default();
    let coordinator = RefreshCoordinator::new(store, remote, clock, RefreshLimits::standard());

    let now = Utc::now();

    if request.exams {
        let rows = coordinator.exams(&request.principal).await?;
        print_exams(&rows);
        return Ok(());
    }

    if let Some(day) = request.day {
        let (day, past) = match day {
            DayArg::Today => (clock.today(now), false),
            DayArg::Next => (clock.next_day(now), false),
            DayArg::Previous => (clock.previous_day(now), true),
            DayArg::Fixed(day) => (day, false),
        };
        let rows = coordinator
            .schedule_day(&request.principal, now, day, past)
            .await?;
        print_schedule(&rows);
        return Ok(());
    }

    let rows = coordinator
        .schedule_week(&request.principal, now, request.week_delta)
        .await?;
    println!("Week {}", clock.current_week(now) + request.week_delta);
    print_schedule(&rows);
    Ok(())
}

fn print_schedule(rows: &[ScheduleEntry]) {
    if rows.is_empty() {
        println!("No lessons scheduled.");
        return;
    }
    for row in rows {
        let sub_group = if row.sub_group > 0 {
            format!(" (subgroup {})", row.sub_group)
        } else {
            String::new()
        };
        println!(
            "{} {} #{} {} [{}]{} room {} building {}",
            format_date(row.date),
            row.day,
            row.number,
            row.name,
            row.kind,
            sub_group,
            row.audience,
            row.building,
        );
    }
}

fn print_exams(rows: &[ExamEntry]) {
    if rows.is_empty() {
        println!("No exams scheduled.");
        return;
    }
    for row in rows {
        println!(
            "{} {} {} [{}] at {}",
            format_date(row.date),
            row.time,
            row.name,
            row.kind,
            row.location,
        );
    }
}

/// Midnight timestamp to a calendar date line
fn format_date(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => ts.to_string(),
    }
}
