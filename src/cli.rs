//! Command-line interface parsing for the timetable tool
//!
//! This module turns clap arguments into a typed [`Request`]: which
//! principal asks, which week or day they want, and whether they want the
//! exam timetable instead.

use clap::Parser;
use thiserror::Error;

use crate::clock::DayType;
use crate::data::{Principal, PrincipalError, PrincipalRole};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified day name is not recognized
    #[error("Invalid day: '{0}'. Valid days: today, next, previous, monday..saturday")]
    InvalidDay(String),

    /// Neither a group nor an employee was given
    #[error("Missing principal: pass --group <GROUP_ID> or --employee <EMPLOYEE_ID>")]
    MissingPrincipal,

    /// The given ids do not form a resolvable principal
    #[error(transparent)]
    Principal(#[from] PrincipalError),
}

/// Unisched - cached university timetables with rate-limited refresh
#[derive(Parser, Debug)]
#[command(name = "unisched")]
#[command(about = "University schedule and exam lookup")]
#[command(version)]
pub struct Cli {
    /// Base URL of the university schedule endpoint
    #[arg(long, default_value = "https://oreluniver.ru")]
    pub base_url: String,

    /// Look up a student group's timetable
    #[arg(long, value_name = "GROUP_ID", conflicts_with = "employee")]
    pub group: Option<i64>,

    /// Look up a lecturer's timetable
    #[arg(long, value_name = "EMPLOYEE_ID")]
    pub employee: Option<i64>,

    /// Week offset from the current week; negative values look back
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub week: i64,

    /// Single day instead of a whole week
    ///
    /// Examples:
    ///   unisched --group 1042 --day today
    ///   unisched --group 1042 --day next
    ///   unisched --group 1042 --day friday
    #[arg(long, value_name = "DAY")]
    pub day: Option<String>,

    /// Show the exam timetable instead of the weekly schedule
    #[arg(long)]
    pub exams: bool,

    /// Chat user id the request is attributed to for quota accounting
    #[arg(long, default_value_t = 1)]
    pub user: i64,
}

/// Day selector parsed from `--day`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayArg {
    Today,
    Next,
    Previous,
    Fixed(DayType),
}

/// A validated lookup request derived from CLI arguments
#[derive(Debug)]
pub struct Request {
    pub principal: Principal,
    pub week_delta: i64,
    pub day: Option<DayArg>,
    pub exams: bool,
}

/// Parses a `--day` value into a [`DayArg`]
pub fn parse_day_arg(s: &str) -> Result<DayArg, CliError> {
    match s.to_ascii_lowercase().as_str() {
        "today" => Ok(DayArg::Today),
        "next" | "tomorrow" => Ok(DayArg::Next),
        "previous" | "yesterday" => Ok(DayArg::Previous),
        other => DayType::from_name(other)
            .map(DayArg::Fixed)
            .ok_or_else(|| CliError::InvalidDay(s.to_string())),
    }
}

impl Request {
    /// Builds a request from parsed arguments, resolving the principal and
    /// the day selector.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let principal = match (cli.group, cli.employee) {
            (Some(_), _) => {
                Principal::from_parts(PrincipalRole::Student, cli.user, cli.group, None)?
            }
            (None, Some(_)) => {
                Principal::from_parts(PrincipalRole::Lecturer, cli.user, None, cli.employee)?
            }
            (None, None) => return Err(CliError::MissingPrincipal),
        };
        let day = cli.day.as_deref().map(parse_day_arg).transpose()?;
        Ok(Request {
            principal,
            week_delta: cli.week,
            day,
            exams: cli.exams,
        })
    }
}
