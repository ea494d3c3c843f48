//! Semester-anchored calendar math
//!
//! Converts week offsets and academic weekdays into epoch-second window
//! bounds. Windows double as cache partition keys and as store query
//! predicates, so everything here is deterministic for a given `now`.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Seconds in one calendar day
pub const SECS_PER_DAY: i64 = 86_400;
/// Seconds in one calendar week
pub const SECS_PER_WEEK: i64 = 604_800;

/// Default semester start: Monday 2022-08-29 00:00 UTC
const DEFAULT_START_SEMESTER: i64 = 1_661_731_200;

/// Academic weekday. The university runs a six-day week; Sunday is never
/// represented, and any computation that would land on it is redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayType {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
}

impl DayType {
    /// All academic days in week order
    pub const ALL: [DayType; 6] = [
        DayType::Monday,
        DayType::Tuesday,
        DayType::Wednesday,
        DayType::Thursday,
        DayType::Friday,
        DayType::Saturday,
    ];

    /// Position within the week, Monday = 0
    pub fn index(self) -> i64 {
        self as i64
    }

    /// Day at the given week position, `None` outside `0..=5`
    pub fn from_index(index: i64) -> Option<DayType> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Parses an English day name, case-insensitively
    pub fn from_name(name: &str) -> Option<DayType> {
        match name.to_ascii_lowercase().as_str() {
            "monday" => Some(DayType::Monday),
            "tuesday" => Some(DayType::Tuesday),
            "wednesday" => Some(DayType::Wednesday),
            "thursday" => Some(DayType::Thursday),
            "friday" => Some(DayType::Friday),
            "saturday" => Some(DayType::Saturday),
            _ => None,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayType::Monday => "Monday",
            DayType::Tuesday => "Tuesday",
            DayType::Wednesday => "Wednesday",
            DayType::Thursday => "Thursday",
            DayType::Friday => "Friday",
            DayType::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// Inclusive epoch-second bounds of one calendar week or one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// First second covered by the window
    pub start: i64,
    /// Last second covered by the window
    pub end: i64,
}

impl Window {
    /// Whether the timestamp falls inside the window
    pub fn contains(self, ts: i64) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Maps calendar-relative offsets to epoch-second window boundaries anchored
/// at a fixed semester-start epoch.
///
/// `base_week_delta` shifts every computed week, which is how the deployment
/// is recalibrated when the university moves the timetable origin mid-term.
#[derive(Debug, Clone, Copy)]
pub struct SemesterClock {
    start_semester: i64,
    base_week_delta: i64,
}

impl Default for SemesterClock {
    fn default() -> Self {
        Self::new(DEFAULT_START_SEMESTER, 0)
    }
}

impl SemesterClock {
    pub fn new(start_semester: i64, base_week_delta: i64) -> Self {
        Self {
            start_semester,
            base_week_delta,
        }
    }

    /// Whole weeks elapsed since the semester start; week 1 begins at the
    /// epoch itself.
    pub fn current_week(&self, now: DateTime<Utc>) -> i64 {
        (now.timestamp() - self.start_semester).div_euclid(SECS_PER_WEEK) + 1
    }

    /// Start of the week `week_delta` weeks away from the current one, or of
    /// a single day within it when `weekday` is given.
    ///
    /// The base is UTC midnight of the most recent Monday. A requested
    /// weekday that already passed this week wraps forward to next week's
    /// occurrence; `past` steps one week back before the weekday shift.
    pub fn window_start(
        &self,
        now: DateTime<Utc>,
        week_delta: i64,
        weekday: Option<DayType>,
        past: bool,
    ) -> i64 {
        let day_start = now.timestamp().div_euclid(SECS_PER_DAY) * SECS_PER_DAY;
        let monday = day_start - i64::from(now.weekday().num_days_from_monday()) * SECS_PER_DAY;

        let mut start = monday + (week_delta + self.base_week_delta) * SECS_PER_WEEK;
        if past {
            start -= SECS_PER_WEEK;
        }
        if let Some(day) = weekday {
            start += day.index() * SECS_PER_DAY;
            if day < self.today(now) {
                start += SECS_PER_WEEK;
            }
        }
        start
    }

    /// Window covering one calendar week. Windows of adjacent deltas are
    /// contiguous and non-overlapping.
    pub fn week_window(&self, now: DateTime<Utc>, week_delta: i64) -> Window {
        let start = self.window_start(now, week_delta, None, false);
        Window {
            start,
            end: start + SECS_PER_WEEK - 1,
        }
    }

    /// Window covering one academic day
    pub fn day_window(&self, now: DateTime<Utc>, day: DayType, past: bool) -> Window {
        let start = self.window_start(now, 0, Some(day), past);
        Window {
            start,
            end: start + SECS_PER_DAY - 1,
        }
    }

    /// Week window holding the given day window
    pub fn containing_week(day_window: Window, day: DayType) -> Window {
        let start = day_window.start - day.index() * SECS_PER_DAY;
        Window {
            start,
            end: start + SECS_PER_WEEK - 1,
        }
    }

    /// Today's academic day; Sunday folds into Monday.
    pub fn today(&self, now: DateTime<Utc>) -> DayType {
        match now.weekday().num_days_from_monday() {
            6 => DayType::Monday,
            d => DayType::ALL[d as usize],
        }
    }

    /// The next academic day; Saturday and Sunday both advance to Monday.
    pub fn next_day(&self, now: DateTime<Utc>) -> DayType {
        match now.weekday().num_days_from_monday() {
            5 | 6 => DayType::Monday,
            d => DayType::ALL[(d + 1) as usize],
        }
    }

    /// The previous academic day; Monday and Sunday both step back to
    /// Saturday.
    pub fn previous_day(&self, now: DateTime<Utc>) -> DayType {
        match now.weekday().num_days_from_monday() {
            0 | 6 => DayType::Saturday,
            d => DayType::ALL[(d - 1) as usize],
        }
    }
}
