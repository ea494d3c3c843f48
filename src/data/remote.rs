//! University schedule endpoint client
//!
//! Fetches timetable rows over HTTP and converts the endpoint's quirky wire
//! shapes into the persisted row types. Schedule responses arrive as one JSON
//! object whose row entries sit under digit keys next to unrelated metadata;
//! exam responses are plain arrays. Dates are strings, weekdays are
//! one-indexed, and lesson kinds are abbreviated Russian labels.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::clock::{DayType, Window};
use crate::data::{ExamEntry, Principal, ScheduleEntry, SubjectType};

/// Attempts per request before the endpoint counts as unavailable
const MAX_TRIES: u32 = 5;

/// Errors that can occur while fetching timetable rows
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Endpoint kept failing transiently after every retry
    #[error("schedule endpoint unavailable after {0} attempts")]
    Unavailable(u32),

    /// Endpoint rejected the request; retrying cannot help
    #[error("schedule endpoint rejected the request: {0}")]
    Rejected(StatusCode),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse the JSON response
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A row carried a value outside its documented range
    #[error("invalid field in response: {0}")]
    InvalidField(String),
}

/// Source of timetable rows, usually the university's HTTP endpoint
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Schedule rows for the principal within the given week
    async fn fetch_schedule(
        &self,
        principal: &Principal,
        week: &Window,
    ) -> Result<Vec<ScheduleEntry>, RemoteError>;

    /// Exam rows for the principal; the endpoint scopes these by session,
    /// not by week.
    async fn fetch_exams(&self, principal: &Principal) -> Result<Vec<ExamEntry>, RemoteError>;
}

/// HTTP implementation of [`RemoteSource`]
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a remote with a custom HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    fn schedule_url(&self, principal: &Principal, week: &Window) -> String {
        // the endpoint takes the week-start timestamp in milliseconds
        match principal {
            Principal::Student { group_id, .. } => format!(
                "{}/schedule//{}///{}000/printschedule",
                self.base_url, group_id, week.start
            ),
            Principal::Lecturer { employee_id, .. } => format!(
                "{}/schedule/{}////{}000/printschedule",
                self.base_url, employee_id, week.start
            ),
        }
    }

    fn exams_url(&self, principal: &Principal) -> String {
        match principal {
            Principal::Student { group_id, .. } => format!(
                "{}/schedule/{}////printexamschedule",
                self.base_url, group_id
            ),
            Principal::Lecturer { employee_id, .. } => format!(
                "{}/schedule//{}///printexamschedule",
                self.base_url, employee_id
            ),
        }
    }

    /// GETs the URL, retrying transient failures with a linear backoff
    async fn get_json(&self, url: &str) -> Result<Value, RemoteError> {
        for tries in 0..MAX_TRIES {
            if tries > 0 {
                tokio::time::sleep(backoff(tries)).await;
            }
            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(err) if err.is_connect() || err.is_timeout() => {
                    debug!(url, tries, "request failed transiently: {err}");
                    continue;
                }
                Err(err) => return Err(RemoteError::Request(err)),
            };
            let status = response.status();
            debug!(url, %status, tries, "schedule endpoint responded");
            if status.is_success() {
                return Ok(response.json().await?);
            }
            if status.is_server_error() {
                continue;
            }
            return Err(RemoteError::Rejected(status));
        }
        Err(RemoteError::Unavailable(MAX_TRIES))
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_schedule(
        &self,
        principal: &Principal,
        week: &Window,
    ) -> Result<Vec<ScheduleEntry>, RemoteError> {
        let body = self.get_json(&self.schedule_url(principal, week)).await?;
        parse_schedule(&body)
    }

    async fn fetch_exams(&self, principal: &Principal) -> Result<Vec<ExamEntry>, RemoteError> {
        let body = self.get_json(&self.exams_url(principal)).await?;
        parse_exams(&body)
    }
}

/// Sleep before retry attempt `tries`
fn backoff(tries: u32) -> Duration {
    Duration::from_secs(u64::from(1 + tries * 2))
}

/// Wire shape of one schedule row
#[derive(Debug, Deserialize)]
struct RawScheduleEntry {
    #[serde(rename = "TitleSubject")]
    name: String,
    #[serde(rename = "TypeLesson")]
    kind: String,
    #[serde(rename = "DateLesson")]
    date: String,
    #[serde(rename = "DayWeek")]
    day: i64,
    #[serde(rename = "NumberLesson")]
    number: u8,
    #[serde(rename = "NumberSubGruop")]
    sub_group: u8,
    #[serde(rename = "NumberRoom")]
    audience: String,
    #[serde(rename = "Korpus")]
    building: String,
    employee_id: i64,
    #[serde(rename = "idGruop")]
    group_id: i64,
}

/// Wire shape of one exam row
#[derive(Debug, Deserialize)]
struct RawExamEntry {
    #[serde(rename = "TitleSubject")]
    name: String,
    #[serde(rename = "TypeLesson")]
    kind: String,
    #[serde(rename = "DateLesson")]
    date: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "NumberRoom")]
    location: String,
    employee_id: i64,
    #[serde(rename = "idGruop")]
    group_id: i64,
}

/// Parses a schedule response body into sorted rows
pub(crate) fn parse_schedule(body: &Value) -> Result<Vec<ScheduleEntry>, RemoteError> {
    let mut rows: Vec<ScheduleEntry> = collect_cells(body)?
        .into_iter()
        .map(map_schedule_entry)
        .collect::<Result<_, _>>()?;
    rows.sort_by_key(|row| (row.date, row.number));
    Ok(rows)
}

/// Parses an exam response body into rows sorted by starting time
pub(crate) fn parse_exams(body: &Value) -> Result<Vec<ExamEntry>, RemoteError> {
    let raw: Vec<RawExamEntry> = match body {
        Value::Array(_) => serde_json::from_value(body.clone())?,
        // some deployments wrap exam rows like schedule rows
        _ => collect_cells(body)?,
    };
    let mut rows: Vec<ExamEntry> = raw
        .into_iter()
        .map(map_exam_entry)
        .collect::<Result<_, _>>()?;
    rows.sort_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));
    Ok(rows)
}

/// Pulls the row objects out of a digit-keyed response body. Everything under
/// a non-digit key is endpoint metadata and is skipped.
fn collect_cells<T: DeserializeOwned>(body: &Value) -> Result<Vec<T>, RemoteError> {
    let Value::Object(map) = body else {
        return Err(RemoteError::InvalidField(format!(
            "expected an object body, got {body}"
        )));
    };
    map.iter()
        .filter(|(key, _)| key.chars().all(|c| c.is_ascii_digit()))
        .map(|(_, cell)| serde_json::from_value(cell.clone()).map_err(RemoteError::from))
        .collect()
}

fn map_schedule_entry(raw: RawScheduleEntry) -> Result<ScheduleEntry, RemoteError> {
    Ok(ScheduleEntry {
        date: parse_date(&raw.date, "%Y-%m-%d")?,
        day: parse_day(raw.day)?,
        number: raw.number,
        name: raw.name,
        kind: parse_subject_type(&raw.kind)?,
        sub_group: raw.sub_group,
        audience: raw.audience,
        building: raw.building,
        employee_id: raw.employee_id,
        group_id: raw.group_id,
    })
}

fn map_exam_entry(raw: RawExamEntry) -> Result<ExamEntry, RemoteError> {
    Ok(ExamEntry {
        // exam dates arrive in the Russian day-first format
        date: parse_date(&raw.date, "%d.%m.%Y")?,
        time: raw.time,
        name: raw.name,
        kind: parse_subject_type(&raw.kind)?,
        location: raw.location,
        employee_id: raw.employee_id,
        group_id: raw.group_id,
    })
}

/// Calendar date string to its UTC midnight timestamp
fn parse_date(value: &str, format: &str) -> Result<i64, RemoteError> {
    let date = NaiveDate::parse_from_str(value, format)
        .map_err(|_| RemoteError::InvalidField(format!("unparseable date {value:?}")))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp())
}

/// The endpoint numbers weekdays from one
fn parse_day(value: i64) -> Result<DayType, RemoteError> {
    DayType::from_index(value - 1)
        .ok_or_else(|| RemoteError::InvalidField(format!("weekday {value} out of range")))
}

fn parse_subject_type(label: &str) -> Result<SubjectType, RemoteError> {
    match label.trim() {
        "лек" => Ok(SubjectType::Lecture),
        "пр" => Ok(SubjectType::Practice),
        "лаб" => Ok(SubjectType::Laboratory),
        "зачет" => Ok(SubjectType::Test),
        "экзамен" => Ok(SubjectType::Exam),
        "консультация" => Ok(SubjectType::Consultation),
        other => Err(RemoteError::InvalidField(format!(
            "unknown lesson kind {other:?}"
        ))),
    }
}
