//! Core domain types for the timetable service
//!
//! Principals (who a cached resource belongs to) and the persisted row
//! shapes for schedule and exam entries.

pub mod remote;

pub use remote::{HttpRemote, RemoteError, RemoteSource};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::DayType;

/// Role of a principal; students and lecturers share a numeric id space and
/// must be tracked independently everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrincipalRole {
    Student,
    Lecturer,
}

/// Identity a cached resource is scoped to: a student (through their group)
/// or a lecturer (through their employee record).
///
/// Construction guarantees a resolvable identity, so nothing downstream has
/// to handle a student without a group or a lecturer without an employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principal {
    Student { user_id: i64, group_id: i64 },
    Lecturer { user_id: i64, employee_id: i64 },
}

/// Errors raised when registration state cannot be resolved to a principal
#[derive(Debug, Error)]
pub enum PrincipalError {
    #[error("student {0} has no group id")]
    MissingGroup(i64),
    #[error("lecturer {0} has no employee id")]
    MissingEmployee(i64),
}

impl Principal {
    /// Builds a principal from raw registration state, failing fast when the
    /// identity cannot be resolved.
    pub fn from_parts(
        role: PrincipalRole,
        user_id: i64,
        group_id: Option<i64>,
        employee_id: Option<i64>,
    ) -> Result<Self, PrincipalError> {
        match role {
            PrincipalRole::Student => group_id
                .map(|group_id| Principal::Student { user_id, group_id })
                .ok_or(PrincipalError::MissingGroup(user_id)),
            PrincipalRole::Lecturer => employee_id
                .map(|employee_id| Principal::Lecturer { user_id, employee_id })
                .ok_or(PrincipalError::MissingEmployee(user_id)),
        }
    }

    /// Chat user id the principal registered under
    pub fn user_id(&self) -> i64 {
        match *self {
            Principal::Student { user_id, .. } | Principal::Lecturer { user_id, .. } => user_id,
        }
    }

    pub fn role(&self) -> PrincipalRole {
        match self {
            Principal::Student { .. } => PrincipalRole::Student,
            Principal::Lecturer { .. } => PrincipalRole::Lecturer,
        }
    }

    /// The group or employee id resource rows are scoped by
    pub fn object_id(&self) -> i64 {
        match *self {
            Principal::Student { group_id, .. } => group_id,
            Principal::Lecturer { employee_id, .. } => employee_id,
        }
    }
}

/// Kind of lesson or examination slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectType {
    Lecture,
    Practice,
    Laboratory,
    Test,
    Exam,
    Consultation,
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubjectType::Lecture => "lecture",
            SubjectType::Practice => "practice",
            SubjectType::Laboratory => "laboratory",
            SubjectType::Test => "test",
            SubjectType::Exam => "exam",
            SubjectType::Consultation => "consultation",
        };
        f.write_str(label)
    }
}

/// Resource kinds tracked independently by the refresh quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Schedule,
    Exams,
}

/// One persisted timetable entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Midnight timestamp of the lesson's calendar day
    pub date: i64,
    pub day: DayType,
    /// Slot number within the day, first lesson = 1
    pub number: u8,
    pub name: String,
    pub kind: SubjectType,
    /// 0 when the whole group attends
    pub sub_group: u8,
    /// Room number
    pub audience: String,
    pub building: String,
    pub employee_id: i64,
    pub group_id: i64,
}

/// One persisted exam timetable entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamEntry {
    /// Midnight timestamp of the exam's calendar day
    pub date: i64,
    /// Start time as published, e.g. "10:20"
    pub time: String,
    pub name: String,
    pub kind: SubjectType,
    /// Room or other location as published
    pub location: String,
    pub employee_id: i64,
    pub group_id: i64,
}
