//! Persistence seam for timetable rows

mod json;

pub use json::JsonStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::clock::Window;
use crate::data::{ExamEntry, Principal, ScheduleEntry};

/// Errors raised by row storage
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored file no longer parses
    #[error("stored rows are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistent row storage scoped by principal.
///
/// Schedule rows are windowed; replacement deletes every row inside the
/// window and bulk-inserts the new set, never merging. Exam rows are scoped
/// by principal alone and replaced wholesale.
#[async_trait]
pub trait Store: Send + Sync {
    /// Schedule rows whose date falls inside the window, in timetable order
    async fn schedule(
        &self,
        principal: &Principal,
        window: Window,
    ) -> Result<Vec<ScheduleEntry>, StoreError>;

    /// Replaces every schedule row inside the window with `rows`
    async fn replace_schedule(
        &self,
        principal: &Principal,
        window: Window,
        rows: Vec<ScheduleEntry>,
    ) -> Result<(), StoreError>;

    /// All exam rows for the principal
    async fn exams(&self, principal: &Principal) -> Result<Vec<ExamEntry>, StoreError>;

    /// Replaces the principal's exam rows with `rows`
    async fn replace_exams(
        &self,
        principal: &Principal,
        rows: Vec<ExamEntry>,
    ) -> Result<(), StoreError>;
}
