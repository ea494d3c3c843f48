//! JSON-file implementation of the row store
//!
//! One file per principal and resource kind in an XDG-compliant cache
//! directory. A missing file reads as an empty row set; an unparseable file
//! is an error rather than silent data loss.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use super::{Store, StoreError};
use crate::clock::Window;
use crate::data::{ExamEntry, Principal, PrincipalRole, ScheduleEntry};

/// Stores timetable rows as pretty-printed JSON files
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Creates a store under the platform cache directory
    /// (`~/.cache/unisched/` on Linux). Returns `None` when no home
    /// directory can be determined.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "unisched")?;
        Some(Self {
            dir: project_dirs.cache_dir().to_path_buf(),
        })
    }

    /// Creates a store rooted at a specific directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, kind: &str, principal: &Principal) -> PathBuf {
        let scope = match principal.role() {
            PrincipalRole::Student => "group",
            PrincipalRole::Lecturer => "employee",
        };
        self.dir
            .join(format!("{kind}_{scope}_{}.json", principal.object_id()))
    }

    fn read_rows<T: DeserializeOwned>(&self, path: &PathBuf) -> Result<Vec<T>, StoreError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_rows<T: Serialize>(&self, path: &PathBuf, rows: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(path, serde_json::to_string_pretty(rows)?)?;
        Ok(())
    }
}

#[async_trait]
impl Store for JsonStore {
    async fn schedule(
        &self,
        principal: &Principal,
        window: Window,
    ) -> Result<Vec<ScheduleEntry>, StoreError> {
        let rows: Vec<ScheduleEntry> = self.read_rows(&self.path("schedule", principal))?;
        Ok(rows
            .into_iter()
            .filter(|row| window.contains(row.date))
            .collect())
    }

    async fn replace_schedule(
        &self,
        principal: &Principal,
        window: Window,
        rows: Vec<ScheduleEntry>,
    ) -> Result<(), StoreError> {
        let path = self.path("schedule", principal);
        let mut kept: Vec<ScheduleEntry> = self.read_rows(&path)?;
        kept.retain(|row| !window.contains(row.date));
        kept.extend(rows);
        kept.sort_by_key(|row| (row.date, row.number, row.sub_group));
        self.write_rows(&path, &kept)
    }

    async fn exams(&self, principal: &Principal) -> Result<Vec<ExamEntry>, StoreError> {
        self.read_rows(&self.path("exams", principal))
    }

    async fn replace_exams(
        &self,
        principal: &Principal,
        rows: Vec<ExamEntry>,
    ) -> Result<(), StoreError> {
        self.write_rows(&self.path("exams", principal), &rows)
    }
}
