use std::fs;
use std::path::PathBuf;

use setu_core::history::{AssessmentRecord, HistoryStore};
use setu_core::{SetuError, SetuResult};

/// Durable JSON-file backing for the assessment log.
///
/// A missing file reads as an empty log; every persist rewrites the full
/// retention window, so the file never grows past it.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&mut self) -> SetuResult<Vec<AssessmentRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            SetuError::StorageError(format!("failed to read {}: {e}", self.path.display()))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn persist(&mut self, records: &[AssessmentRecord]) -> SetuResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(|e| {
            SetuError::StorageError(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}
