//! File access for the snapshot store: whole-file reads, append-only writes.

use super::SnapshotError;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire store. The caller scans the returned text; a missing
    /// or unreadable file is an error the caller treats as "nothing found".
    pub fn load(&self) -> Result<String, SnapshotError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Append one captured section: delimiter line, pretty-printed body,
    /// blank separator line. This is the only write path; existing records
    /// are never touched.
    pub fn append(&self, key: &str, body: &Value) -> Result<(), SnapshotError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "--- {key} ---")?;
        writeln!(file, "{}", serde_json::to_string_pretty(body)?)?;
        writeln!(file)?;
        Ok(())
    }
}
