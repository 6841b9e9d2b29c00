use chrono::prelude::*;
use directories::ProjectDirs;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::engine::RunSummary;

/// One row of the run history CSV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    pub date: String,
    pub pool_size: usize,
    pub skipped: String,
    pub candidates_checked: u64,
    pub matches: usize,
    pub completed: bool,
}

/// Append-only CSV log of past searches, kept next to the config file.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "tsiruf") {
            pd.config_dir().join("runs.csv")
        } else {
            PathBuf::from("tsiruf_runs.csv")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    /// Record a finished (or cancelled) run. Emits the CSV header when the
    /// file is created.
    pub fn append(&self, summary: &RunSummary, skipped: &[usize]) -> csv::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let needs_header = !self.path.exists();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(RunRecord {
            date: Local::now().format("%c").to_string(),
            pool_size: summary.pool_size,
            skipped: skipped.iter().sorted().join("+"),
            candidates_checked: summary.candidates_checked,
            matches: summary.matches,
            completed: summary.completed,
        })?;
        writer.flush()?;
        Ok(())
    }

    /// All recorded runs, oldest first. An absent log reads as empty.
    pub fn read_all(&self) -> csv::Result<Vec<RunRecord>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        reader.deserialize().collect()
    }
}
