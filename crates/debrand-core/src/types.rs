//! Core types for per-file outcomes and run summaries.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of one file that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path of the file, as discovered.
    pub path: PathBuf,
    /// Number of rules that changed the file.
    pub replacements: usize,
    /// Number of lines added or rewritten, from a line diff.
    pub lines_changed: usize,
}

impl FileRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, replacements: usize, lines_changed: usize) -> Self {
        Self {
            path: path.into(),
            replacements,
            lines_changed,
        }
    }
}

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    /// Path of the file.
    pub path: PathBuf,
    /// Human-readable cause.
    pub message: String,
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content was identical after cleaning; nothing written.
    Unchanged,
    /// Content changed (and was written unless in dry-run mode).
    Modified(FileRecord),
    /// Reading, decoding or writing failed. Counts as zero effect.
    Failed(FileFailure),
}

/// Aggregate result of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of files examined.
    pub files_scanned: usize,
    /// Sum of per-file replacement counts.
    pub total_replacements: usize,
    /// Sum of per-file changed-line counts.
    pub total_lines_changed: usize,
    /// Modified files, in processing order.
    pub modified: Vec<FileRecord>,
    /// Files that failed to process.
    pub failures: Vec<FileFailure>,
    /// Whether source files were left untouched.
    #[serde(default)]
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one file outcome into the totals.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.files_scanned += 1;
        match outcome {
            FileOutcome::Unchanged => {}
            FileOutcome::Modified(record) => {
                self.total_replacements += record.replacements;
                self.total_lines_changed += record.lines_changed;
                self.modified.push(record);
            }
            FileOutcome::Failed(failure) => self.failures.push(failure),
        }
    }

    /// Number of modified files.
    #[must_use]
    pub fn files_modified(&self) -> usize {
        self.modified.len()
    }

    /// Paths of modified files, in processing order.
    pub fn modified_paths(&self) -> impl Iterator<Item = &Path> {
        self.modified.iter().map(|r| r.path.as_path())
    }

    /// Returns true if any file failed to process.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
