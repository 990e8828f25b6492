//! Per-file cleaning pipeline.
//!
//! Stages run in a fixed order over the whole file text:
//!
//! ```text
//! rules (rewrite) → markers → comments → blank lines
//! ```

use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::comments::CommentStripper;
use crate::markers::MarkerStripper;
use crate::rewrite::rewrite;
use crate::rule::Rule;
use crate::types::{FileFailure, FileOutcome, FileRecord};
use crate::whitespace::collapse_blank_lines;

/// Errors processing a single file.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ProcessError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(debrand::file::read))]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("Failed to decode {path} as UTF-8: {source}")]
    #[diagnostic(code(debrand::file::decode), help("binary and non-UTF-8 files are skipped"))]
    Decode {
        /// File path.
        path: PathBuf,
        /// Decoding error.
        source: std::string::FromUtf8Error,
    },

    /// The cleaned content could not be written back.
    #[error("Failed to write {path}: {source}")]
    #[diagnostic(code(debrand::file::write))]
    Write {
        /// File path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Text produced by [`Pipeline::clean`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    /// Final content.
    pub content: String,
    /// Number of rules that changed the content.
    pub replacements: usize,
}

/// Compiled cleaning stages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    rules: Vec<Rule>,
    markers: MarkerStripper,
    comments: Option<CommentStripper>,
    collapse_blank_lines: bool,
}

impl Pipeline {
    /// Assembles a pipeline from compiled stages.
    ///
    /// `comments` is `None` when comment stripping is disabled.
    #[must_use]
    pub fn new(
        rules: Vec<Rule>,
        markers: MarkerStripper,
        comments: Option<CommentStripper>,
        collapse_blank_lines: bool,
    ) -> Self {
        Self {
            rules,
            markers,
            comments,
            collapse_blank_lines,
        }
    }

    /// Returns the compiled rules, in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the marker tokens, in application order.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        self.markers.markers()
    }

    /// Runs every stage over `content`.
    #[must_use]
    pub fn clean(&self, content: &str) -> Cleaned {
        let rewritten = rewrite(content, &self.rules);
        let mut text = self.markers.strip_all(&rewritten.content);

        if let Some(comments) = &self.comments {
            text = comments.strip(&text);
        }
        if self.collapse_blank_lines {
            text = collapse_blank_lines(&text);
        }

        Cleaned {
            content: text,
            replacements: rewritten.replacements,
        }
    }

    /// Cleans one file, writing it back when `write` is set and the content
    /// changed.
    ///
    /// Returns `Ok(None)` when the content is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] if the file cannot be read, decoded or
    /// written.
    pub fn try_process_file(
        &self,
        path: &Path,
        write: bool,
    ) -> Result<Option<FileRecord>, ProcessError> {
        let bytes = std::fs::read(path).map_err(|source| ProcessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let original = String::from_utf8(bytes).map_err(|source| ProcessError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let cleaned = self.clean(&original);
        if cleaned.content == original {
            return Ok(None);
        }

        if write {
            std::fs::write(path, &cleaned.content).map_err(|source| ProcessError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(Some(FileRecord::new(
            path,
            cleaned.replacements,
            changed_lines(&original, &cleaned.content),
        )))
    }

    /// Like [`Pipeline::try_process_file`], but folds errors into
    /// [`FileOutcome::Failed`] after logging them.
    #[must_use]
    pub fn process_file(&self, path: &Path, write: bool) -> FileOutcome {
        debug!("Processing: {}", path.display());
        match self.try_process_file(path, write) {
            Ok(Some(record)) => FileOutcome::Modified(record),
            Ok(None) => FileOutcome::Unchanged,
            Err(e) => {
                warn!("{e}");
                FileOutcome::Failed(FileFailure {
                    path: e.path().to_path_buf(),
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Counts lines present in `new` but not in `old`, using a line diff.
#[must_use]
pub fn changed_lines(old: &str, new: &str) -> usize {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Insert)
        .count()
}
