//! Plain-text report artifact.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::types::RunSummary;

const TITLE: &str = "AI BRANDING CLEANUP REPORT";
const FILES_HEADER: &str = "MODIFIED FILES:";
const RULE_WIDTH: usize = 60;

/// Errors writing the report.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReportError {
    /// The report file could not be written.
    #[error("Failed to write report {path}: {source}")]
    #[diagnostic(code(debrand::report::write))]
    Write {
        /// Report path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Renders the report text for `summary`.
///
/// Layout: title, `=` rule, blank line, three count lines, blank line,
/// header, `-` rule, then one modified path per line.
#[must_use]
pub fn render(summary: &RunSummary) -> String {
    let mut out = String::new();
    if summary.dry_run {
        let _ = writeln!(out, "{TITLE} (DRY RUN)");
    } else {
        let _ = writeln!(out, "{TITLE}");
    }
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out);
    let _ = writeln!(out, "Files modified: {}", summary.files_modified());
    let _ = writeln!(out, "Replacements: {}", summary.total_replacements);
    let _ = writeln!(out, "Lines modified: {}", summary.total_lines_changed);
    let _ = writeln!(out);
    let _ = writeln!(out, "{FILES_HEADER}");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for path in summary.modified_paths() {
        let _ = writeln!(out, "{}", path.display());
    }
    out
}

/// Writes the rendered report to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the directory or file cannot be written.
pub fn write(path: &Path, summary: &RunSummary) -> Result<(), ReportError> {
    let to_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, render(summary)).map_err(to_error)
}
