//! Console output for cleanup runs.

use anyhow::Result;
use debrand_core::{FileOutcome, RunSummary};
use std::path::Path;

use crate::OutputFormat;

const RULE_WIDTH: usize = 60;

/// Prints one progress line for a modified file.
pub fn progress(path: &Path, outcome: &FileOutcome, format: OutputFormat) {
    if !matches!(format, OutputFormat::Text) {
        return;
    }
    if let FileOutcome::Modified(record) = outcome {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        println!(
            "\x1b[32m✔\x1b[0m {}: {} replacement(s), {} line(s)",
            name, record.replacements, record.lines_changed
        );
    }
}

/// Prints the run summary in the specified format.
pub fn print(summary: &RunSummary, report: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Text => {
            print_text(summary, report);
            Ok(())
        }
    }
}

fn print_text(summary: &RunSummary, report: &Path) {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{rule}");
    if summary.dry_run {
        println!("SUMMARY (dry run, no files written):");
    } else {
        println!("SUMMARY:");
    }
    println!("   Files scanned: {}", summary.files_scanned);
    println!("   Files modified: {}", summary.files_modified());
    println!("   Replacements: {}", summary.total_replacements);
    println!("   Lines modified: {}", summary.total_lines_changed);

    if summary.has_failures() {
        println!(
            "   \x1b[31mFailed: {}\x1b[0m",
            summary.failures.len()
        );
        for failure in &summary.failures {
            println!("     - {}", failure.message);
        }
    }
    println!("{rule}");

    println!("\n\x1b[32m✔\x1b[0m Report saved: {}", report.display());
}

fn print_json(summary: &RunSummary) -> Result<()> {
    println!("{}", render_json(summary)?);
    Ok(())
}

/// Serializes the summary as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(summary: &RunSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
