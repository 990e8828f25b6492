//! Run command implementation.

use anyhow::{Context, Result};
use debrand_core::Cleaner;
use debrand_rules::Preset;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line overrides for a run.
pub struct RunOptions {
    /// Directory to scan instead of the configured root.
    pub root: Option<PathBuf>,
    /// Report path instead of the configured one.
    pub report: Option<PathBuf>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Leave source files untouched.
    pub dry_run: bool,
    /// Console output format.
    pub format: OutputFormat,
    /// Exit with status 1 when any file failed.
    pub fail_on_error: bool,
}

/// How a completed run should end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exit 0.
    Success,
    /// Some files failed and `--fail-on-error` was given: exit 1.
    FilesFailed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::FilesFailed => ExitCode::FAILURE,
        }
    }
}

/// Runs the cleanup command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, names an unknown
/// preset, holds an invalid pattern, or if the report cannot be written.
pub fn run(options: &RunOptions, source: &ConfigSource) -> Result<RunStatus> {
    if !matches!(source, ConfigSource::Default) {
        tracing::info!("Using config: {source}");
    }
    let config = source
        .load()
        .with_context(|| format!("Failed to load config: {source}"))?;

    let preset = Preset::resolve(config.preset.as_deref())?;
    tracing::debug!("Using preset {preset}");

    let mut builder = Cleaner::builder()
        .rules(preset.rules())
        .markers(preset.markers())
        .config(config)
        .dry_run(options.dry_run);

    if let Some(root) = &options.root {
        builder = builder.root(root);
    }
    if let Some(report) = &options.report {
        builder = builder.report(report);
    }
    for pattern in &options.exclude {
        builder = builder.exclude(pattern.as_str());
    }

    let cleaner = builder.build().context("Failed to build cleaner")?;

    tracing::info!(
        "Cleaning {} with {} rules and {} markers",
        cleaner.root().display(),
        cleaner.pipeline().rules().len(),
        cleaner.pipeline().markers().len()
    );

    let format = options.format;
    let summary = cleaner
        .run_with(|path, outcome| super::output::progress(path, outcome, format))
        .context("Cleanup failed")?;

    super::output::print(&summary, cleaner.report_path(), format)?;

    if options.fail_on_error && summary.has_failures() {
        Ok(RunStatus::FilesFailed)
    } else {
        Ok(RunStatus::Success)
    }
}
