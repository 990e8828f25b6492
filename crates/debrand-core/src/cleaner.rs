//! Run orchestration: discovery, per-file cleaning, totals and report.

use crate::comments::CommentStripper;
use crate::config::{CleanerConfig, ConfigError};
use crate::discovery::{discover_files, ExcludeSet};
use crate::markers::MarkerStripper;
use crate::pipeline::Pipeline;
use crate::report::{self, ReportError};
use crate::rule::{Rule, RuleSpec};
use crate::types::{FileOutcome, RunSummary};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builder for configuring a [`Cleaner`].
#[derive(Default)]
pub struct CleanerBuilder {
    root: Option<PathBuf>,
    report: Option<PathBuf>,
    rules: Vec<RuleSpec>,
    markers: Vec<String>,
    exclude_patterns: Vec<String>,
    config: Option<CleanerConfig>,
    dry_run: bool,
}

impl CleanerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to scan, overriding the configuration.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the report path, overriding the configuration.
    #[must_use]
    pub fn report(mut self, path: impl Into<PathBuf>) -> Self {
        self.report = Some(path.into());
        self
    }

    /// Adds a rule. Builder rules run before rules from the configuration.
    #[must_use]
    pub fn rule(mut self, rule: impl Into<RuleSpec>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Adds multiple rules.
    #[must_use]
    pub fn rules<I, R>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RuleSpec>,
    {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Adds marker tokens. Ignored when the configuration sets `markers`.
    #[must_use]
    pub fn markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers.extend(markers.into_iter().map(Into::into));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: CleanerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether files are left untouched (default: false).
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the cleaner, compiling every pattern up front.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule, attribute or comment pattern is invalid.
    pub fn build(self) -> Result<Cleaner, ConfigError> {
        let config = self.config.unwrap_or_default();

        let rules = self
            .rules
            .iter()
            .chain(&config.rules)
            .map(RuleSpec::compile)
            .collect::<Result<Vec<Rule>, _>>()?;

        let markers = config.markers.clone().unwrap_or(self.markers);
        let markers = MarkerStripper::new(&config.attributes, markers)?;

        let comments = if config.comments.enabled {
            Some(CommentStripper::new(
                &config.comments.marker,
                config.comments.block,
            )?)
        } else {
            None
        };

        let mut exclude_patterns = config.scan.exclude.clone();
        exclude_patterns.extend(self.exclude_patterns);

        Ok(Cleaner {
            root: self.root.unwrap_or_else(|| config.scan.root.clone()),
            report: self.report.unwrap_or_else(|| config.report.clone()),
            extensions: config.scan.extensions.clone(),
            exclude: ExcludeSet::new(exclude_patterns),
            pipeline: Pipeline::new(rules, markers, comments, config.collapse_blank_lines),
            dry_run: self.dry_run,
        })
    }
}

/// Orchestrates a cleanup run over a source tree.
///
/// Use [`Cleaner::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Cleaner {
    root: PathBuf,
    report: PathBuf,
    extensions: Vec<String>,
    exclude: ExcludeSet,
    pipeline: Pipeline,
    dry_run: bool,
}

impl Cleaner {
    /// Creates a new builder for configuring a cleaner.
    #[must_use]
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::new()
    }

    /// Returns the root directory being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the report path.
    #[must_use]
    pub fn report_path(&self) -> &Path {
        &self.report
    }

    /// Returns the compiled pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Returns true if source files are left untouched.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Lists the files a run would process.
    #[must_use]
    pub fn scan(&self) -> Vec<PathBuf> {
        discover_files(&self.root, &self.extensions, &self.exclude)
    }

    /// Runs the cleanup and writes the report.
    ///
    /// # Errors
    ///
    /// Returns an error only if the report cannot be written; per-file
    /// failures are recorded in the summary.
    pub fn run(&self) -> Result<RunSummary, ReportError> {
        self.run_with(|_, _| {})
    }

    /// Runs the cleanup, calling `on_file` after each file, then writes the
    /// report.
    ///
    /// # Errors
    ///
    /// Returns an error only if the report cannot be written.
    pub fn run_with<F>(&self, mut on_file: F) -> Result<RunSummary, ReportError>
    where
        F: FnMut(&Path, &FileOutcome),
    {
        info!("Starting cleanup at {}", self.root.display());

        let files = self.scan();
        info!("Found {} files to process", files.len());

        let mut summary = RunSummary {
            dry_run: self.dry_run,
            ..RunSummary::default()
        };

        for path in &files {
            let outcome = self.pipeline.process_file(path, !self.dry_run);
            on_file(path, &outcome);
            summary.record(outcome);
        }

        info!(
            "Cleanup complete: {} of {} files modified, {} failed",
            summary.files_modified(),
            summary.files_scanned,
            summary.failures.len()
        );

        report::write(&self.report, &summary)?;
        debug!("Report written to {}", self.report.display());

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlockCommentMode;

    #[test]
    fn test_builder_defaults() {
        let cleaner = Cleaner::builder().build().expect("Failed to build cleaner");

        assert_eq!(cleaner.root(), Path::new("src"));
        assert_eq!(cleaner.report_path(), Path::new("DEBRAND_REPORT.txt"));
        assert!(cleaner.pipeline().rules().is_empty());
        assert!(!cleaner.is_dry_run());
    }

    #[test]
    fn test_builder_overrides_config() {
        let mut config = CleanerConfig::default();
        config.scan.root = PathBuf::from("web");
        config.report = PathBuf::from("a.txt");

        let cleaner = Cleaner::builder()
            .config(config)
            .root("app")
            .report("b.txt")
            .build()
            .unwrap();

        assert_eq!(cleaner.root(), Path::new("app"));
        assert_eq!(cleaner.report_path(), Path::new("b.txt"));
    }

    #[test]
    fn test_builder_rules_precede_config_rules() {
        let mut config = CleanerConfig::default();
        config.rules.push(RuleSpec::new("Claude", "Modèle"));

        let cleaner = Cleaner::builder()
            .config(config)
            .rule(("GPT", "Modèle"))
            .build()
            .unwrap();

        let patterns: Vec<&str> = cleaner.pipeline().rules().iter().map(Rule::pattern).collect();
        assert_eq!(patterns, vec!["GPT", "Claude"]);
    }

    #[test]
    fn test_config_markers_replace_builder_markers() {
        let config = CleanerConfig {
            markers: Some(vec!["glow-".to_string()]),
            ..CleanerConfig::default()
        };

        let cleaner = Cleaner::builder()
            .config(config)
            .markers(["ai-badge"])
            .build()
            .unwrap();

        assert_eq!(cleaner.pipeline().markers(), ["glow-".to_string()]);
    }

    #[test]
    fn test_invalid_rule_fails_build() {
        let result = Cleaner::builder().rule(("(unclosed", "")).build();
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn test_disabled_comments_are_kept() {
        let mut config = CleanerConfig::default();
        config.comments.enabled = false;
        config.comments.block = BlockCommentMode::Greedy;

        let cleaner = Cleaner::builder().config(config).build().unwrap();
        let input = "// IA note\n";
        assert_eq!(cleaner.pipeline().clean(input).content, input);
    }
}
