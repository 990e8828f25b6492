//! Configuration types for debrand.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rule::RuleSpec;

/// Top-level configuration for a cleanup run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Preset to use (e.g., "french-ui", "minimal", "none").
    #[serde(default)]
    pub preset: Option<String>,

    /// Path of the plain-text report written at the end of a run.
    #[serde(default = "default_report")]
    pub report: PathBuf,

    /// File discovery configuration.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Extra rules, applied after the preset rules.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,

    /// Marker tokens stripped from attribute values.
    /// Replaces the preset markers when set.
    #[serde(default)]
    pub markers: Option<Vec<String>>,

    /// Attribute names whose quoted values are searched for markers.
    #[serde(default = "default_attributes")]
    pub attributes: Vec<String>,

    /// Comment stripping configuration.
    #[serde(default)]
    pub comments: CommentConfig,

    /// Collapse runs of blank lines after rewriting.
    #[serde(default = "default_true")]
    pub collapse_blank_lines: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            preset: None,
            report: default_report(),
            scan: ScanConfig::default(),
            rules: Vec::new(),
            markers: None,
            attributes: default_attributes(),
            comments: CommentConfig::default(),
            collapse_blank_lines: true,
        }
    }
}

impl CleanerConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// File discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory to scan (default: `src`).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File extensions to process, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns to exclude from the scan.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

/// How block comments are matched against the comment marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCommentMode {
    /// Each `/*` pairs with the first `*/` after it.
    #[default]
    Paired,
    /// Legacy scan: the span may run across earlier terminators up to the
    /// first `*/` after the marker. Can delete code between comments.
    Greedy,
}

/// Comment stripping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentConfig {
    /// Whether comments mentioning the marker are removed.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whole word that marks a comment for removal (case-sensitive).
    #[serde(default = "default_comment_marker")]
    pub marker: String,

    /// Block comment matching strategy.
    #[serde(default)]
    pub block: BlockCommentMode,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            marker: default_comment_marker(),
            block: BlockCommentMode::default(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_report() -> PathBuf {
    PathBuf::from("DEBRAND_REPORT.txt")
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js", "css", "scss"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/__pycache__/**".to_string(),
    ]
}

fn default_attributes() -> Vec<String> {
    vec!["className".to_string(), "class".to_string()]
}

fn default_comment_marker() -> String {
    "IA".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(debrand::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(debrand::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule or comment pattern failed to compile.
    #[error("Invalid pattern `{pattern}`: {source}")]
    #[diagnostic(
        code(debrand::config::pattern),
        help("patterns use Rust `regex` syntax; escape literal metacharacters")
    )]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Compilation error.
        source: regex::Error,
    },
}
