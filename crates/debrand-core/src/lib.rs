//! # debrand-core
//!
//! Core pipeline for removing "AI-generated" branding markers from UI
//! source trees.
//!
//! This crate provides the building blocks of a cleanup run:
//!
//! - [`RuleSpec`] / [`Rule`] for case-insensitive pattern substitutions
//! - [`MarkerStripper`] for removing class-name fragments from attributes
//! - [`CommentStripper`] for dropping comments that mention a marker word
//! - [`Pipeline`] for cleaning a single file
//! - [`Cleaner`] for orchestrating a run and writing the report
//!
//! ## Example
//!
//! ```ignore
//! use debrand_core::{Cleaner, CleanerConfig};
//!
//! let cleaner = Cleaner::builder()
//!     .config(CleanerConfig::default())
//!     .rule(("✨", ""))
//!     .markers(["ai-badge"])
//!     .build()?;
//!
//! let summary = cleaner.run()?;
//! println!("{} files modified", summary.files_modified());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cleaner;
mod comments;
mod config;
mod discovery;
mod markers;
mod pipeline;
mod rewrite;
mod rule;
mod types;
mod whitespace;

/// Report rendering and writing.
pub mod report;

pub use cleaner::{Cleaner, CleanerBuilder};
pub use comments::CommentStripper;
pub use config::{BlockCommentMode, CleanerConfig, CommentConfig, ConfigError, ScanConfig};
pub use discovery::{discover_files, ExcludeSet};
pub use markers::MarkerStripper;
pub use pipeline::{changed_lines, Cleaned, Pipeline, ProcessError};
pub use report::ReportError;
pub use rewrite::{rewrite, Rewritten};
pub use rule::{Rule, RuleSpec};
pub use types::{FileFailure, FileOutcome, FileRecord, RunSummary};
pub use whitespace::collapse_blank_lines;
