//! # debrand-rules
//!
//! Built-in rule presets for debrand.
//!
//! ## Available Presets
//!
//! | Name | Rules | Markers |
//! |------|-------|---------|
//! | `french-ui` | emoji, French AI wording, marketing terms | AI class fragments |
//! | `minimal` | emoji only | AI class fragments |
//! | `none` | none | none |
//!
//! ## Usage
//!
//! ```ignore
//! use debrand_core::Cleaner;
//! use debrand_rules::Preset;
//!
//! let preset = Preset::FrenchUi;
//! let cleaner = Cleaner::builder()
//!     .rules(preset.rules())
//!     .markers(preset.markers())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod french_ui;
mod presets;

pub use presets::{Preset, UnknownPreset};

/// Re-export core types for convenience.
pub use debrand_core::{Rule, RuleSpec};
