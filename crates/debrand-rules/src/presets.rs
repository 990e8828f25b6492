//! Rule presets for common configurations.

use crate::french_ui::{CLASS_MARKERS, EMOJI, PHRASES};
use debrand_core::RuleSpec;
use std::fmt;
use std::str::FromStr;

/// Preset configurations for debrand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Emoji, French AI wording and AI class markers.
    #[default]
    FrenchUi,
    /// Emoji and class markers only; wording is left alone.
    Minimal,
    /// No built-in rules or markers; configuration supplies everything.
    None,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 3] = [Preset::FrenchUi, Preset::Minimal, Preset::None];

    /// Returns the kebab-case name used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FrenchUi => "french-ui",
            Self::Minimal => "minimal",
            Self::None => "none",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::FrenchUi => "emoji, French AI wording and AI class markers (default)",
            Self::Minimal => "emoji and AI class markers only",
            Self::None => "nothing built in; use [[rules]] and markers",
        }
    }

    /// Returns the rules for this preset, in application order.
    #[must_use]
    pub fn rules(self) -> Vec<RuleSpec> {
        let tables: &[&[(&str, &str)]] = match self {
            Self::FrenchUi => &[EMOJI, PHRASES],
            Self::Minimal => &[EMOJI],
            Self::None => &[],
        };
        tables
            .iter()
            .flat_map(|table| table.iter().map(|&pair| RuleSpec::from(pair)))
            .collect()
    }

    /// Returns the class markers for this preset.
    #[must_use]
    pub fn markers(self) -> Vec<String> {
        match self {
            Self::FrenchUi | Self::Minimal => {
                CLASS_MARKERS.iter().map(|m| (*m).to_string()).collect()
            }
            Self::None => Vec::new(),
        }
    }

    /// Resolves an optional preset name, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPreset`] if the name is not recognized.
    pub fn resolve(name: Option<&str>) -> Result<Self, UnknownPreset> {
        name.map_or(Ok(Self::default()), str::parse)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// Error returned for an unrecognized preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown preset `{0}` (expected one of: french-ui, minimal, none)")]
pub struct UnknownPreset(pub String);
