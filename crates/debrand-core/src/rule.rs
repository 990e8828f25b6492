//! Substitution rules.

use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::config::ConfigError;

/// Uncompiled rule as written in a preset or configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Regular expression, matched case-insensitively.
    pub pattern: String,
    /// Literal replacement text (no capture-group expansion).
    #[serde(default)]
    pub replacement: String,
}

impl RuleSpec {
    /// Creates a new rule spec.
    #[must_use]
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Compiles this spec into a [`Rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn compile(&self) -> Result<Rule, ConfigError> {
        Rule::new(&self.pattern, &self.replacement)
    }
}

impl From<(&str, &str)> for RuleSpec {
    fn from((pattern, replacement): (&str, &str)) -> Self {
        Self::new(pattern, replacement)
    }
}

/// A compiled pattern → replacement rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles a case-insensitive rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
        })
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every match in `content`. Borrows when nothing matched.
    #[must_use]
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.regex
            .replace_all(content, NoExpand(self.replacement.as_str()))
    }
}
