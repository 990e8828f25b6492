//! Ordered rule application over whole-file text.

use crate::rule::Rule;

/// Output of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// Content after every rule has been applied.
    pub content: String,
    /// Number of rules that changed the content (not number of matches).
    pub replacements: usize,
}

/// Applies `rules` in order, each one to the output of the previous.
///
/// A later rule sees text inserted by an earlier one.
#[must_use]
pub fn rewrite(content: &str, rules: &[Rule]) -> Rewritten {
    let mut current = content.to_string();
    let mut replacements = 0;

    for rule in rules {
        let next = rule.apply(&current);
        if next != current {
            replacements += 1;
            current = next.into_owned();
        }
    }

    Rewritten {
        content: current,
        replacements,
    }
}
