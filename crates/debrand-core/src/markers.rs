//! Marker token removal inside quoted attribute values.

use regex::{Captures, Regex};

use crate::config::ConfigError;

/// Strips marker tokens from `attr="value"` pairs for a fixed set of
/// attribute names.
#[derive(Debug, Clone)]
pub struct MarkerStripper {
    attribute: Option<Regex>,
    markers: Vec<String>,
}

impl MarkerStripper {
    /// Builds a stripper for the given attribute names and markers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the attribute pattern
    /// cannot be compiled.
    pub fn new<A, M>(attributes: A, markers: M) -> Result<Self, ConfigError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        let names: Vec<String> = attributes
            .into_iter()
            .map(|a| regex::escape(a.as_ref()))
            .collect();
        let attribute = if names.is_empty() {
            None
        } else {
            // Name must follow whitespace, `:` (Vue bindings) or line start,
            // so `data-class="…"` is not an attribute match.
            let pattern = format!(r#"(?m)((?:^|[\s:])(?:{})=")([^"]*)""#, names.join("|"));
            let regex = Regex::new(&pattern)
                .map_err(|source| ConfigError::InvalidPattern { pattern, source })?;
            Some(regex)
        };

        Ok(Self {
            attribute,
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        })
    }

    /// Returns the configured markers, in application order.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Applies every marker in order.
    #[must_use]
    pub fn strip_all(&self, content: &str) -> String {
        let mut current = content.to_string();
        for marker in &self.markers {
            current = self.strip(&current, marker);
        }
        current
    }

    /// Removes `marker` from each matching attribute whose value contains it.
    ///
    /// One pass per attribute: text that spells the marker only after
    /// removal is left alone.
    #[must_use]
    pub fn strip(&self, content: &str, marker: &str) -> String {
        let Some(attribute) = &self.attribute else {
            return content.to_string();
        };
        attribute
            .replace_all(content, |caps: &Captures<'_>| {
                let value = &caps[2];
                if value.contains(marker) {
                    format!("{}{}\"", &caps[1], value.replace(marker, ""))
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripper(markers: &[&str]) -> MarkerStripper {
        MarkerStripper::new(["className", "class"], markers.iter().copied()).unwrap()
    }

    #[test]
    fn test_removes_token_keeping_surroundings() {
        let s = stripper(&["ai-badge"]);
        assert_eq!(
            s.strip(r#"<span class="foo ai-badge bar">"#, "ai-badge"),
            r#"<span class="foo  bar">"#
        );
    }

    #[test]
    fn test_class_name_attribute() {
        let s = stripper(&["ai-glow"]);
        assert_eq!(
            s.strip_all(r#"<div className="card ai-glow">x</div>"#),
            r#"<div className="card ">x</div>"#
        );
    }

    #[test]
    fn test_prefix_marker_leaves_suffix() {
        let s = stripper(&["sparkle-"]);
        assert_eq!(
            s.strip_all(r#"<i className="sparkle-icon" />"#),
            r#"<i className="icon" />"#
        );
    }

    #[test]
    fn test_ignores_other_attributes_and_text() {
        let s = stripper(&["ai-badge"]);
        let input = r#"<b id="ai-badge" title="ai-badge">ai-badge</b>"#;
        assert_eq!(s.strip_all(input), input);
    }

    #[test]
    fn test_single_pass_per_attribute() {
        let s = stripper(&["ai-badge"]);
        assert_eq!(
            s.strip_all(r#"<b class="ai-ai-badgebadge">"#),
            r#"<b class="ai-badge">"#
        );
    }

    #[test]
    fn test_markers_apply_in_order() {
        let s = stripper(&["ai-pulse", "ai-glow"]);
        assert_eq!(
            s.strip_all(r#"<p class="ai-pulse ai-glow x">"#),
            r#"<p class="  x">"#
        );
    }

    #[test]
    fn test_hyphenated_attribute_names_do_not_match() {
        let s = stripper(&["ai-badge"]);
        let input = r#"<b data-class="ai-badge" aria-className="ai-badge">"#;
        assert_eq!(s.strip_all(input), input);
    }

    #[test]
    fn test_bound_and_line_start_attributes() {
        let s = stripper(&["ai-badge"]);
        assert_eq!(
            s.strip_all("<b :class=\"x ai-badge\"\nclass=\"ai-badge\">"),
            "<b :class=\"x \"\nclass=\"\">"
        );
    }

    #[test]
    fn test_no_attributes_strips_nothing() {
        let s = MarkerStripper::new(Vec::<String>::new(), ["ai-badge"]).unwrap();
        let input = r#"<b class="ai-badge">"#;
        assert_eq!(s.strip_all(input), input);
    }
}
