//! Removal of comments that mention a marker word.

use regex::{Captures, Regex};

use crate::config::{BlockCommentMode, ConfigError};

/// Strips `//` and `/* */` comments containing a whole-word marker.
#[derive(Debug, Clone)]
pub struct CommentStripper {
    line: Regex,
    block: BlockScan,
}

#[derive(Debug, Clone)]
enum BlockScan {
    /// `tokens` matches string literals, line comments and block comments;
    /// only block comments are candidates for removal.
    Paired { tokens: Regex, word: Regex },
    Greedy(Regex),
}

/// Leftmost-first alternation: a `/*` inside a string or a `//` comment is
/// consumed by the earlier alternatives and never opens a block comment.
const TOKENS: &str = concat!(
    r#""(?:\\.|[^"\\\n])*""#,
    r"|'(?:\\.|[^'\\\n])*'",
    r"|`(?:\\.|[^`\\])*`",
    r"|//[^\n]*",
    r"|(?s:/\*.*?\*/)",
);

impl CommentStripper {
    /// Builds a stripper for `marker` (case-sensitive, whole word).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if a derived pattern fails to
    /// compile.
    pub fn new(marker: &str, mode: BlockCommentMode) -> Result<Self, ConfigError> {
        let word = regex::escape(marker);
        let line = compile(&format!(r"//.*?\b{word}\b.*?\n"))?;
        let block = match mode {
            BlockCommentMode::Paired => BlockScan::Paired {
                tokens: compile(TOKENS)?,
                word: compile(&format!(r"\b{word}\b"))?,
            },
            BlockCommentMode::Greedy => {
                BlockScan::Greedy(compile(&format!(r"(?s)/\*.*?\b{word}\b.*?\*/"))?)
            }
        };
        Ok(Self { line, block })
    }

    /// Removes marked line comments, then marked block comments.
    ///
    /// A marked line comment is replaced from `//` through its newline by a
    /// single newline; a line comment at end of input without a trailing
    /// newline is kept.
    #[must_use]
    pub fn strip(&self, content: &str) -> String {
        let content = self.line.replace_all(content, "\n");
        match &self.block {
            BlockScan::Paired { tokens, word } => tokens
                .replace_all(&content, |caps: &Captures<'_>| {
                    let span = &caps[0];
                    let marked =
                        span.starts_with("/*") && word.is_match(&span[2..span.len() - 2]);
                    if marked {
                        String::new()
                    } else {
                        span.to_string()
                    }
                })
                .into_owned(),
            BlockScan::Greedy(regex) => regex.replace_all(&content, "").into_owned(),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paired() -> CommentStripper {
        CommentStripper::new("IA", BlockCommentMode::Paired).unwrap()
    }

    fn greedy() -> CommentStripper {
        CommentStripper::new("IA", BlockCommentMode::Greedy).unwrap()
    }

    #[test]
    fn test_line_comment_becomes_newline() {
        let input = "// note about IA feature\n// unrelated note\nconst a = 1;\n";
        assert_eq!(
            paired().strip(input),
            "\n// unrelated note\nconst a = 1;\n"
        );
    }

    #[test]
    fn test_trailing_line_comment_keeps_code() {
        let input = "const x = 1; // IA tweak\nconst y = 2;\n";
        assert_eq!(paired().strip(input), "const x = 1; \nconst y = 2;\n");
    }

    #[test]
    fn test_marker_must_be_whole_word() {
        let input = "// MEDIA query\n// via proxy\n";
        assert_eq!(paired().strip(input), input);
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let input = "// ia lowercase\n";
        assert_eq!(paired().strip(input), input);
    }

    #[test]
    fn test_line_comment_without_newline_is_kept() {
        let input = "x(); // IA";
        assert_eq!(paired().strip(input), input);
    }

    #[test]
    fn test_block_comment_removed() {
        let input = "a();\n/* Généré par IA\n * v2 */\nb();\n";
        assert_eq!(paired().strip(input), "a();\n\nb();\n");
    }

    #[test]
    fn test_paired_keeps_unmarked_neighbours() {
        let input = "/* header */\nkeep();\n/* IA note */\n";
        assert_eq!(paired().strip(input), "/* header */\nkeep();\n\n");
    }

    #[test]
    fn test_paired_ignores_comment_opener_in_string() {
        let input = "const pages = import.meta.glob('./pages/*.tsx');\nrender(pages);\n/* IA helper */\nexport {};\n";
        assert_eq!(
            paired().strip(input),
            "const pages = import.meta.glob('./pages/*.tsx');\nrender(pages);\n\nexport {};\n"
        );
    }

    #[test]
    fn test_paired_ignores_comment_opener_in_line_comment() {
        let input = "// matches src/*.ts\nkeep();\n/* IA note */\n";
        assert_eq!(paired().strip(input), "// matches src/*.ts\nkeep();\n\n");
    }

    #[test]
    fn test_paired_keeps_strings_mentioning_marker() {
        let input = "const a = \"/* IA */\";\nconst b = `x /* IA */`;\n";
        assert_eq!(paired().strip(input), input);
    }

    #[test]
    fn test_greedy_spans_earlier_comment() {
        let input = "/* header */\nkeep();\n/* IA note */\n";
        assert_eq!(greedy().strip(input), "\n");
    }

    #[test]
    fn test_unterminated_block_comment_is_kept() {
        let input = "/* IA never closed\nfoo();\n";
        assert_eq!(paired().strip(input), input);
        assert_eq!(greedy().strip(input), input);
    }
}
