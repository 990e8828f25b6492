//! Blank-line normalization.

/// Collapses every run of three or more `\n` into exactly two.
#[must_use]
pub fn collapse_blank_lines(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut run = 0usize;

    for ch in content.chars() {
        if ch == '\n' {
            run += 1;
            if run > 2 {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(ch);
    }

    out
}
