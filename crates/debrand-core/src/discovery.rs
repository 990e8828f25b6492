//! Candidate file discovery.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Exclude matcher built from glob patterns.
///
/// A path is excluded when a pattern matches it as a glob, or when the
/// pattern with `**` removed occurs as a substring (so `**/node_modules/**`
/// also catches `src/node_modules/x.js`).
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<String>,
    globs: Vec<glob::Pattern>,
}

impl ExcludeSet {
    /// Creates a matcher. Patterns that are not valid globs are still used
    /// for substring matching.
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let globs = patterns
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(g) => Some(g),
                Err(e) => {
                    debug!("Exclude pattern {p:?} is not a glob ({e}); substring only");
                    None
                }
            })
            .collect();
        Self { patterns, globs }
    }

    /// Checks if a path should be excluded.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self.globs.iter().any(|g| g.matches(&path_str)) {
            return true;
        }

        self.patterns.iter().any(|pattern| {
            let normalized = pattern.replace("**", "");
            !normalized.is_empty() && path_str.contains(&normalized)
        })
    }
}

/// Finds every file under `root` whose extension is in `extensions`.
///
/// Extensions are given without the leading dot and matched
/// case-sensitively. The result is sorted and free of duplicates. A missing
/// root yields no files.
#[must_use]
pub fn discover_files(root: &Path, extensions: &[String], exclude: &ExcludeSet) -> Vec<PathBuf> {
    if !root.exists() {
        warn!("Root {} does not exist; nothing to scan", root.display());
        return Vec::new();
    }

    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let mut files = Vec::new();

    for ext in extensions {
        let ext = ext.trim_start_matches('.');
        let pattern = format!("{escaped_root}/**/*.{}", glob::Pattern::escape(ext));

        let entries = match glob::glob(&pattern) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping extension {ext:?}: {e}");
                continue;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Cannot read {}: {}", e.path().display(), e.error());
                    continue;
                }
            };

            if !path.is_file() {
                continue;
            }

            if exclude.is_excluded(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }
    }

    files.sort();
    files.dedup();
    files
}
