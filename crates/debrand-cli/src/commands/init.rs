//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# debrand configuration

# Built-in rule set: "french-ui" (default), "minimal" or "none"
preset = "french-ui"

# Plain-text report written after each run
report = "DEBRAND_REPORT.txt"

# Remove runs of blank lines left behind by deletions
collapse_blank_lines = true

# Attributes whose quoted values are searched for class markers
attributes = ["className", "class"]

# Replaces the preset's class markers when set
# markers = ["ai-badge", "ai-glow", "sparkle-"]

[scan]
root = "src"
extensions = ["tsx", "ts", "jsx", "js", "css", "scss"]
exclude = [
    "**/node_modules/**",
    "**/__pycache__/**",
]

[comments]
enabled = true
# Whole word, case-sensitive
marker = "IA"
# "paired" only removes the comment that contains the marker.
# "greedy" can span several comments and the code between them.
block = "paired"

# Extra rules run after the preset, top to bottom.
# Patterns are case-insensitive regular expressions; replacements are literal.
# [[rules]]
# pattern = "Propulsé par l'IA"
# replacement = "Automatisé"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("debrand.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created debrand.toml");
    println!("\nNext steps:");
    println!("  1. Edit debrand.toml to choose a preset and add rules");
    println!("  2. Preview: debrand run --dry-run");
    println!("  3. Run: debrand run");

    Ok(())
}
