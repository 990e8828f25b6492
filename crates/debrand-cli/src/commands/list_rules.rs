//! List rules command implementation.

use anyhow::{Context, Result};
use debrand_rules::Preset;

use crate::config_resolver::ConfigSource;

/// Runs the list-rules command.
///
/// Lists the rules of `preset`, else of the configured preset, followed by
/// any extra rules from the configuration.
pub fn run(preset: Option<&str>, source: &ConfigSource) -> Result<()> {
    let config = source
        .load()
        .with_context(|| format!("Failed to load config: {source}"))?;
    let preset = Preset::resolve(preset.or(config.preset.as_deref()))?;

    println!("Presets:\n");
    for p in Preset::ALL {
        let marker = if p == preset { "*" } else { " " };
        println!("{marker} {:<12} {}", p.name(), p.description());
    }

    println!("\nRules ({preset}):\n");
    println!("{:<4} {:<45} Replacement", "#", "Pattern");
    println!("{}", "-".repeat(80));

    let rules = preset.rules().into_iter().chain(config.rules.iter().cloned());
    for (i, rule) in rules.enumerate() {
        let replacement = if rule.replacement.is_empty() {
            "(removed)".to_string()
        } else {
            format!("{:?}", rule.replacement)
        };
        println!("{:<4} {:<45} {}", i + 1, rule.pattern, replacement);
    }

    let markers = config.markers.unwrap_or_else(|| preset.markers());
    println!("\nClass markers (stripped from {}):", config.attributes.join(", "));
    if markers.is_empty() {
        println!("  (none)");
    } else {
        println!("  {}", markers.join(" "));
    }

    if config.comments.enabled {
        println!(
            "\nComments mentioning `{}` are removed ({:?} block scan).",
            config.comments.marker, config.comments.block
        );
    }

    println!("\nSelect a preset in debrand.toml, e.g.:");
    println!("  preset = \"minimal\"");

    Ok(())
}
