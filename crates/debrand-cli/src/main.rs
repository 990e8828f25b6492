//! debrand CLI tool.
//!
//! Usage:
//! ```bash
//! debrand run [OPTIONS]
//! debrand list-rules [--preset NAME]
//! debrand init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Removes AI branding markers (emoji, wording, class names, comments) from
/// UI source trees
#[derive(Parser)]
#[command(name = "debrand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DEBRAND_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the source tree and write the report
    Run {
        /// Directory to scan (default: `src`, or `scan.root` from config)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Report file path (default: `DEBRAND_REPORT.txt`)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Show what would change without writing source files
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exit with status 1 if any file failed to process
        #[arg(long)]
        fail_on_error: bool,
    },

    /// List presets and the rules of one preset
    ListRules {
        /// Preset to list (default: from config, else `french-ui`)
        #[arg(long)]
        preset: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for run results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Progress lines and a summary block.
    #[default]
    Text,
    /// The run summary as JSON, no progress lines.
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());

    match cli.command {
        Commands::Run {
            root,
            report,
            exclude,
            dry_run,
            format,
            fail_on_error,
        } => commands::run::run(
            &commands::run::RunOptions {
                root,
                report,
                exclude,
                dry_run,
                format,
                fail_on_error,
            },
            &source,
        )
        .map(ExitCode::from),
        Commands::ListRules { preset } => {
            commands::list_rules::run(preset.as_deref(), &source).map(|()| ExitCode::SUCCESS)
        }
        Commands::Init { force } => commands::init::run(force).map(|()| ExitCode::SUCCESS),
    }
}
