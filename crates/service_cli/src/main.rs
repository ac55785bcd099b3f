//! figinterp - Command Line Lookups on Published Figure Tables
//!
//! This is the operational entry point for the interpolation workspace.
//!
//! # Commands
//!
//! - `figinterp list --data <file>` - List figures with their kind and axis ranges
//! - `figinterp lookup --data <file> --figure F01_02_1 --x 0.5 --y 5` - Evaluate a figure
//! - `figinterp check --data <file>` - Load and validate every figure
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires `adapter_tables`
//! (loading) and `interp_core` (interpolation) behind a command-line
//! interface.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs, CliConfig, DEFAULT_CONFIG_FILE};
pub use error::{CliError, Result};

/// Interpolate published figure tables
#[derive(Parser)]
#[command(name = "figinterp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: figinterp.toml, if present]
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args)]
struct SourceArgs {
    /// Table source (.js, .json or .toml)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List figures in a table source
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Evaluate a figure at a point
    Lookup {
        #[command(flatten)]
        source: SourceArgs,

        /// Figure id, e.g. F01_02_1
        #[arg(long)]
        figure: String,

        /// Coordinate on the first axis
        #[arg(short, long, allow_hyphen_values = true)]
        x: String,

        /// Coordinate on the second axis (surfaces only)
        #[arg(short, long, allow_hyphen_values = true)]
        y: Option<String>,

        /// Reject queries outside the tabulated range
        #[arg(long)]
        strict: bool,
    },

    /// Load and validate a table source
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (source, strict) = match &self.command {
            Commands::List { source } | Commands::Check { source } => (source, false),
            Commands::Lookup { source, strict, .. } => (source, *strict),
        };

        CliArgs {
            config_file: self.config.clone(),
            data: source.data.clone(),
            verbose: self.verbose,
            strict,
            format: source.format.clone(),
        }
    }
}

fn init_tracing(config: &CliConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(&config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(
        config_file = %cli.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG_FILE)).display(),
        extrapolation = %config.extrapolation,
        format = %config.format,
        "Configuration loaded"
    );

    match cli.command {
        Commands::List { .. } => commands::list::run(&config).await,
        Commands::Lookup { figure, x, y, .. } => {
            commands::lookup::run(&config, &figure, &x, y.as_deref()).await
        }
        Commands::Check { .. } => commands::check::run(&config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use interp_core::math::interpolators::Extrapolation;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lookup_args() {
        let cli = Cli::try_parse_from([
            "figinterp", "lookup", "--data", "f.js", "--figure", "F01_02_1", "--x", "-0.5",
            "--y", "5", "--strict", "--format", "json",
        ])
        .unwrap();

        let args = cli.config_args();
        assert_eq!(args.data, Some(PathBuf::from("f.js")));
        assert!(args.strict);
        assert_eq!(args.format.as_deref(), Some("json"));

        match cli.command {
            Commands::Lookup { x, y, .. } => {
                assert_eq!(x, "-0.5");
                assert_eq!(y.as_deref(), Some("5"));
            }
            _ => panic!("Expected lookup command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["figinterp", "check", "-v", "--config", "alt.toml"]).unwrap();
        let args = cli.config_args();
        assert!(args.verbose);
        assert!(!args.strict);
        assert_eq!(args.config_file, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_strict_flag_reaches_config() {
        let cli = Cli::try_parse_from([
            "figinterp", "lookup", "--data", "f.js", "--figure", "F03_01_2", "--x", "1", "--strict",
        ])
        .unwrap();
        let mut config = CliConfig::default();
        config.merge_with_cli(&cli.config_args()).unwrap();
        assert_eq!(config.extrapolation, Extrapolation::Forbid);
    }
}
