use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::error;

use launcher::config::{self as cfg, Config, ReadPolicy};

/// Launcher CLI
#[derive(Debug, Parser)]
#[command(
    name = launcher::PKG_NAME,
    version = launcher::PKG_VERSION,
    about = "Loads a YAML configuration file, generating a default one if none exists"
)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short = 'c', long = "config", default_value = cfg::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Set log level (e.g., trace, debug, info, warn, error). Overrides RUST_LOG.
    #[arg(long = "log-level")]
    log_level: Option<String>,

    /// Output format for the loaded configuration
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Fail on read errors other than a missing file instead of regenerating the default
    #[arg(long = "strict-read")]
    strict_read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.log_level.as_deref().and_then(launcher::parse_level) {
        Some(level) => launcher::init_tracing_with_level(level),
        None => launcher::init_tracing(),
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let policy = if args.strict_read {
        ReadPolicy::Strict
    } else {
        ReadPolicy::Lenient
    };

    let loaded = cfg::load_or_init_with(&args.config, policy)?;
    print!("{}", render(&loaded.config, args.format)?);
    Ok(())
}

fn render(config: &Config, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Yaml => Ok(cfg::to_yaml_string(config)?),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)
                .context("Failed to render configuration as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}
