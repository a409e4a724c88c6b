//! opconf - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `opconf check <JSON\|->` | Validate operation options, print all fields with defaults |
//! | `opconf resolve <JSON\|->` | Merge operation options with the client configuration |
//! | `opconf init [PATH]` | Write the default client configuration |
//! | `opconf show-config` | Print the loaded client configuration |

use anyhow::Context;
use clap::{Parser, Subcommand};
use opconf::UnknownOptionPolicy;
use opconf::commands;
use opconf::infrastructure::config::LoggingConfig;
use opconf::infrastructure::constants::DEFAULT_CONFIG_FILENAME;
use opconf::infrastructure::logging::init_logging;
use std::path::PathBuf;

/// Command line interface for opconf
#[derive(Parser, Debug)]
#[command(name = "opconf")]
#[command(about = "Validate HTTP operation options and resolve them against client defaults")]
#[command(version)]
pub struct Cli {
    /// Log level written to stderr
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate operation options and print every option with its effective value
    Check {
        /// Options as a JSON object, or `-` to read stdin
        options: String,

        /// Drop unknown option names instead of failing
        #[arg(long)]
        ignore_unknown: bool,
    },

    /// Merge operation options with the client configuration
    Resolve {
        /// Options as a JSON object, or `-` to read stdin
        options: String,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Drop unknown option names instead of failing
        #[arg(long)]
        ignore_unknown: bool,

        /// Override the client's request/response logging for this call
        #[arg(long)]
        http_logger: Option<bool>,
    },

    /// Write the default client configuration file
    Init {
        /// Destination path
        #[arg(default_value = DEFAULT_CONFIG_FILENAME)]
        path: PathBuf,
    },

    /// Print the loaded client configuration as TOML
    ShowConfig {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn policy(ignore_unknown: bool) -> UnknownOptionPolicy {
    if ignore_unknown {
        UnknownOptionPolicy::Ignore
    } else {
        UnknownOptionPolicy::Reject
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        json_format: cli.json_logs,
        ..Default::default()
    })
    .context("Failed to initialize logging")?;

    match cli.command {
        Command::Check {
            options,
            ignore_unknown,
        } => {
            let input = commands::read_options_input(&options)?;
            let record = commands::check(&input, policy(ignore_unknown))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Resolve {
            options,
            config,
            ignore_unknown,
            http_logger,
        } => {
            let input = commands::read_options_input(&options)?;
            let settings = commands::resolve(
                &input,
                config.as_deref(),
                policy(ignore_unknown),
                http_logger,
            )?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::Init { path } => {
            commands::init(&path)?;
            println!("Wrote {}", path.display());
        }
        Command::ShowConfig { config } => {
            print!("{}", commands::show_config(config.as_deref())?);
        }
    }

    Ok(())
}
