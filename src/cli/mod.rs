//! Command-line interface for envguard
//!
//! Parses arguments with clap, sets up logging and dispatches to the
//! command implementations. Configuration is only loaded by the commands
//! that need it, so `check` entry points keep working with a broken config.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;

mod commands;
mod output;

pub use output::Output;

/// envguard - pre-commit hook registry and toolchain selection
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and export the hook registry
    #[command(subcommand)]
    Hooks(HooksCommands),
    /// Run a check implemented by envguard (used as a hook entry point)
    #[command(subcommand)]
    Check(CheckCommands),
    /// Show the selected compiler toolchain
    #[command(subcommand)]
    Toolchain(ToolchainCommands),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Hook registry subcommands
#[derive(Subcommand)]
pub enum HooksCommands {
    /// List registered hooks
    List,
    /// Show one hook in full
    Show {
        /// Hook id
        id: String,
    },
    /// Export the registry for a hook runner
    Export {
        /// Output format: pre-commit, json, yaml, toml
        #[arg(short, long, default_value = "pre-commit")]
        format: String,
    },
}

/// Built-in checks
#[derive(Subcommand)]
pub enum CheckCommands {
    /// Fail for every file given; the runner passes only binary files
    ForbidBinary {
        /// Files matched by the hook runner, taken verbatim even when they
        /// start with `-`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        files: Vec<String>,
    },
}

/// Toolchain subcommands
#[derive(Subcommand)]
pub enum ToolchainCommands {
    /// Show the toolchain selected for the host (or a given platform)
    Show {
        /// Platform to select for instead of the detected one
        #[arg(short, long)]
        platform: Option<crate::toolchain::Platform>,
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Print the toolchain as KEY=value environment lines
    Env {
        /// Platform to select for instead of the detected one
        #[arg(short, long)]
        platform: Option<crate::toolchain::Platform>,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current merged configuration
    Show {
        /// Output format: json, toml, yaml
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
    /// Validate configuration by building the registry and toolchain
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<ExitCode> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("Failed to change directory to {dir}"))?;
        }

        // Check entry points own their stderr
        if !matches!(self.command, Some(Commands::Check(_))) {
            setup_logging(self.verbose, self.quiet);
        }

        let output = Output::new(self.verbose > 0, self.quiet);
        let config = self.config.as_deref();

        match self.command {
            Some(Commands::Hooks(cmd)) => commands::hooks::execute(cmd, config, &output).await,
            Some(Commands::Check(cmd)) => commands::check::execute(cmd).await,
            Some(Commands::Toolchain(cmd)) => {
                commands::toolchain::execute(cmd, config, &output).await
            }
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, config, &output).await,
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Stdout carries exports, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
