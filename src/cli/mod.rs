//! Command-line interface.

pub mod completions;
pub mod encode;
pub mod get;
pub mod interface;
pub mod notify;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::{ProbeKind, Settings};
use crate::core::notify::ChannelKind;
use crate::error::Result;

/// Flare - personal automation notifications.
#[derive(Parser)]
#[command(
    name = "flare",
    about = "Look up encoded secrets and send email or push notifications",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to <config dir>/flare/config.toml)
    #[arg(long, global = true, env = "FLARE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a secret value
    Get {
        /// Secret key (e.g., NTFY_URL)
        key: String,
    },

    /// Send a notification
    Notify {
        /// Channel: email or push
        channel: ChannelKind,
        /// Subject, prefixed with the machine name
        subject: String,
        /// Message body
        body: String,
        /// File to attach (for push, it replaces the body)
        #[arg(short, long)]
        attach: Option<PathBuf>,
        /// Machine name to use instead of the hostname
        #[arg(long, env = "FLARE_MACHINE")]
        machine: Option<String>,
    },

    /// Report a failed script
    ReportError {
        /// Name of the script that failed
        script: String,
        /// Error details
        body: String,
        /// Channel: email or push
        #[arg(short, long, default_value = "email")]
        channel: ChannelKind,
        /// File to attach (for push, it replaces the body)
        #[arg(short, long)]
        attach: Option<PathBuf>,
        /// Machine name to use instead of the hostname
        #[arg(long, env = "FLARE_MACHINE")]
        machine: Option<String>,
    },

    /// Print the active network interface
    Interface {
        /// Probe: auto, route or nmcli
        #[arg(short, long)]
        probe: Option<ProbeKind>,
    },

    /// Encode a plaintext JSON object into the secrets file
    Encode {
        /// JSON file to encode
        input: PathBuf,
        /// Destination (defaults to the configured secrets file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
        /// Print the encoded blob instead of writing it
        #[arg(long, conflicts_with_all = ["output", "force"])]
        print: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Load settings from an explicit path, or the default location.
fn load_settings(config: Option<PathBuf>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load_from(&path),
        None => Settings::load(),
    }
}

/// Execute a command.
pub fn execute(command: Command, config: Option<PathBuf>) -> Result<()> {
    use Command::*;

    match command {
        Get { key } => get::execute(&load_settings(config)?, &key),
        Notify {
            channel,
            subject,
            body,
            attach,
            machine,
        } => notify::send(
            &load_settings(config)?,
            channel,
            notify::Headline::Subject(subject),
            body,
            attach,
            machine,
        ),
        ReportError {
            script,
            body,
            channel,
            attach,
            machine,
        } => notify::send(
            &load_settings(config)?,
            channel,
            notify::Headline::ScriptError(script),
            body,
            attach,
            machine,
        ),
        Interface { probe } => interface::execute(&load_settings(config)?, probe),
        Encode {
            input,
            output,
            force,
            print,
        } => encode::execute(&load_settings(config)?, &input, output, force, print),
        Completions { shell } => completions::execute(shell),
    }
}
