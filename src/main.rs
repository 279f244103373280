//! Flare - personal automation notifications.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use flare::cli::output;
use flare::cli::{execute, Cli};
use flare::error::{ConfigError, Error, SecretsError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("FLARE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("flare=debug")
        } else {
            EnvFilter::new("flare=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Secrets(SecretsError::NotFound { .. }) => {
                Some("run: flare encode <secrets.json>")
            }
            Error::Secrets(SecretsError::Malformed(_)) => {
                Some("the secrets file must be base64 of a JSON object")
            }
            Error::Config(ConfigError::AlreadyExists(_)) => Some("pass --force to overwrite"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
