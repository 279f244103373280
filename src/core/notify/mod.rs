//! Notification dispatch.
//!
//! A `Message` is composed once and handed to a `Channel`. Callers pick the
//! channel explicitly through `ChannelKind`; email and push are never sent
//! implicitly together.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::core::config::Settings;
use crate::core::secrets::SecretStore;
use crate::error::Result;

mod email;
mod message;
mod push;

pub use email::{build_email, Email};
pub use message::{Message, Payload, Subject};
pub use push::{build_request, Push};

/// Outbound notification transport.
pub trait Channel {
    /// Short channel name for logs.
    fn name(&self) -> &'static str;

    /// Fetch credentials from `secrets` and deliver `message`.
    ///
    /// # Errors
    ///
    /// Secret lookup, attachment, and transport failures all propagate.
    fn send(&self, secrets: &dyn SecretStore, message: &Message) -> Result<()>;
}

/// Which channel to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Push,
}

impl FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "mail" => Ok(Self::Email),
            "push" | "ntfy" => Ok(Self::Push),
            other => Err(format!("unknown channel '{}' (expected email or push)", other)),
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Push => f.write_str("push"),
        }
    }
}

/// Build the channel for `kind` from settings.
pub fn channel(kind: ChannelKind, settings: &Settings) -> Result<Box<dyn Channel>> {
    let channel: Box<dyn Channel> = match kind {
        ChannelKind::Email => Box::new(Email::from_settings(&settings.email)),
        ChannelKind::Push => Box::new(Push::new()?),
    };
    Ok(channel)
}

/// Send `message` over the chosen channel.
pub fn notify(
    kind: ChannelKind,
    secrets: &dyn SecretStore,
    settings: &Settings,
    message: &Message,
) -> Result<()> {
    let channel = channel(kind, settings)?;
    debug!(
        channel = channel.name(),
        backend = secrets.name(),
        attachment = message.attachment().is_some(),
        script_error = matches!(message.subject(), Subject::ScriptError { .. }),
        "dispatching notification"
    );
    channel.send(secrets, message)
}
