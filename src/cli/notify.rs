//! Notify and report-error commands.

use std::path::PathBuf;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::machine::MachineName;
use crate::core::notify::{self, ChannelKind, Message};
use crate::core::secrets;
use crate::error::Result;

/// What goes after the machine name in the title.
pub enum Headline {
    Subject(String),
    ScriptError(String),
}

/// Compose a message and send it over `channel`.
pub fn send(
    settings: &Settings,
    channel: ChannelKind,
    headline: Headline,
    body: String,
    attach: Option<PathBuf>,
    machine: Option<String>,
) -> Result<()> {
    let machine = match machine {
        Some(name) => MachineName::new(name),
        None => MachineName::detect()?,
    };

    let message = match headline {
        Headline::Subject(subject) => Message::new(machine, subject, body),
        Headline::ScriptError(script) => Message::script_error(machine, script, body),
    }
    .with_attachment(attach);

    let store = secrets::default_backend(settings)?;
    notify::notify(channel, store.as_ref(), settings, &message)?;

    output::success(&format!("{} sent: {}", channel, message.title()));
    Ok(())
}
