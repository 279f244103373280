//! Email channel.
//!
//! Sends one message over authenticated SMTP to the single configured
//! recipient. Credentials come from the secret store on every send.

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use tracing::{debug, info};

use super::message::{read_attachment, Message};
use super::Channel;
use crate::core::config::EmailSettings;
use crate::core::constants::keys;
use crate::core::secrets::SecretStore;
use crate::error::{NotifyError, Result};

/// SMTP relay settings.
pub struct Email {
    host: String,
    port: Option<u16>,
    starttls: bool,
}

impl Email {
    pub fn from_settings(settings: &EmailSettings) -> Self {
        Self {
            host: settings.smtp_host.clone(),
            port: settings.smtp_port,
            starttls: settings.starttls,
        }
    }

    fn transport(&self, user: &str, password: &str) -> Result<SmtpTransport> {
        let builder = if self.starttls {
            SmtpTransport::starttls_relay(&self.host)
        } else {
            SmtpTransport::relay(&self.host)
        }
        .map_err(NotifyError::Smtp)?;

        let builder = match self.port {
            Some(port) => builder.port(port),
            None => builder,
        };

        Ok(builder
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build())
    }
}

impl Channel for Email {
    fn name(&self) -> &'static str {
        "email"
    }

    fn send(&self, secrets: &dyn SecretStore, message: &Message) -> Result<()> {
        let user = secrets.get_str(keys::EMAIL_USER)?;
        let password = secrets.get_str(keys::EMAIL_APPPW)?;
        let receiver = secrets.get_str(keys::EMAIL_RECEIVER)?;

        let email = build_email(&user, &receiver, message)?;
        debug!(host = %self.host, port = ?self.port, "connecting to smtp relay");

        let mailer = self.transport(&user, &password)?;
        mailer.send(&email).map_err(NotifyError::Smtp)?;

        info!(subject = %message.title(), "email sent");
        Ok(())
    }
}

/// Build the outgoing email.
///
/// Plain text when there is no attachment; multipart/mixed with the file
/// attached under its own name otherwise.
pub fn build_email(from: &str, to: &str, message: &Message) -> Result<lettre::Message> {
    let builder = lettre::Message::builder()
        .from(parse_mailbox(from)?)
        .to(parse_mailbox(to)?)
        .subject(message.title());

    let email = match message.attachment() {
        None => builder
            .header(ContentType::TEXT_PLAIN)
            .body(message.body().to_string()),
        Some(path) => {
            let bytes = read_attachment(path)?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());
            let content_type = ContentType::parse("application/octet-stream")
                .map_err(|e| NotifyError::Build(e.to_string()))?;

            builder.multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(message.body().to_string()))
                    .singlepart(Attachment::new(filename).body(bytes, content_type)),
            )
        }
    };

    email.map_err(|e| NotifyError::Build(e.to_string()).into())
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address.trim().parse::<Mailbox>().map_err(|e| {
        NotifyError::Address {
            address: address.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
