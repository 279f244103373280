//! Push channel (ntfy-style HTTP POST).
//!
//! The request carries `Authorization: Bearer <token>` and a `Title` header.
//! The body is the message text, or the raw attachment bytes when an
//! attachment is given.

use reqwest::blocking::{Client, Request};
use tracing::{debug, info, trace, warn};

use super::message::Message;
use super::Channel;
use crate::core::constants::keys;
use crate::core::secrets::SecretStore;
use crate::error::{NotifyError, Result};

/// Title header understood by ntfy.
const TITLE_HEADER: &str = "Title";

/// HTTP push notifier.
pub struct Push {
    client: Client,
}

impl Push {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build().map_err(NotifyError::Http)?;
        Ok(Self { client })
    }
}

impl Channel for Push {
    fn name(&self) -> &'static str {
        "push"
    }

    fn send(&self, secrets: &dyn SecretStore, message: &Message) -> Result<()> {
        let url = secrets.get_str(keys::NTFY_URL)?;
        let token = secrets.get_str(keys::NTFY_TOKEN)?;

        let request = build_request(&self.client, &url, &token, message)?;
        debug!(url = %request.url(), "posting push notification");

        let response = self.client.execute(request).map_err(NotifyError::Http)?;
        let status = response.status();
        if status.is_success() {
            info!(status = %status, title = %message.title(), "push notification sent");
        } else {
            warn!(status = %status, "push service returned non-success status");
        }

        Ok(())
    }
}

/// Build the POST request without sending it.
pub fn build_request(client: &Client, url: &str, token: &str, message: &Message) -> Result<Request> {
    let payload = message.payload()?;
    trace!(len = payload.as_bytes().len(), "push payload");

    client
        .post(url)
        .bearer_auth(token)
        .header(TITLE_HEADER, message.title())
        .body(payload.into_bytes())
        .build()
        .map_err(|e| NotifyError::Http(e).into())
}
