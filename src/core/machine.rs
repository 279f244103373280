//! Machine identity used to prefix notification titles.

use std::fmt;

use tracing::debug;

use crate::error::{NotifyError, Result};

/// Upper-cased machine name, e.g. `RASPBERRYPI`.
///
/// Resolved once at the edge and passed into the notifier so tests can use a
/// fixed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineName(String);

impl MachineName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_uppercase())
    }

    /// Hostname of the running machine.
    pub fn detect() -> Result<Self> {
        let host = whoami::fallible::hostname().map_err(NotifyError::Hostname)?;
        debug!(host = %host, "resolved hostname");
        Ok(Self::new(host))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MachineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
