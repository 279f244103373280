//! Environment variable backend.
//!
//! `get("NTFY_URL")` reads `<prefix>NTFY_URL`. Values are always strings;
//! a numeric app password must not turn into a JSON number.

use serde_json::Value;
use tracing::debug;

use super::{validate_key, SecretStore};
use crate::error::{Result, SecretsError};

/// Secrets read from process environment variables.
pub struct Environment {
    prefix: String,
}

impl Environment {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl SecretStore for Environment {
    fn name(&self) -> &'static str {
        "env"
    }

    fn get(&self, key: &str) -> Result<Value> {
        validate_key(key)?;
        let name = self.var_name(key);
        debug!(var = %name, "reading secret from environment");

        let raw = std::env::var(&name).map_err(|e| match e {
            std::env::VarError::NotPresent => SecretsError::MissingKey(key.to_string()),
            std::env::VarError::NotUnicode(_) => {
                SecretsError::Malformed(format!("{} is not valid unicode", name))
            }
        })?;

        Ok(Value::String(raw))
    }
}
