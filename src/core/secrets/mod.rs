//! Secret lookup.
//!
//! Secrets are resolved by key through the `SecretStore` trait. Two backends
//! exist: the base64-armored JSON file in the home directory, and process
//! environment variables. Both read fresh on every call; nothing is cached.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file
//! 3. Wire it into `default_backend`

use serde_json::Value;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::config::{SecretBackend, Settings};
use crate::error::{Result, SecretsError};

mod env;
mod file;

pub use env::Environment;
pub use file::{decode_record, encode_json, encode_record, EncodedFile};

/// Key-value secret source.
pub trait SecretStore {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Look up the value bound to `key`.
    ///
    /// # Errors
    ///
    /// - `SecretsError::EmptyKey` if `key` is empty
    /// - `SecretsError::NotFound` if the backing source is absent
    /// - `SecretsError::Malformed` if the source cannot be decoded
    /// - `SecretsError::MissingKey` if `key` is not present
    fn get(&self, key: &str) -> Result<Value>;

    /// Look up a value that must be a JSON string.
    fn get_str(&self, key: &str) -> Result<Zeroizing<String>> {
        match self.get(key)? {
            Value::String(s) => Ok(Zeroizing::new(s)),
            _ => Err(SecretsError::WrongType {
                key: key.to_string(),
                expected: "string",
            }
            .into()),
        }
    }
}

/// Build the store selected by settings (or `FLARE_SECRET_BACKEND`).
pub fn default_backend(settings: &Settings) -> Result<Box<dyn SecretStore>> {
    let store: Box<dyn SecretStore> = match settings.secret_backend()? {
        SecretBackend::File => {
            let store = EncodedFile::new(settings.secrets_path()?);
            debug!(path = %store.path().display(), "using encoded file backend");
            Box::new(store)
        }
        SecretBackend::Env => {
            info!(prefix = %settings.secrets.env_prefix, "using environment backend");
            Box::new(Environment::new(settings.secrets.env_prefix.clone()))
        }
    };
    Ok(store)
}

/// Reject empty keys before touching any backend.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(SecretsError::EmptyKey.into());
    }
    Ok(())
}
