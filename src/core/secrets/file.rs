//! Encoded file backend.
//!
//! The file holds a single base64 blob of a JSON object. This is
//! obfuscation only; anyone who can read the file can read the secrets.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Value};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{validate_key, SecretStore};
use crate::error::{Result, SecretsError};

/// Secrets read from a base64-armored JSON file.
pub struct EncodedFile {
    path: PathBuf,
}

impl EncodedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole record.
    ///
    /// The outcome of the read itself decides between `NotFound` and
    /// `Unreadable`; there is no separate `exists()` check, so a file removed
    /// mid-call still reports `NotFound`.
    pub fn load(&self) -> Result<Map<String, Value>> {
        debug!(path = %self.path.display(), "reading secrets file");

        let contents = Zeroizing::new(fs::read_to_string(&self.path).map_err(|source| {
            match source.kind() {
                ErrorKind::NotFound => SecretsError::NotFound {
                    path: self.path.clone(),
                },
                _ => SecretsError::Unreadable {
                    path: self.path.clone(),
                    source,
                },
            }
        })?);

        decode_record(&contents)
    }
}

impl SecretStore for EncodedFile {
    fn name(&self) -> &'static str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Value> {
        validate_key(key)?;
        let mut record = self.load()?;
        record
            .remove(key)
            .ok_or_else(|| SecretsError::MissingKey(key.to_string()).into())
    }
}

/// Decode a base64 blob into a JSON object.
///
/// Whitespace anywhere in the blob is ignored.
pub fn decode_record(blob: &str) -> Result<Map<String, Value>> {
    let compact: Zeroizing<String> =
        Zeroizing::new(blob.chars().filter(|c| !c.is_whitespace()).collect());

    let bytes = Zeroizing::new(
        STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| SecretsError::Malformed(format!("invalid base64: {}", e)))?,
    );
    trace!(decoded_len = bytes.len(), "decoded secrets blob");

    let text = std::str::from_utf8(&bytes)
        .map_err(|e| SecretsError::Malformed(format!("invalid utf-8: {}", e)))?;

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(SecretsError::Malformed("expected a JSON object".to_string()).into()),
        Err(e) => Err(SecretsError::Malformed(format!("invalid json: {}", e)).into()),
    }
}

/// Encode a record into the on-disk blob format.
pub fn encode_record(record: &Map<String, Value>) -> String {
    let json = Zeroizing::new(Value::Object(record.clone()).to_string());
    STANDARD.encode(json.as_bytes())
}

/// Validate plaintext JSON and encode it.
///
/// # Errors
///
/// Returns `SecretsError::Malformed` if `json` is not a JSON object.
pub fn encode_json(json: &str) -> Result<String> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(encode_record(&map)),
        Ok(_) => Err(SecretsError::Malformed("expected a JSON object".to_string()).into()),
        Err(e) => Err(SecretsError::Malformed(format!("invalid json: {}", e)).into()),
    }
}
