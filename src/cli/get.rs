//! Get command.

use serde_json::Value;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::secrets;
use crate::error::Result;

/// Print a secret. Strings print raw; anything else prints as JSON.
pub fn execute(settings: &Settings, key: &str) -> Result<()> {
    let store = secrets::default_backend(settings)?;
    match store.get(key)? {
        Value::String(s) => output::data(&s),
        other => output::data(&other.to_string()),
    }
    Ok(())
}
