//! Encode command.
//!
//! Turns a plaintext JSON object into the base64 blob the file backend reads.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::secrets;
use crate::error::{ConfigError, Result};

/// Encode `input` and write it to `output` (or the configured secrets file).
pub fn execute(
    settings: &Settings,
    input: &Path,
    output: Option<PathBuf>,
    force: bool,
    print: bool,
) -> Result<()> {
    let json = zeroize::Zeroizing::new(fs::read_to_string(input)?);
    let blob = secrets::encode_json(&json)?;

    if print {
        output::data(&blob);
        return Ok(());
    }

    let dest = match output {
        Some(path) => path,
        None => settings.secrets_path()?,
    };

    if dest.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists(dest).into());
        }
        output::warn(&format!("overwriting {}", dest.display()));
    }

    debug!(path = %dest.display(), "writing secrets file");
    fs::write(&dest, format!("{}\n", blob))?;

    // Restrict permissions on the secrets file (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&dest, fs::Permissions::from_mode(0o600))?;
    }

    output::success("secrets encoded");
    output::kv("file:", dest.display());
    Ok(())
}
