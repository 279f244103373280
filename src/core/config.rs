//! Settings file management.
//!
//! Reads the optional `config.toml` that tunes where secrets come from, which
//! SMTP relay to use, and how the network interface is probed. A missing file
//! means defaults everywhere.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result, SecretsError};

/// User settings loaded from `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub secrets: SecretsSettings,
    pub email: EmailSettings,
    pub interface: InterfaceSettings,
}

/// `[secrets]` section
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecretsSettings {
    /// Which secret backend to read from
    pub backend: SecretBackend,
    /// Encoded secrets file. `~/` is expanded against HOME.
    pub path: Option<String>,
    /// Variable name prefix for the environment backend
    pub env_prefix: String,
}

impl Default for SecretsSettings {
    fn default() -> Self {
        Self {
            backend: SecretBackend::File,
            path: None,
            env_prefix: constants::DEFAULT_ENV_PREFIX.to_string(),
        }
    }
}

/// `[email]` section
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailSettings {
    pub smtp_host: String,
    /// Overrides the relay's default port
    pub smtp_port: Option<u16>,
    /// Use STARTTLS (usually port 587) instead of implicit TLS (465)
    pub starttls: bool,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            smtp_host: constants::DEFAULT_SMTP_HOST.to_string(),
            smtp_port: None,
            starttls: false,
        }
    }
}

/// `[interface]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterfaceSettings {
    pub probe: ProbeKind,
}

/// Where secrets are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretBackend {
    /// Base64-armored JSON file in the home directory
    #[default]
    File,
    /// Process environment variables
    Env,
}

impl FromStr for SecretBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "env" => Ok(Self::Env),
            other => Err(format!("unknown secret backend '{}' (expected file or env)", other)),
        }
    }
}

/// Strategy for finding the active network interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    /// Routing table first, nmcli as fallback
    #[default]
    Auto,
    /// Kernel routing table only
    Route,
    /// `nmcli device` only
    Nmcli,
}

impl FromStr for ProbeKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "route" => Ok(Self::Route),
            "nmcli" => Ok(Self::Nmcli),
            other => Err(format!(
                "unknown probe '{}' (expected auto, route or nmcli)",
                other
            )),
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Route => "route",
            Self::Nmcli => "nmcli",
        };
        f.write_str(name)
    }
}

impl Settings {
    /// Path to the settings file.
    ///
    /// `FLARE_CONFIG` wins; otherwise `<config_dir>/flare/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(constants::CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load settings, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        settings.validate()?;

        Ok(settings)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.email.smtp_host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "email.smtp_host",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if let Some(path) = &self.secrets.path {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "secrets.path",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Backend to use, honouring `FLARE_SECRET_BACKEND`.
    pub fn secret_backend(&self) -> Result<SecretBackend> {
        match std::env::var(constants::SECRET_BACKEND_ENV) {
            Ok(raw) => raw.parse::<SecretBackend>().map_err(|reason| {
                ConfigError::InvalidValue {
                    field: constants::SECRET_BACKEND_ENV,
                    reason,
                }
                .into()
            }),
            Err(_) => Ok(self.secrets.backend),
        }
    }

    /// Resolve the encoded secrets file.
    ///
    /// Precedence: `FLARE_SECRETS_FILE`, then `secrets.path`, then `~/.911`.
    pub fn secrets_path(&self) -> Result<PathBuf> {
        if let Some(explicit) = std::env::var_os(constants::SECRETS_FILE_ENV) {
            return Ok(PathBuf::from(explicit));
        }
        let home = dirs::home_dir().ok_or(SecretsError::NoHome);
        match &self.secrets.path {
            Some(path) => expand_home(path, home.ok().as_deref()),
            None => Ok(home?.join(constants::SECRETS_FILE)),
        }
    }
}

/// Expand a leading `~/` against `home`.
fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = home.ok_or(SecretsError::NoHome)?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}
