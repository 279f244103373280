//! Constants used throughout flare.
//!
//! Centralizes magic strings and configuration values.

/// Secrets file name relative to HOME (~/.911).
pub const SECRETS_FILE: &str = ".911";

/// Settings directory under the platform config dir.
pub const CONFIG_DIR: &str = "flare";

/// Settings file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable pointing at an explicit settings file.
pub const CONFIG_ENV: &str = "FLARE_CONFIG";

/// Environment variable overriding the secrets file path.
pub const SECRETS_FILE_ENV: &str = "FLARE_SECRETS_FILE";

/// Environment variable selecting the secret backend (`file` or `env`).
pub const SECRET_BACKEND_ENV: &str = "FLARE_SECRET_BACKEND";

/// Default prefix for the environment secret backend.
pub const DEFAULT_ENV_PREFIX: &str = "FLARE_";

/// Default SMTP relay.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Separator between the machine name and the subject.
pub const SUBJECT_SEPARATOR: &str = " - ";

/// Secret keys consumed by the notifier.
pub mod keys {
    pub const EMAIL_USER: &str = "EMAIL_USER";
    pub const EMAIL_APPPW: &str = "EMAIL_APPPW";
    pub const EMAIL_RECEIVER: &str = "EMAIL_RECEIVER";
    pub const NTFY_URL: &str = "NTFY_URL";
    pub const NTFY_TOKEN: &str = "NTFY_TOKEN";
}
