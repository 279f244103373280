//! Error types for flare.
//!
//! Each concern gets its own enum; `Error` wraps them so call sites can use
//! `?` across module boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Secrets(#[from] SecretsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Interface(#[from] InterfaceError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Secret store failures.
#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("secret key cannot be empty")]
    EmptyKey,

    #[error("secrets file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read secrets file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed secrets data: {0}")]
    Malformed(String),

    #[error("secret not found: {0}")]
    MissingKey(String),

    #[error("secret {key} must be a {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("unable to determine home directory")]
    NoHome,
}

/// Settings file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("file already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

/// Notification dispatch failures.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("unable to determine hostname: {0}")]
    Hostname(std::io::Error),

    #[error("failed to read attachment {}: {source}", .path.display())]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid email address {address}: {reason}")]
    Address { address: String, reason: String },

    #[error("failed to build email: {0}")]
    Build(String),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Network interface detection failures.
#[derive(Error, Debug)]
pub enum InterfaceError {
    #[error("{0} not found on PATH")]
    ToolMissing(&'static str),

    #[error("{tool} failed: {reason}")]
    CommandFailed { tool: &'static str, reason: String },

    #[error("no default route found")]
    NoDefaultRoute,
}

pub type Result<T> = std::result::Result<T, Error>;
