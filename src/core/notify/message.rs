//! Notification message composition.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::core::constants::SUBJECT_SEPARATOR;
use crate::core::machine::MachineName;
use crate::error::{NotifyError, Result};

/// What the title says after the machine name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// Caller-supplied subject text
    Plain(String),
    /// A script failed; the title names the script
    ScriptError { script: String },
}

/// A single outbound notification. Built per call, dropped after dispatch.
#[derive(Debug, Clone)]
pub struct Message {
    machine: MachineName,
    subject: Subject,
    body: String,
    attachment: Option<PathBuf>,
}

impl Message {
    pub fn new(machine: MachineName, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            machine,
            subject: Subject::Plain(subject.into()),
            body: body.into(),
            attachment: None,
        }
    }

    /// Message reporting that `script` failed.
    pub fn script_error(
        machine: MachineName,
        script: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            machine,
            subject: Subject::ScriptError {
                script: script.into(),
            },
            body: body.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Option<PathBuf>) -> Self {
        self.attachment = attachment;
        self
    }

    /// Composed title: `BOX - Disk Full` or `BOX - Error - backup.sh`.
    pub fn title(&self) -> String {
        match &self.subject {
            Subject::Plain(text) => format!("{}{}{}", self.machine, SUBJECT_SEPARATOR, text),
            Subject::ScriptError { script } => format!(
                "{}{}Error{}{}",
                self.machine, SUBJECT_SEPARATOR, SUBJECT_SEPARATOR, script
            ),
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn attachment(&self) -> Option<&Path> {
        self.attachment.as_deref()
    }

    /// Push payload: the attachment bytes if there is one, the body otherwise.
    pub fn payload(&self) -> Result<Payload> {
        match &self.attachment {
            Some(path) => Ok(Payload::Binary(read_attachment(path)?)),
            None => Ok(Payload::Text(self.body.clone())),
        }
    }
}

/// Push request body. Never carries both text and file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Binary(Vec<u8>),
}

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }
}

/// Read an attachment file in full.
pub(crate) fn read_attachment(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|source| NotifyError::Attachment {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), len = bytes.len(), "read attachment");
    Ok(bytes)
}
