//! Error taxonomy for ec2inv.
//!
//! Every failure belongs to one of three kinds (see [`ErrorKind`]). All of them
//! propagate to the command line and terminate the run without printing a
//! partial inventory.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable is not set.
    #[error("you must set environment variable '{0}'")]
    MissingEnv(&'static str),

    /// The local template could not be opened for upload.
    #[error("cannot read template {}: {reason}", path.display())]
    TemplateUnreadable { path: PathBuf, reason: String },

    /// A policy or option value could not be parsed.
    #[error("invalid value '{value}' for {option} (expected one of: {expected})")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A call into the cloud provider failed.
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("instance {instance} has no public IP address")]
    MissingAddress { instance: String },

    #[error("instance {instance} has no key name")]
    MissingKeyName { instance: String },

    #[error("instance {instance} uses key '{found}' but '{expected}' was already seen")]
    KeyConflict {
        instance: String,
        expected: String,
        found: String,
    },

    /// The group tag names a section the renderer reserves for itself.
    #[error("instance {instance} is tagged with reserved group name '{group}'")]
    ReservedGroupName { instance: String, group: String },

    #[error("no instances found for stack '{stack}'")]
    NoInstances { stack: String },

    #[error("malformed inventory at line {line}: {reason}")]
    MalformedInventory { line: usize, reason: String },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid configuration, reported before any output.
    Configuration,
    /// A cloud API call or local I/O failed.
    Transport,
    /// An instance attribute was missing or inconsistent.
    Data,
}

impl Error {
    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingEnv(_) | Error::TemplateUnreadable { .. } | Error::InvalidOption { .. } => {
                ErrorKind::Configuration
            }
            Error::Transport { .. } | Error::Io(_) => ErrorKind::Transport,
            Error::MissingAddress { .. }
            | Error::MissingKeyName { .. }
            | Error::KeyConflict { .. }
            | Error::ReservedGroupName { .. }
            | Error::NoInstances { .. }
            | Error::MalformedInventory { .. } => ErrorKind::Data,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Transport => "transport",
            ErrorKind::Data => "data",
        };
        f.write_str(name)
    }
}
