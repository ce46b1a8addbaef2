//! Run configuration and the policies that steer classification and rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DEFAULT_SSH_USER: &str = "ec2-user";
pub const DEFAULT_KEY_DIR: &str = "~/.ssh";

/// Environment variable holding the bucket that receives the template.
pub const BUCKET_ENV: &str = "S3_BUCKET_NAME";
/// Environment variable holding the object key the template is stored under.
pub const OBJECT_KEY_ENV: &str = "AWS_ACCESS_KEY";

pub struct Config {
    /// Quiet level.
    ///
    /// `1` hides section headers, `2` also hides informational logs.
    pub quiet: u8,
}

/// What to do with an instance that lacks a public address or key name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Abort the whole run.
    #[default]
    Fail,
    /// Warn and leave the instance out (address) or ignore it (key name).
    Skip,
}

/// How to settle instances that disagree on their key name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyConflictPolicy {
    #[default]
    Last,
    First,
    /// Any disagreement is an error.
    Strict,
}

/// Which tag wins when an instance carries the group tag key more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateTagPolicy {
    #[default]
    Last,
    First,
}

impl FromStr for MissingFieldPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            _ => Err(invalid("missing field policy", s, "fail, skip")),
        }
    }
}

impl FromStr for KeyConflictPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "first" => Ok(Self::First),
            "strict" => Ok(Self::Strict),
            _ => Err(invalid("key conflict policy", s, "last, first, strict")),
        }
    }
}

impl FromStr for DuplicateTagPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "first" => Ok(Self::First),
            _ => Err(invalid("duplicate tag policy", s, "last, first")),
        }
    }
}

impl fmt::Display for MissingFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
        })
    }
}

impl fmt::Display for KeyConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Last => "last",
            Self::First => "first",
            Self::Strict => "strict",
        })
    }
}

impl fmt::Display for DuplicateTagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Last => "last",
            Self::First => "first",
        })
    }
}

fn invalid(option: &'static str, value: &str, expected: &'static str) -> Error {
    Error::InvalidOption {
        option,
        value: value.to_string(),
        expected,
    }
}

/// Inputs of the classifier besides the instances themselves.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Tag key whose value names the inventory group.
    pub group_tag_key: String,
    pub missing_fields: MissingFieldPolicy,
    pub key_conflict: KeyConflictPolicy,
    pub duplicate_tags: DuplicateTagPolicy,
    /// Treat an empty instance set as an error instead of an empty inventory.
    pub require_instances: bool,
}

impl ClassifyOptions {
    pub fn new(group_tag_key: impl Into<String>) -> Self {
        Self {
            group_tag_key: group_tag_key.into(),
            missing_fields: MissingFieldPolicy::default(),
            key_conflict: KeyConflictPolicy::default(),
            duplicate_tags: DuplicateTagPolicy::default(),
            require_instances: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub ssh_user: String,
    /// Directory prefix of the private key file, without trailing slash.
    pub key_dir: String,
    /// Render groups sorted by name instead of first appearance.
    pub sort_groups: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ssh_user: DEFAULT_SSH_USER.to_string(),
            key_dir: DEFAULT_KEY_DIR.to_string(),
            sort_groups: false,
        }
    }
}

/// Where the template is uploaded before stack creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub bucket: String,
    pub object_key: String,
}

impl UploadConfig {
    /// Reads [`BUCKET_ENV`] and [`OBJECT_KEY_ENV`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup(BUCKET_ENV).ok_or(Error::MissingEnv(BUCKET_ENV))?;
        let object_key = lookup(OBJECT_KEY_ENV).ok_or(Error::MissingEnv(OBJECT_KEY_ENV))?;
        Ok(Self { bucket, object_key })
    }
}
