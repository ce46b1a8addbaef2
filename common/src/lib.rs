//! # ec2inv common types
//!
//! Shared building blocks used by every other member of the workspace:
//!
//! * **[`instance`]**: the read-only view of a provisioned compute instance.
//! * **[`inventory`]**: inventory groups and the classification result.
//! * **[`config`]**: run configuration and the classification/render policies.
//! * **[`provider`]**: the outbound ports implemented by cloud adapters.
//! * **[`error`]**: the error taxonomy shared across crates.

pub mod config;
pub mod error;
pub mod instance;
pub mod inventory;
pub mod provider;

pub use error::{Error, ErrorKind, Result};
