//! # ec2inv core
//!
//! The part of ec2inv that does not talk to the outside world:
//!
//! * [`classifier`] groups described instances by a tag value.
//! * [`renderer`] turns a classification into an Ansible inventory.
//! * [`parser`] reads a rendered inventory back.
//! * [`inventory`] and [`provisioning`] are the application services that wire
//!   the provider ports to the pure steps above.

pub mod classifier;
pub mod inventory;
pub mod parser;
pub mod provisioning;
pub mod renderer;
