//! # Inventory Renderer
//!
//! Produces the INI-style inventory Ansible reads:
//!
//! ```text
//! [web]
//! 1.2.3.4
//! []
//! 9.9.9.9
//! [all:vars]
//! ansible_ssh_user=ec2-user
//! ansible_ssh_private_key_file=~/.ssh/prod-key.pem
//! ```
//!
//! Group names and addresses are written verbatim. The classifier refuses the
//! group name `all:vars`, so the trailer is always the only vars section.

use std::fmt::Write as _;
use std::io;

use ec2inv_common::config::RenderOptions;
use ec2inv_common::inventory::{ClassificationResult, InventoryGroup};

pub const ALL_VARS_GROUP: &str = "all:vars";
pub const ALL_VARS_HEADER: &str = "[all:vars]";
pub const SSH_USER_VAR: &str = "ansible_ssh_user";
pub const PRIVATE_KEY_VAR: &str = "ansible_ssh_private_key_file";

/// Renders the whole inventory document.
pub fn render(result: &ClassificationResult, options: &RenderOptions) -> String {
    let mut groups: Vec<&InventoryGroup> = result.groups().iter().collect();
    if options.sort_groups {
        groups.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "[{}]", group.name);
        for host in &group.hosts {
            let _ = writeln!(out, "{host}");
        }
    }

    let _ = writeln!(out, "{ALL_VARS_HEADER}");
    let _ = writeln!(out, "{SSH_USER_VAR}={}", options.ssh_user);
    let _ = writeln!(
        out,
        "{PRIVATE_KEY_VAR}={}/{}.pem",
        options.key_dir.trim_end_matches('/'),
        result.key_name()
    );
    out
}

/// Renders the inventory and writes it to `writer` in one piece.
pub fn write_inventory<W: io::Write>(
    writer: &mut W,
    result: &ClassificationResult,
    options: &RenderOptions,
) -> io::Result<()> {
    writer.write_all(render(result, options).as_bytes())?;
    writer.flush()
}
