//! Reader for inventories produced by [`crate::renderer`].

use ec2inv_common::error::{Error, Result};
use ec2inv_common::inventory::InventoryGroup;

use crate::renderer::ALL_VARS_HEADER;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInventory {
    pub groups: Vec<InventoryGroup>,
    /// `[all:vars]` entries in document order.
    pub vars: Vec<(String, String)>,
}

impl ParsedInventory {
    pub fn group(&self, name: &str) -> Option<&InventoryGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

enum Section {
    None,
    Group,
    Vars,
}

/// Parses `[group]` blocks and the `[all:vars]` section. Blank lines are ignored.
pub fn parse(text: &str) -> Result<ParsedInventory> {
    let mut inventory = ParsedInventory::default();
    let mut section = Section::None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        if line == ALL_VARS_HEADER {
            section = Section::Vars;
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            inventory.groups.push(InventoryGroup::new(name));
            section = Section::Group;
            continue;
        }

        match section {
            Section::None => {
                return Err(Error::MalformedInventory {
                    line: idx + 1,
                    reason: format!("host '{line}' outside of any group"),
                });
            }
            Section::Group => {
                if let Some(group) = inventory.groups.last_mut() {
                    group.hosts.push(line.to_string());
                }
            }
            Section::Vars => {
                let (key, value) = line.split_once('=').ok_or_else(|| Error::MalformedInventory {
                    line: idx + 1,
                    reason: format!("expected key=value, got '{line}'"),
                })?;
                inventory.vars.push((key.to_string(), value.to_string()));
            }
        }
    }

    Ok(inventory)
}
