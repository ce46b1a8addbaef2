//! # Inventory Model
//!
//! The output of classification: named groups of addresses plus the one
//! credential key shared by every host.

/// A named bucket of instance addresses. The name may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryGroup {
    pub name: String,
    pub hosts: Vec<String>,
}

impl InventoryGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hosts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    groups: Vec<InventoryGroup>,
    key_name: String,
    skipped: Vec<String>,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `host` to the group `group`, creating the group after all
    /// existing ones if it is new.
    pub fn add_host(&mut self, group: &str, host: impl Into<String>) {
        let host = host.into();
        match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing.hosts.push(host),
            None => {
                let mut created = InventoryGroup::new(group);
                created.hosts.push(host);
                self.groups.push(created);
            }
        }
    }

    pub fn set_key_name(&mut self, key_name: impl Into<String>) {
        self.key_name = key_name.into();
    }

    pub fn record_skipped(&mut self, instance: impl Into<String>) {
        self.skipped.push(instance.into());
    }

    /// Groups in order of first appearance.
    pub fn groups(&self) -> &[InventoryGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&InventoryGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// The shared credential key name, empty when no instance reported one.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Instances left out of the inventory under the lenient policy.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn host_count(&self) -> usize {
        self.groups.iter().map(|g| g.hosts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
