//! # Instance Model
//!
//! A point-in-time view of one compute instance as reported by the provider.
//! Every attribute the provider may omit is an `Option`; the classifier decides
//! what a missing value means.

use crate::config::DuplicateTagPolicy;

/// A key/value label attached to an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub instance_id: Option<String>,
    pub public_ip: Option<String>,
    pub key_name: Option<String>,
    /// Tags in provider order. Keys are normally unique but this is not enforced.
    pub tags: Vec<Tag>,
}

impl Instance {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: Some(instance_id.into()),
            ..Self::default()
        }
    }

    pub fn with_public_ip(mut self, ip: impl Into<String>) -> Self {
        self.public_ip = Some(ip.into());
        self
    }

    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    /// Name used in diagnostics: the instance id, or a placeholder when the
    /// provider did not report one.
    pub fn label(&self) -> &str {
        self.instance_id.as_deref().unwrap_or("<unknown>")
    }

    /// Looks up the value of the tag named `key`.
    ///
    /// When several tags share the key, `policy` picks which one counts.
    pub fn tag_value(&self, key: &str, policy: DuplicateTagPolicy) -> Option<&str> {
        let mut matching = self.tags.iter().filter(|tag| tag.key == key);
        let tag = match policy {
            DuplicateTagPolicy::First => matching.next(),
            DuplicateTagPolicy::Last => matching.last(),
        };
        tag.map(|tag| tag.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_value_respects_policy() {
        let instance = Instance::new("i-1")
            .with_tag("Group", "web")
            .with_tag("Name", "front")
            .with_tag("Group", "db");

        assert_eq!(instance.tag_value("Group", DuplicateTagPolicy::Last), Some("db"));
        assert_eq!(instance.tag_value("Group", DuplicateTagPolicy::First), Some("web"));
        assert_eq!(instance.tag_value("Name", DuplicateTagPolicy::Last), Some("front"));
        assert_eq!(instance.tag_value("Missing", DuplicateTagPolicy::Last), None);
    }

    #[test]
    fn tag_keys_are_case_sensitive() {
        let instance = Instance::new("i-1").with_tag("group", "web");
        assert_eq!(instance.tag_value("Group", DuplicateTagPolicy::Last), None);
    }

    #[test]
    fn label_falls_back_when_id_missing() {
        assert_eq!(Instance::new("i-0abc").label(), "i-0abc");
        assert_eq!(Instance::default().label(), "<unknown>");
    }
}
