//! # Instance Classifier
//!
//! Groups instances by the value of a designated tag and settles on the one
//! key name shared by all of them.
//!
//! Classification is a pure function of its input: the same instances in the
//! same order always yield the same groups in the same order.

use tracing::{debug, warn};

use ec2inv_common::config::{ClassifyOptions, KeyConflictPolicy, MissingFieldPolicy};
use ec2inv_common::error::{Error, Result};
use ec2inv_common::instance::Instance;
use ec2inv_common::inventory::ClassificationResult;

use crate::renderer::ALL_VARS_GROUP;

/// Classifies `instances` into inventory groups.
///
/// Instances without the group tag land in the group named `""`. Missing
/// addresses and key names, disagreeing key names and duplicate tags are
/// resolved by the policies in `options`. A group named `all:vars` would
/// collide with the inventory trailer and is always rejected.
pub fn classify(instances: &[Instance], options: &ClassifyOptions) -> Result<ClassificationResult> {
    let mut result = ClassificationResult::new();
    let mut key_name: Option<&str> = None;

    for instance in instances {
        let Some(address) = instance.public_ip.as_deref() else {
            match options.missing_fields {
                MissingFieldPolicy::Fail => {
                    return Err(Error::MissingAddress {
                        instance: instance.label().to_string(),
                    });
                }
                MissingFieldPolicy::Skip => {
                    warn!("Skipping instance {}: no public IP address", instance.label());
                    result.record_skipped(instance.label());
                    continue;
                }
            }
        };

        match instance.key_name.as_deref() {
            Some(found) => key_name = settle_key(key_name, found, instance, options.key_conflict)?,
            None => match options.missing_fields {
                MissingFieldPolicy::Fail => {
                    return Err(Error::MissingKeyName {
                        instance: instance.label().to_string(),
                    });
                }
                MissingFieldPolicy::Skip => {
                    warn!("Instance {} has no key name", instance.label());
                }
            },
        }

        let group = instance
            .tag_value(&options.group_tag_key, options.duplicate_tags)
            .unwrap_or_default();
        if group == ALL_VARS_GROUP {
            return Err(Error::ReservedGroupName {
                instance: instance.label().to_string(),
                group: group.to_string(),
            });
        }
        debug!("{} ({}) -> [{}]", instance.label(), address, group);
        result.add_host(group, address);
    }

    if let Some(key_name) = key_name {
        result.set_key_name(key_name);
    }
    Ok(result)
}

fn settle_key<'a>(
    current: Option<&'a str>,
    found: &'a str,
    instance: &Instance,
    policy: KeyConflictPolicy,
) -> Result<Option<&'a str>> {
    let Some(expected) = current else {
        return Ok(Some(found));
    };
    if expected == found {
        return Ok(current);
    }

    match policy {
        KeyConflictPolicy::Strict => Err(Error::KeyConflict {
            instance: instance.label().to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }),
        KeyConflictPolicy::Last => {
            warn!(
                "Instance {} uses key '{}' instead of '{}'; keeping '{}'",
                instance.label(),
                found,
                expected,
                found
            );
            Ok(Some(found))
        }
        KeyConflictPolicy::First => {
            warn!(
                "Instance {} uses key '{}' instead of '{}'; keeping '{}'",
                instance.label(),
                found,
                expected,
                expected
            );
            Ok(current)
        }
    }
}
