//! # Inventory Service
//!
//! Implements the "show inventory" use case: describe the instances of a
//! stack through the [`InstanceSource`] port, then classify them.

use tracing::info;

use ec2inv_common::config::ClassifyOptions;
use ec2inv_common::error::{Error, Result};
use ec2inv_common::inventory::ClassificationResult;
use ec2inv_common::provider::InstanceSource;

use crate::classifier;

pub struct InventoryService {
    source: Box<dyn InstanceSource>,
}

impl InventoryService {
    pub fn new(source: Box<dyn InstanceSource>) -> Self {
        Self { source }
    }

    /// Describes the instances of `stack_name` and classifies them.
    pub async fn build_inventory(
        &self,
        stack_name: &str,
        options: &ClassifyOptions,
    ) -> Result<ClassificationResult> {
        let instances = self.source.describe_instances(stack_name).await?;
        info!("Found {} instances in stack {}", instances.len(), stack_name);

        if instances.is_empty() && options.require_instances {
            return Err(Error::NoInstances {
                stack: stack_name.to_string(),
            });
        }

        let result = classifier::classify(&instances, options)?;
        info!(
            "Classified {} hosts into {} groups by tag '{}'",
            result.host_count(),
            result.groups().len(),
            options.group_tag_key
        );
        Ok(result)
    }
}
