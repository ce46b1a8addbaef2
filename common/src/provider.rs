//! # Provider Ports
//!
//! Contracts the application needs from the cloud provider. The core only ever
//! talks to these traits; `ec2inv-aws` implements them against AWS and the
//! integration tests implement them in memory.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::instance::Instance;

/// Object storage that can host an infrastructure template.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Uploads the local file at `path` and returns a location the stack
    /// service can read it from.
    async fn upload_template(&self, path: &Path) -> Result<String>;
}

/// Infrastructure-as-code stack service.
#[async_trait]
pub trait StackProvisioner: Send + Sync {
    /// Creates the stack `name` from the template at `template_url` and waits
    /// until creation completes, fails, or the wait budget runs out.
    async fn create_stack(&self, name: &str, template_url: &str) -> Result<()>;
}

/// Source of the instances belonging to a stack.
#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// Returns every instance whose stack-membership tag equals `stack_name`.
    async fn describe_instances(&self, stack_name: &str) -> Result<Vec<Instance>>;
}
