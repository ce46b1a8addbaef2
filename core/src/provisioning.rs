//! # Provisioning Service
//!
//! Implements the "provision" use case: upload the template through the
//! [`TemplateStore`] port, then create the stack and wait for it through the
//! [`StackProvisioner`] port. Either step failing aborts the run.

use std::path::Path;

use tracing::info;

use ec2inv_common::error::Result;
use ec2inv_common::provider::{StackProvisioner, TemplateStore};

pub struct ProvisioningService {
    store: Box<dyn TemplateStore>,
    provisioner: Box<dyn StackProvisioner>,
}

impl ProvisioningService {
    pub fn new(store: Box<dyn TemplateStore>, provisioner: Box<dyn StackProvisioner>) -> Self {
        Self { store, provisioner }
    }

    /// Uploads `template_path` and creates `stack_name` from it.
    ///
    /// Returns the location the template was uploaded to.
    pub async fn provision(&self, stack_name: &str, template_path: &Path) -> Result<String> {
        let template_url = self.store.upload_template(template_path).await?;
        info!("Uploaded template to {}", template_url);

        self.provisioner.create_stack(stack_name, &template_url).await?;
        info!("Stack {} created", stack_name);

        Ok(template_url)
    }
}
