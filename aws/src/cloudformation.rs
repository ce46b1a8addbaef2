use std::time::Duration;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudformation::Client as CfnClient;
use aws_sdk_cloudformation::client::Waiters;
use aws_sdk_cloudformation::error::DisplayErrorContext;
use aws_sdk_cloudformation::types::Stack;
use tracing::{debug, info, warn};

use ec2inv_common::error::{Error, Result};
use ec2inv_common::provider::StackProvisioner;

pub struct CloudFormationProvisioner {
    client: CfnClient,
    max_wait: Duration,
}

impl CloudFormationProvisioner {
    pub fn new(sdk_config: &SdkConfig, max_wait: Duration) -> Self {
        Self {
            client: CfnClient::new(sdk_config),
            max_wait,
        }
    }

    /// Current status of the stack, with the reason when CloudFormation gives one.
    async fn stack_status(&self, name: &str) -> Option<String> {
        let output = match self.client.describe_stacks().stack_name(name).send().await {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not read status of stack {}: {}", name, DisplayErrorContext(&e));
                return None;
            }
        };
        output.stacks().first().map(describe_status)
    }
}

/// `STATUS (reason)`, or just the status when CloudFormation gives no reason.
fn describe_status(stack: &Stack) -> String {
    let status = stack.stack_status().as_str();
    match stack.stack_status_reason() {
        Some(reason) => format!("{status} ({reason})"),
        None => status.to_string(),
    }
}

/// Message for a failed wait, prefixed with the stack's final status when known.
fn wait_failure_message(name: &str, status: Option<&str>, cause: &str) -> String {
    match status {
        Some(status) => format!("stack {name} is {status}: {cause}"),
        None => cause.to_string(),
    }
}

#[async_trait]
impl StackProvisioner for CloudFormationProvisioner {
    async fn create_stack(&self, name: &str, template_url: &str) -> Result<()> {
        let output = self
            .client
            .create_stack()
            .stack_name(name)
            .template_url(template_url)
            .send()
            .await
            .map_err(|e| Error::transport("stack creation", DisplayErrorContext(&e).to_string()))?;
        info!(
            "Stack {} submitted ({})",
            name,
            output.stack_id().unwrap_or("no stack id")
        );

        debug!("Waiting up to {}s for CREATE_COMPLETE", self.max_wait.as_secs());
        if let Err(e) = self
            .client
            .wait_until_stack_create_complete()
            .stack_name(name)
            .wait(self.max_wait)
            .await
        {
            let cause = DisplayErrorContext(&e).to_string();
            let status = self.stack_status(name).await;
            return Err(Error::transport(
                "waiting for stack creation",
                wait_failure_message(name, status.as_deref(), &cause),
            ));
        }

        Ok(())
    }
}
