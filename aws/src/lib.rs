//! # AWS adapters
//!
//! Concrete implementations of the [`ec2inv_common::provider`] ports:
//!
//! * [`s3::S3TemplateStore`] uploads templates to S3.
//! * [`cloudformation::CloudFormationProvisioner`] creates stacks and waits for them.
//! * [`ec2::Ec2InstanceSource`] describes the instances of a stack.
//!
//! Region and profile are passed in through [`AwsSettings`]; nothing here reads
//! region configuration from process-wide state on its own.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

pub mod cloudformation;
pub mod ec2;
pub mod s3;

pub use cloudformation::CloudFormationProvisioner;
pub use ec2::Ec2InstanceSource;
pub use s3::S3TemplateStore;

pub const DEFAULT_REGION: &str = "ap-northeast-1";

/// Matches the waiter budget of the other AWS SDKs (120 attempts, 30s apart).
pub const DEFAULT_STACK_WAIT: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct AwsSettings {
    pub region: String,
    /// Named profile from the shared config files. `None` uses the default chain.
    pub profile: Option<String>,
    /// Upper bound on waiting for a stack to finish creating.
    pub stack_wait: Duration,
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
            stack_wait: DEFAULT_STACK_WAIT,
        }
    }
}

impl AwsSettings {
    /// Resolves credentials and builds the SDK configuration for these settings.
    pub async fn load(&self) -> SdkConfig {
        debug!("Loading AWS configuration for region {}", self.region);
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(self.region.clone()));
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        loader.load().await
    }
}
