use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2::Client as Ec2Client;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use aws_sdk_ec2::types::{Filter, Instance as Ec2Instance};
use tracing::debug;

use ec2inv_common::error::{Error, Result};
use ec2inv_common::instance::{Instance, Tag};
use ec2inv_common::provider::InstanceSource;

/// Tag CloudFormation puts on every resource it creates.
pub const STACK_NAME_TAG: &str = "aws:cloudformation:stack-name";

pub struct Ec2InstanceSource {
    client: Ec2Client,
}

impl Ec2InstanceSource {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Ec2Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl InstanceSource for Ec2InstanceSource {
    async fn describe_instances(&self, stack_name: &str) -> Result<Vec<Instance>> {
        let filter = Filter::builder()
            .name(format!("tag:{STACK_NAME_TAG}"))
            .values(stack_name)
            .build();

        let client = &self.client;
        let filter = &filter;
        collect_pages(move |next_token| async move {
            client
                .describe_instances()
                .filters(filter.clone())
                .set_next_token(next_token)
                .send()
                .await
                .map_err(|e| Error::transport("describe instances", DisplayErrorContext(&e).to_string()))
        })
        .await
    }
}

/// Drains a paginated `DescribeInstances` listing. `fetch` is called with the
/// token of the page to read, `None` for the first one, until a page comes
/// back without a non-empty continuation token.
async fn collect_pages<F, Fut>(mut fetch: F) -> Result<Vec<Instance>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<DescribeInstancesOutput>>,
{
    let mut instances = Vec::new();
    let mut next_token: Option<String> = None;
    loop {
        let output = fetch(next_token.take()).await?;

        for reservation in output.reservations() {
            instances.extend(reservation.instances().iter().map(instance_from_ec2));
        }

        match output.next_token() {
            Some(token) if !token.is_empty() => {
                debug!("Fetching next page of instances");
                next_token = Some(token.to_string());
            }
            _ => break,
        }
    }

    Ok(instances)
}

/// Copies the fields ec2inv needs out of an SDK instance. Tags without a key
/// are dropped.
pub fn instance_from_ec2(instance: &Ec2Instance) -> Instance {
    Instance {
        instance_id: instance.instance_id().map(str::to_string),
        public_ip: instance.public_ip_address().map(str::to_string),
        key_name: instance.key_name().map(str::to_string),
        tags: instance
            .tags()
            .iter()
            .filter_map(|tag| Some(Tag::new(tag.key()?, tag.value().unwrap_or_default())))
            .collect(),
    }
}
