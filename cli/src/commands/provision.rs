use std::path::Path;

use ec2inv_aws::{AwsSettings, CloudFormationProvisioner, Ec2InstanceSource, S3TemplateStore};
use ec2inv_common::config::{Config, UploadConfig};
use ec2inv_core::inventory::InventoryService;
use ec2inv_core::provisioning::ProvisioningService;
use tracing::{Instrument, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::{InventoryArgs, inventory};
use crate::terminal::print;

pub async fn provision(
    template: &Path,
    args: &InventoryArgs,
    aws: &AwsSettings,
    cfg: &Config,
) -> anyhow::Result<()> {
    let upload = UploadConfig::from_env()?;
    let sdk_config = aws.load().await;

    let service = ProvisioningService::new(
        Box::new(S3TemplateStore::new(&sdk_config, &aws.region, upload)),
        Box::new(CloudFormationProvisioner::new(&sdk_config, aws.stack_wait)),
    );

    let span = info_span!("provisioning", indicatif.pb_show = true);
    span.pb_set_message(&format!("Creating stack {}...", args.stack_name));
    service
        .provision(&args.stack_name, template)
        .instrument(span)
        .await?;

    print::header("building inventory", cfg.quiet);
    let instances = InventoryService::new(Box::new(Ec2InstanceSource::new(&sdk_config)));
    inventory::emit(&instances, args, cfg).await
}
