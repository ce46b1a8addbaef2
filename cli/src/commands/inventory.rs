use std::io;

use ec2inv_aws::{AwsSettings, Ec2InstanceSource};
use ec2inv_common::config::Config;
use ec2inv_common::error::Error;
use ec2inv_core::inventory::InventoryService;
use ec2inv_core::renderer;
use tracing::warn;

use crate::commands::InventoryArgs;
use crate::terminal::print;

pub async fn inventory(args: &InventoryArgs, aws: &AwsSettings, cfg: &Config) -> anyhow::Result<()> {
    let sdk_config = aws.load().await;
    let service = InventoryService::new(Box::new(Ec2InstanceSource::new(&sdk_config)));
    emit(&service, args, cfg).await
}

/// Builds the inventory of `args.stack_name` and prints it to stdout.
///
/// Nothing reaches stdout unless classification succeeded.
pub async fn emit(service: &InventoryService, args: &InventoryArgs, cfg: &Config) -> anyhow::Result<()> {
    let result = service
        .build_inventory(&args.stack_name, &args.classify_options())
        .await?;

    if !result.skipped().is_empty() {
        warn!(
            "Left {} instances out of the inventory: {}",
            result.skipped().len(),
            result.skipped().join(", ")
        );
    }

    let mut stdout = io::stdout().lock();
    renderer::write_inventory(&mut stdout, &result, &args.render_options()).map_err(Error::from)?;

    print::summary(&result, cfg.quiet);
    Ok(())
}
