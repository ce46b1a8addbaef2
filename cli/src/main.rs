mod commands;
mod terminal;

use std::process::ExitCode;
use std::time::Duration;

use commands::{CommandLine, Commands, inventory, provision};
use ec2inv_aws::{AwsSettings, DEFAULT_STACK_WAIT};
use ec2inv_common::config::Config;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
    };
    logging::init(cfg.quiet);

    let aws = AwsSettings {
        region: commands.region,
        profile: commands.profile,
        stack_wait: DEFAULT_STACK_WAIT,
    };

    let outcome = match commands.command {
        Commands::Inventory { args } => {
            print::header("building inventory", cfg.quiet);
            inventory::inventory(&args, &aws, &cfg).await
        }
        Commands::Provision {
            template,
            wait_timeout,
            args,
        } => {
            print::header("provisioning stack", cfg.quiet);
            let aws = AwsSettings {
                stack_wait: Duration::from_secs(wait_timeout),
                ..aws
            };
            provision::provision(&template, &args, &aws, &cfg).await
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::failure(&err);
            ExitCode::FAILURE
        }
    }
}
