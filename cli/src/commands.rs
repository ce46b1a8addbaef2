pub mod inventory;
pub mod provision;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use ec2inv_aws::DEFAULT_REGION;
use ec2inv_common::config::{
    ClassifyOptions, DEFAULT_KEY_DIR, DEFAULT_SSH_USER, DuplicateTagPolicy, KeyConflictPolicy,
    MissingFieldPolicy, RenderOptions,
};

#[derive(Parser)]
#[command(name = "ec2inv", version)]
#[command(about = "Shows Ansible's inventory for EC2 instances.")]
pub struct CommandLine {
    /// AWS region the stack lives in
    #[arg(long, global = true, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Named AWS profile to load credentials from
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Less output on stderr (-q hides headers, -qq hides progress)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the inventory of an existing stack
    #[command(alias = "i")]
    Inventory {
        #[command(flatten)]
        args: InventoryArgs,
    },
    /// Upload a template, create its stack and print the inventory
    #[command(alias = "p")]
    Provision {
        /// CloudFormation template to upload
        #[arg(short, long, default_value = "./ec2.yml")]
        template: PathBuf,

        /// Seconds to wait for the stack to reach CREATE_COMPLETE
        #[arg(long, default_value_t = 3600)]
        wait_timeout: u64,

        #[command(flatten)]
        args: InventoryArgs,
    },
}

#[derive(Args)]
pub struct InventoryArgs {
    /// Name of a stack which EC2 instances belong to
    #[arg(short, long)]
    pub stack_name: String,

    /// Tag key attached to EC2 instances to specify inventory group
    #[arg(short, long)]
    pub inventory_group_tag_key: String,

    /// Instances without public IP or key name: fail, skip
    #[arg(long, default_value_t = MissingFieldPolicy::Fail)]
    pub on_missing: MissingFieldPolicy,

    /// Instances disagreeing on key name: last, first, strict
    #[arg(long, default_value_t = KeyConflictPolicy::Last)]
    pub key_conflict: KeyConflictPolicy,

    /// Group tag present more than once: last, first
    #[arg(long, default_value_t = DuplicateTagPolicy::Last)]
    pub duplicate_tags: DuplicateTagPolicy,

    /// Fail when the stack has no instances
    #[arg(long)]
    pub require_instances: bool,

    /// Print groups sorted by name
    #[arg(long)]
    pub sort_groups: bool,

    /// Remote user for ansible_ssh_user
    #[arg(long, default_value = DEFAULT_SSH_USER)]
    pub ssh_user: String,

    /// Directory holding <key name>.pem
    #[arg(long, default_value = DEFAULT_KEY_DIR)]
    pub key_dir: String,
}

impl InventoryArgs {
    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            group_tag_key: self.inventory_group_tag_key.clone(),
            missing_fields: self.on_missing,
            key_conflict: self.key_conflict,
            duplicate_tags: self.duplicate_tags,
            require_instances: self.require_instances,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            ssh_user: self.ssh_user.clone(),
            key_dir: self.key_dir.clone(),
            sort_groups: self.sort_groups,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
