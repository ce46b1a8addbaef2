#![cfg(test)]
use ec2inv_common::config::{ClassifyOptions, MissingFieldPolicy, RenderOptions};
use ec2inv_common::error::{Error, ErrorKind};
use ec2inv_common::instance::Instance;
use ec2inv_common::inventory::ClassificationResult;
use ec2inv_core::inventory::InventoryService;
use ec2inv_core::{parser, renderer};

use crate::fakes::{FakeCloud, host};

const GROUP_TAG: &str = "AnsibleInventoryGroup";

fn render(result: &ClassificationResult) -> String {
    let mut out: Vec<u8> = Vec::new();
    renderer::write_inventory(&mut out, result, &RenderOptions::default()).unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn renders_existing_stack() {
    let cloud = FakeCloud::with_existing_stack(
        "AnsibleTargets",
        vec![
            host("i-1", "1.2.3.4", "prod-key").with_tag(GROUP_TAG, "web"),
            host("i-2", "5.6.7.8", "prod-key").with_tag(GROUP_TAG, "web"),
            host("i-3", "9.9.9.9", "prod-key"),
        ],
    );
    let service = InventoryService::new(Box::new(cloud));

    let result = service
        .build_inventory("AnsibleTargets", &ClassifyOptions::new(GROUP_TAG))
        .await
        .unwrap();

    assert_eq!(
        render(&result),
        "[web]\n1.2.3.4\n5.6.7.8\n[]\n9.9.9.9\n[all:vars]\nansible_ssh_user=ec2-user\n\
         ansible_ssh_private_key_file=~/.ssh/prod-key.pem\n"
    );
}

#[tokio::test]
async fn other_stacks_are_ignored() {
    let cloud = FakeCloud::with_existing_stack(
        "AnsibleTargets",
        vec![host("i-1", "1.2.3.4", "prod-key").with_tag(GROUP_TAG, "web")],
    );
    let service = InventoryService::new(Box::new(cloud));

    let result = service
        .build_inventory("SomethingElse", &ClassifyOptions::new(GROUP_TAG))
        .await
        .unwrap();

    assert_eq!(
        render(&result),
        "[all:vars]\nansible_ssh_user=ec2-user\nansible_ssh_private_key_file=~/.ssh/.pem\n"
    );
}

#[tokio::test]
async fn instance_without_address_aborts_by_default() {
    let cloud = FakeCloud::with_existing_stack(
        "AnsibleTargets",
        vec![
            host("i-1", "1.2.3.4", "prod-key").with_tag(GROUP_TAG, "web"),
            Instance::new("i-2")
                .with_key_name("prod-key")
                .with_tag(GROUP_TAG, "web"),
        ],
    );
    let service = InventoryService::new(Box::new(cloud));

    let err = service
        .build_inventory("AnsibleTargets", &ClassifyOptions::new(GROUP_TAG))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
    assert!(matches!(err, Error::MissingAddress { .. }));

    let mut lenient = ClassifyOptions::new(GROUP_TAG);
    lenient.missing_fields = MissingFieldPolicy::Skip;
    let result = service.build_inventory("AnsibleTargets", &lenient).await.unwrap();
    assert_eq!(result.group("web").unwrap().hosts, vec!["1.2.3.4"]);
    assert_eq!(result.skipped(), ["i-2"]);
}

#[tokio::test]
async fn rendered_inventory_parses_back() {
    let cloud = FakeCloud::with_existing_stack(
        "AnsibleTargets",
        vec![
            host("i-1", "10.0.0.1", "k").with_tag(GROUP_TAG, "db"),
            host("i-2", "10.0.0.2", "k").with_tag(GROUP_TAG, "web"),
            host("i-3", "10.0.0.3", "k").with_tag(GROUP_TAG, "db"),
            host("i-4", "10.0.0.4", "k"),
        ],
    );
    let service = InventoryService::new(Box::new(cloud));
    let result = service
        .build_inventory("AnsibleTargets", &ClassifyOptions::new(GROUP_TAG))
        .await
        .unwrap();

    let parsed = parser::parse(&render(&result)).unwrap();
    assert_eq!(parsed.groups, result.groups());
    assert_eq!(parsed.var(renderer::PRIVATE_KEY_VAR), Some("~/.ssh/k.pem"));
}
