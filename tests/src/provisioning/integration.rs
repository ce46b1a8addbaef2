#![cfg(test)]
use std::path::PathBuf;

use ec2inv_common::config::{ClassifyOptions, RenderOptions};
use ec2inv_common::error::{Error, ErrorKind};
use ec2inv_core::inventory::InventoryService;
use ec2inv_core::provisioning::ProvisioningService;
use ec2inv_core::renderer;

use crate::fakes::{FakeCloud, host, template_path};

fn services(cloud: &FakeCloud) -> (ProvisioningService, InventoryService) {
    (
        ProvisioningService::new(Box::new(cloud.clone()), Box::new(cloud.clone())),
        InventoryService::new(Box::new(cloud.clone())),
    )
}

#[tokio::test]
async fn provision_then_inventory() {
    let cloud = FakeCloud::with_blueprint(vec![
        host("i-1", "1.2.3.4", "prod-key").with_tag("Group", "web"),
        host("i-2", "5.6.7.8", "prod-key").with_tag("Group", "db"),
    ]);
    let (provisioning, inventory) = services(&cloud);

    let location = provisioning
        .provision("AnsibleTargets03", &template_path())
        .await
        .unwrap();
    assert!(location.starts_with("https://templates.s3.ap-northeast-1.amazonaws.com/"));
    assert_eq!(cloud.stacks(), vec!["AnsibleTargets03".to_string()]);

    let result = inventory
        .build_inventory("AnsibleTargets03", &ClassifyOptions::new("Group"))
        .await
        .unwrap();
    let rendered = renderer::render(&result, &RenderOptions::default());
    assert!(rendered.starts_with("[web]\n1.2.3.4\n[db]\n5.6.7.8\n[all:vars]\n"));
}

#[tokio::test]
async fn existing_stack_is_a_transport_error() {
    let cloud = FakeCloud::with_blueprint(vec![host("i-1", "1.2.3.4", "k")]);
    let (provisioning, _) = services(&cloud);

    provisioning.provision("Dup", &template_path()).await.unwrap();
    let err = provisioning.provision("Dup", &template_path()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("AlreadyExistsException"));
}

#[tokio::test]
async fn unreadable_template_stops_before_stack_creation() {
    let cloud = FakeCloud::with_blueprint(vec![host("i-1", "1.2.3.4", "k")]);
    let (provisioning, _) = services(&cloud);

    let err = provisioning
        .provision("AnsibleTargets", &PathBuf::from("/nonexistent/ec2.yml"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TemplateUnreadable { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(cloud.stacks().is_empty());
}
