use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ec2inv_common::error::{Error, Result};
use ec2inv_common::instance::Instance;
use ec2inv_common::provider::{InstanceSource, StackProvisioner, TemplateStore};

pub const STACK_NAME_TAG: &str = "aws:cloudformation:stack-name";

#[derive(Default)]
struct CloudState {
    /// Uploaded objects: location -> template contents.
    objects: HashMap<String, Vec<u8>>,
    /// Instances that creating a stack from any template launches.
    blueprint: Vec<Instance>,
    stacks: Vec<String>,
    instances: Vec<Instance>,
}

/// A tiny stand-in for S3, CloudFormation and EC2 sharing one state.
#[derive(Clone, Default)]
pub struct FakeCloud {
    state: Arc<Mutex<CloudState>>,
}

impl FakeCloud {
    /// Every stack created from now on launches `instances`.
    pub fn with_blueprint(instances: Vec<Instance>) -> Self {
        let cloud = Self::default();
        cloud.state.lock().unwrap().blueprint = instances;
        cloud
    }

    /// Registers instances as if a stack called `stack_name` already existed.
    pub fn with_existing_stack(stack_name: &str, instances: Vec<Instance>) -> Self {
        let cloud = Self::default();
        {
            let mut state = cloud.state.lock().unwrap();
            state.stacks.push(stack_name.to_string());
            state
                .instances
                .extend(instances.into_iter().map(|i| i.with_tag(STACK_NAME_TAG, stack_name)));
        }
        cloud
    }

    pub fn stacks(&self) -> Vec<String> {
        self.state.lock().unwrap().stacks.clone()
    }
}

#[async_trait]
impl TemplateStore for FakeCloud {
    async fn upload_template(&self, path: &Path) -> Result<String> {
        let body = std::fs::read(path).map_err(|e| Error::TemplateUnreadable {
            path: PathBuf::from(path),
            reason: e.to_string(),
        })?;
        let location = format!("https://templates.s3.ap-northeast-1.amazonaws.com/{}", path.display());
        self.state.lock().unwrap().objects.insert(location.clone(), body);
        Ok(location)
    }
}

#[async_trait]
impl StackProvisioner for FakeCloud {
    async fn create_stack(&self, name: &str, template_url: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.objects.contains_key(template_url) {
            return Err(Error::transport("stack creation", format!("no template at {template_url}")));
        }
        if state.stacks.iter().any(|s| s == name) {
            return Err(Error::transport(
                "stack creation",
                format!("AlreadyExistsException: Stack [{name}] already exists"),
            ));
        }

        let launched: Vec<Instance> = state
            .blueprint
            .iter()
            .cloned()
            .map(|i| i.with_tag(STACK_NAME_TAG, name))
            .collect();
        state.instances.extend(launched);
        state.stacks.push(name.to_string());
        Ok(())
    }
}

#[async_trait]
impl InstanceSource for FakeCloud {
    async fn describe_instances(&self, stack_name: &str) -> Result<Vec<Instance>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .instances
            .iter()
            .filter(|i| i.tags.iter().any(|t| t.key == STACK_NAME_TAG && t.value == stack_name))
            .cloned()
            .collect())
    }
}

pub fn host(id: &str, ip: &str, key: &str) -> Instance {
    Instance::new(id).with_public_ip(ip).with_key_name(key)
}

/// A file that exists for as long as the tests run.
pub fn template_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
}
