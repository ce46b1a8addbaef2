use std::path::Path;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, info};

use ec2inv_common::config::UploadConfig;
use ec2inv_common::error::{Error, Result};
use ec2inv_common::provider::TemplateStore;

/// Uploads templates to a single bucket/key pair.
pub struct S3TemplateStore {
    client: S3Client,
    region: String,
    upload: UploadConfig,
}

impl S3TemplateStore {
    pub fn new(sdk_config: &SdkConfig, region: impl Into<String>, upload: UploadConfig) -> Self {
        Self {
            client: S3Client::new(sdk_config),
            region: region.into(),
            upload,
        }
    }
}

/// Characters S3 leaves unescaped in a key segment.
const KEY_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Virtual-hosted-style URL of an object.
///
/// The key is used verbatim: every `/`-separated segment is percent-encoded
/// and leading or repeated slashes are kept, so the URL names exactly the
/// object that was written.
pub fn object_url(bucket: &str, region: &str, key: &str) -> String {
    let path = key
        .split('/')
        .map(|segment| utf8_percent_encode(segment, KEY_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/");
    format!("https://{bucket}.s3.{region}.amazonaws.com/{path}")
}

#[async_trait]
impl TemplateStore for S3TemplateStore {
    async fn upload_template(&self, path: &Path) -> Result<String> {
        debug!("Reading template {}", path.display());
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| Error::TemplateUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        info!(
            "Uploading {} to s3://{}/{}",
            path.display(),
            self.upload.bucket,
            self.upload.object_key
        );
        self.client
            .put_object()
            .bucket(&self.upload.bucket)
            .key(&self.upload.object_key)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::transport("template upload", DisplayErrorContext(&e).to_string()))?;

        Ok(object_url(&self.upload.bucket, &self.region, &self.upload.object_key))
    }
}
