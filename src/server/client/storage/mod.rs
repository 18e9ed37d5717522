//! S3 object storage client.
//!
//! Uploads are a single SigV4-signed PUT straight to the bucket. Objects are addressed by
//! their public virtual-hosted URL regardless of which endpoint they were written through.

pub mod key;
pub mod signer;

use std::{collections::BTreeMap, sync::Arc};

use bytes::Bytes;
use chrono::Utc;
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Url,
};
use secrecy::{ExposeSecret, Secret};

use crate::server::{
    client::storage::{
        key::StorageKey,
        signer::{amz_date, authorization, payload_hash, Credentials},
    },
    config::Config,
    error::upstream::UpstreamError,
};

pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: Secret<String>,
    /// Path-style endpoint override, e.g. for S3-compatible services
    pub endpoint: Option<String>,
}

impl From<&Config> for StorageConfig {
    fn from(config: &Config) -> Self {
        Self {
            bucket: config.aws_s3_bucket_name.clone(),
            region: config.aws_region.clone(),
            access_key_id: config.aws_access_key_id.clone(),
            secret_access_key: Secret::new(config.aws_secret_access_key.expose_secret().clone()),
            endpoint: config.aws_s3_endpoint.clone(),
        }
    }
}

#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    config: Arc<StorageConfig>,
}

impl StorageClient {
    pub fn new(http: reqwest::Client, config: StorageConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    /// `https://<bucket>.s3.<region>.amazonaws.com/<key>`
    pub fn public_url(&self, key: &StorageKey) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.config.bucket,
            self.config.region,
            key.encoded()
        )
    }

    fn upload_url(&self, key: &StorageKey) -> String {
        match &self.config.endpoint {
            Some(endpoint) => format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                self.config.bucket,
                key.encoded()
            ),
            None => self.public_url(key),
        }
    }

    /// Uploads `body` under `key` and returns the object's public URL.
    ///
    /// One attempt only. Any transport error or non-success status is returned as
    /// `UpstreamError::Storage`, preferring the `<Message>` of an S3 error document.
    pub async fn put_object(
        &self,
        key: &StorageKey,
        body: Bytes,
        content_type: &str,
    ) -> Result<String, UpstreamError> {
        let url = Url::parse(&self.upload_url(key))
            .map_err(|e| UpstreamError::Storage(format!("Invalid storage URL: {}", e)))?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(UpstreamError::Storage(format!(
                    "Storage URL has no host: {}",
                    url
                )))
            }
        };

        let now = Utc::now();
        let date = amz_date(now);
        let hash = payload_hash(&body);

        let headers = BTreeMap::from([
            ("content-type".to_string(), content_type.to_string()),
            ("host".to_string(), host),
            ("x-amz-content-sha256".to_string(), hash.clone()),
            ("x-amz-date".to_string(), date.clone()),
        ]);
        let credentials = Credentials {
            access_key_id: &self.config.access_key_id,
            secret_access_key: self.config.secret_access_key.expose_secret(),
            region: &self.config.region,
        };
        let signature = authorization(&credentials, "PUT", url.path(), &headers, &hash, now);

        let response = self
            .http
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .header("x-amz-content-sha256", hash)
            .header("x-amz-date", date)
            .header(AUTHORIZATION, signature)
            .body(body)
            .send()
            .await
            .map_err(|e| UpstreamError::Storage(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = s3_error_message(&body).unwrap_or_else(|| {
                format!("Storage upload failed with status code {}", status.as_u16())
            });

            return Err(UpstreamError::Storage(message));
        }

        tracing::debug!(key = %key, "Uploaded object to storage");

        Ok(self.public_url(key))
    }
}

/// Extracts `<Message>` from an S3 XML error document
fn s3_error_message(body: &str) -> Option<String> {
    let start = body.find("<Message>")? + "<Message>".len();
    let end = body[start..].find("</Message>")? + start;
    let message = body[start..end].trim();

    (!message.is_empty()).then(|| message.to_string())
}
