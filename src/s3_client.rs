use async_trait::async_trait;
use rusoto_core::{HttpClient, Region};
use rusoto_credential::{ChainProvider, StaticProvider};
use rusoto_s3::{PutObjectRequest, S3Client as RusotoS3Client, S3};
use std::str::FromStr;
use thiserror::Error;

use crate::config::UploaderConfig;

#[derive(Debug, Error)]
pub enum S3Error {
    #[error("Invalid region: {0}")]
    InvalidRegion(String),
    #[error("Failed to set up S3 client: {0}")]
    ClientSetup(String),
    #[error("S3 operation failed: {0}")]
    OperationFailed(String),
}

/// Write-side of an object store
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), S3Error>;
}

pub struct S3Client {
    client: RusotoS3Client,
}

impl S3Client {
    /// Create a client from the uploader configuration.
    ///
    /// Static credentials are used when both key id and secret are set,
    /// otherwise rusoto's default provider chain (env, profile, instance).
    pub fn new(config: &UploaderConfig) -> Result<Self, S3Error> {
        let region = resolve_region(config)?;

        let http_client = HttpClient::new().map_err(|e| S3Error::ClientSetup(e.to_string()))?;

        let client = match (&config.access_key_id, &config.secret_access_key) {
            (Some(key_id), Some(secret)) => {
                let credentials = StaticProvider::new_minimal(key_id.clone(), secret.clone());
                RusotoS3Client::new_with(http_client, credentials, region)
            }
            _ => {
                log::warn!("AWS credentials not fully set, falling back to the default provider chain");
                RusotoS3Client::new_with(http_client, ChainProvider::new(), region)
            }
        };

        Ok(Self { client })
    }
}

fn resolve_region(config: &UploaderConfig) -> Result<Region, S3Error> {
    match &config.endpoint {
        Some(endpoint) => Ok(Region::Custom {
            name: config.region.clone(),
            endpoint: endpoint.clone(),
        }),
        None => Region::from_str(&config.region)
            .map_err(|_| S3Error::InvalidRegion(config.region.clone())),
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), S3Error> {
        let request = PutObjectRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: Some(body.into()),
            content_type: Some(content_type.to_string()),
            ..Default::default()
        };

        self.client
            .put_object(request)
            .await
            .map_err(|e| S3Error::OperationFailed(e.to_string()))?;

        Ok(())
    }
}
