// src/infrastructure/storage/mod.rs
pub mod sigv4;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Datelike;
use reqwest::Url;
use uuid::Uuid;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        storage::{ObjectStorage, UploadTicket},
        time::Clock,
    },
};

use self::sigv4::{Credentials, PresignRequest};

/// Lifetime of the URL used internally for deletes.
const DELETE_URL_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct S3Config {
    /// e.g. `https://s3.ap-southeast-1.amazonaws.com` or an R2/MinIO endpoint.
    pub endpoint: String,
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Prefix under which uploaded objects are publicly readable.
    pub public_base_url: String,
    pub presign_ttl: Duration,
}

/// Path-style S3 client: presigns uploads and issues deletes through
/// presigned URLs so no request headers need signing.
pub struct S3ObjectStorage {
    config: S3Config,
    endpoint: Url,
    host: String,
    public_base: String,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl S3ObjectStorage {
    pub fn new(config: S3Config, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|err| {
            ApplicationError::infrastructure(format!("invalid storage endpoint: {err}"))
        })?;
        let host = match (endpoint.host_str(), endpoint.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(ApplicationError::infrastructure(
                    "storage endpoint has no host",
                ));
            }
        };
        let public_base = format!("{}/", config.public_base_url.trim_end_matches('/'));
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            config,
            endpoint,
            host,
            public_base,
            http,
            clock,
        })
    }

    fn key_for_url<'u>(&self, public_url: &'u str) -> Option<&'u str> {
        public_url
            .strip_prefix(&self.public_base)
            .map(|key| key.split(['?', '#']).next().unwrap_or(key))
            .filter(|key| !key.is_empty())
    }

    fn presigned_url(&self, method: &str, key: &str, expires_secs: u64) -> ApplicationResult<String> {
        let path = format!("/{}/{key}", self.config.bucket);
        let credentials = Credentials {
            access_key_id: &self.config.access_key_id,
            secret_access_key: &self.config.secret_access_key,
            region: &self.config.region,
        };
        let request = PresignRequest {
            method,
            host: &self.host,
            path: &path,
            timestamp: self.clock.now(),
            expires_secs,
        };
        let signed = sigv4::presign(&credentials, &request)
            .map_err(|err| ApplicationError::infrastructure(format!("signing failed: {err}")))?;
        Ok(format!("{}://{}{signed}", self.endpoint.scheme(), self.host))
    }
}

/// `image/svg+xml` -> `svg`, `image/jpeg` -> `jpg`.
fn extension_for(file_type: &str) -> &str {
    match file_type {
        "image/jpeg" => "jpg",
        "image/svg+xml" => "svg",
        other => other.rsplit('/').next().unwrap_or("bin"),
    }
}

fn object_stem(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = base.rsplit_once('.').map_or(base, |(stem, _)| stem);
    let slug = slug::slugify(stem);
    if slug.is_empty() { "file".to_string() } else { slug }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn request_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> ApplicationResult<UploadTicket> {
        let now = self.clock.now();
        let object_key = format!(
            "uploads/{:04}/{:02}/{}-{}.{}",
            now.year(),
            now.month(),
            Uuid::new_v4(),
            object_stem(file_name),
            extension_for(file_type),
        );
        let presigned_url =
            self.presigned_url("PUT", &object_key, self.config.presign_ttl.as_secs())?;
        let public_url = format!("{}{object_key}", self.public_base);

        Ok(UploadTicket {
            presigned_url,
            object_key,
            public_url,
        })
    }

    async fn delete_object(&self, public_url: &str) -> ApplicationResult<()> {
        let key = self
            .key_for_url(public_url)
            .ok_or_else(|| ApplicationError::validation("url is not managed by this storage"))?;
        let url = self.presigned_url("DELETE", key, DELETE_URL_TTL_SECS)?;

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("storage delete failed: {err}")))?;

        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(%key, %status, "storage object deleted");
            Ok(())
        } else {
            Err(ApplicationError::infrastructure(format!(
                "storage delete failed with status {status}"
            )))
        }
    }

    fn is_managed(&self, public_url: &str) -> bool {
        self.key_for_url(public_url).is_some()
    }
}
