// src/services/storage.rs
// DOCUMENTATION: Object storage clients
// PURPOSE: Upload media to buckets, build public URLs and remove objects

use crate::errors::ToursError;
use crate::models::UploadedFile;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Path segment under which buckets serve public objects
const PUBLIC_OBJECT_PREFIX: &str = "storage/v1/object/public";

/// Bucket-based object storage
/// DOCUMENTATION: Uploads never overwrite, public URLs are derived, not fetched
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Short backend name reported by /health
    fn backend(&self) -> &'static str;

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ToursError>;

    fn public_url(&self, bucket: &str, path: &str) -> String;

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), ToursError>;
}

/// `<base>/storage/v1/object/public/<bucket>/<path>`
pub fn public_object_url(base_url: &str, bucket: &str, path: &str) -> String {
    format!("{}/{}/{}/{}", base_url, PUBLIC_OBJECT_PREFIX, bucket, path)
}

/// Recover the object key from a public URL
/// DOCUMENTATION: Prefers the text after `storage/v1/object/public/<bucket>/`,
/// then the text after the first `<bucket>/`. Query strings are ignored.
pub fn storage_path_from_public_url(url: &str, bucket: &str) -> Option<String> {
    let url = url.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();

    let public_marker = format!("{}/{}/", PUBLIC_OBJECT_PREFIX, bucket);
    let bucket_marker = format!("{}/", bucket);

    let rest = match url.find(&public_marker) {
        Some(idx) => &url[idx + public_marker.len()..],
        None => {
            let idx = url.find(&bucket_marker)?;
            &url[idx + bucket_marker.len()..]
        }
    };

    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

/// Client for the hosted storage REST API
/// DOCUMENTATION: Authenticates every call with the service role key
pub struct SupabaseStorage {
    /// HTTP client for making requests
    client: Client,
    /// Project URL without trailing slash
    base_url: String,
    /// Service role key
    service_key: String,
}

impl SupabaseStorage {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }

    fn bucket_url(&self, bucket: &str) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, bucket)
    }

    async fn check_status(response: reqwest::Response, action: &str) -> Result<(), ToursError> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("Storage {} failed with {}: {}", action, status, body);
        Err(ToursError::StorageError(format!(
            "{} failed with {}: {}",
            action, status, body
        )))
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    fn backend(&self) -> &'static str {
        "supabase"
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ToursError> {
        log::debug!("Uploading {} bytes to {}/{}", bytes.len(), bucket, path);

        let response = self
            .client
            .post(self.object_url(bucket, path))
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
            .header(CONTENT_TYPE, content_type)
            .header(CACHE_CONTROL, "max-age=3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                log::error!("Storage upload request failed: {}", e);
                ToursError::StorageError(format!("Request failed: {}", e))
            })?;

        Self::check_status(response, "upload").await
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        public_object_url(&self.base_url, bucket, path)
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), ToursError> {
        if paths.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .delete(self.bucket_url(bucket))
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
            .json(&json!({ "prefixes": paths }))
            .send()
            .await
            .map_err(|e| {
                log::error!("Storage remove request failed: {}", e);
                ToursError::StorageError(format!("Request failed: {}", e))
            })?;

        Self::check_status(response, "remove").await
    }
}

/// Object held by MemoryStorage
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// In-process storage used when no storage credentials are configured
/// DOCUMENTATION: Objects are served back by the /storage/v1/object/public route
pub struct MemoryStorage {
    public_base_url: String,
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl MemoryStorage {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, bucket: &str, path: &str) -> Option<StoredObject> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), path.to_string()))
            .cloned()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ToursError> {
        let mut objects = self.objects.write().await;
        let key = (bucket.to_string(), path.to_string());

        if objects.contains_key(&key) {
            return Err(ToursError::StorageError(format!(
                "object already exists: {}/{}",
                bucket, path
            )));
        }

        objects.insert(
            key,
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        public_object_url(&self.public_base_url, bucket, path)
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), ToursError> {
        let mut objects = self.objects.write().await;
        for path in paths {
            objects.remove(&(bucket.to_string(), path.clone()));
        }
        Ok(())
    }
}

/// Upload a file and return its public URL
pub async fn upload_public(
    storage: &dyn ObjectStorage,
    bucket: &str,
    path: &str,
    file: UploadedFile,
) -> Result<String, ToursError> {
    let content_type = if file.content_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        file.content_type
    };

    storage.upload(bucket, path, file.bytes, &content_type).await?;
    Ok(storage.public_url(bucket, path))
}

/// Remove the objects behind public URLs without failing the caller
/// DOCUMENTATION: Errors are logged and swallowed so row deletion can proceed
pub async fn remove_public_urls(storage: &dyn ObjectStorage, bucket: &str, urls: &[String]) {
    let paths: Vec<String> = urls
        .iter()
        .filter_map(|url| {
            let path = storage_path_from_public_url(url, bucket);
            if path.is_none() {
                log::warn!("Could not derive storage path from {}", url);
            }
            path
        })
        .collect();

    if paths.is_empty() {
        return;
    }

    if let Err(e) = storage.remove(bucket, &paths).await {
        log::warn!("Error removing storage objects from {}: {}", bucket, e);
    }
}

/// Storage whose every call fails, for exercising error paths
#[cfg(test)]
pub(crate) struct FailingStorage;

#[cfg(test)]
#[async_trait]
impl ObjectStorage for FailingStorage {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn upload(&self, _: &str, _: &str, _: Vec<u8>, _: &str) -> Result<(), ToursError> {
        Err(ToursError::StorageError("bucket unavailable".to_string()))
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        public_object_url("http://failing.invalid", bucket, path)
    }

    async fn remove(&self, _: &str, _: &[String]) -> Result<(), ToursError> {
        Err(ToursError::StorageError("bucket unavailable".to_string()))
    }
}
