// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Everything the editor needs to upload one file directly to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub presigned_url: String,
    pub object_key: String,
    pub public_url: String,
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Issue a short-lived PUT URL for a new object.
    async fn request_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> ApplicationResult<UploadTicket>;

    /// Remove the object behind a public URL previously handed out by
    /// `request_upload_url`.
    async fn delete_object(&self, public_url: &str) -> ApplicationResult<()>;

    /// Whether `public_url` points into this storage.
    fn is_managed(&self, public_url: &str) -> bool;
}
