// src/application/commands/media.rs
use std::sync::Arc;

use crate::application::{
    dto::{DeleteMediaResultDto, UploadTicketDto},
    error::{ApplicationError, ApplicationResult},
    ports::storage::ObjectStorage,
    validation::FieldViolations,
};

/// Image types the editor may upload.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/avif",
    "image/svg+xml",
];

#[derive(Debug, Clone, Default)]
pub struct RequestUploadCommand {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
}

pub struct DeleteMediaCommand {
    pub url: String,
}

pub struct MediaCommandService {
    storage: Arc<dyn ObjectStorage>,
}

impl MediaCommandService {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    pub async fn request_upload_url(
        &self,
        command: RequestUploadCommand,
    ) -> ApplicationResult<UploadTicketDto> {
        let mut violations = FieldViolations::new();
        let file_name = violations.require("file_name", command.file_name, |n| Ok(n.trim().to_string()));
        let file_type = violations.require("file_type", command.file_type, |t| {
            Ok(t.trim().to_ascii_lowercase())
        });
        if let Some(rejected) = file_type
            .as_deref()
            .filter(|t| !ALLOWED_IMAGE_TYPES.contains(t))
        {
            violations.invalid(format!("file type {rejected} is not allowed"));
        }
        violations.finish()?;

        let (Some(file_name), Some(file_type)) = (file_name, file_type) else {
            return Err(ApplicationError::validation("missing required fields"));
        };

        let ticket = self.storage.request_upload_url(&file_name, &file_type).await?;
        tracing::info!(object_key = %ticket.object_key, %file_type, "issued upload url");
        Ok(ticket.into())
    }

    /// Storage failures are reported as `success: false` rather than as an
    /// error so the editor can carry on.
    pub async fn delete_media(&self, command: DeleteMediaCommand) -> ApplicationResult<DeleteMediaResultDto> {
        let url = command.url.trim();
        if url.is_empty() {
            return Err(ApplicationError::validation("missing required fields: url"));
        }
        if !self.storage.is_managed(url) {
            return Err(ApplicationError::validation("url is not managed by this storage"));
        }

        let success = match self.storage.delete_object(url).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%url, error = %err, "failed to delete media object");
                false
            }
        };
        Ok(DeleteMediaResultDto { success })
    }
}
