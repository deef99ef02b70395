use crate::domain::contact::entity::{ContactSubmission, NewContactSubmission};
use crate::domain::contact::value_objects::{ContactStatus, ContactSubmissionId};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, submission: NewContactSubmission) -> DomainResult<ContactSubmission>;
    async fn find_by_id(&self, id: ContactSubmissionId)
    -> DomainResult<Option<ContactSubmission>>;
    /// Newest first.
    async fn list_page(
        &self,
        status: Option<ContactStatus>,
        page: PageRequest,
    ) -> DomainResult<(Vec<ContactSubmission>, u64)>;
    async fn update_status(
        &self,
        id: ContactSubmissionId,
        status: ContactStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Option<ContactSubmission>>;
    async fn delete(&self, id: ContactSubmissionId) -> DomainResult<bool>;
}
