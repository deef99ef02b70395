use std::sync::Arc;

use crate::{
    application::{
        dto::{ContactSubmissionDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        contact::{ContactRepository, ContactStatus, ContactSubmissionId},
        optional_text,
        pagination::PageRequest,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListContactSubmissionsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
}

pub struct GetContactSubmissionQuery {
    pub id: i64,
}

pub struct ContactQueryService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactQueryService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_submissions(
        &self,
        query: ListContactSubmissionsQuery,
    ) -> ApplicationResult<Page<ContactSubmissionDto>> {
        let status = optional_text(query.status)
            .map(|s| s.parse::<ContactStatus>())
            .transpose()?;
        let request = PageRequest::new(query.page, query.page_size);
        let (records, total) = self.repo.list_page(status, request).await?;
        Ok(Page::new(records.into_iter().map(Into::into).collect(), request, total))
    }

    pub async fn get_submission(
        &self,
        query: GetContactSubmissionQuery,
    ) -> ApplicationResult<ContactSubmissionDto> {
        let id = ContactSubmissionId::new(query.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("contact submission not found"))
    }
}
