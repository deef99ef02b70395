use crate::domain::contact::ContactSubmission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmissionDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub car_model_interest: Option<String>,
    pub message: String,
    /// One of `new`, `read`, `replied`, `archived`.
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactSubmissionDto {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id.into(),
            name: submission.name.into_inner(),
            email: submission.email.into_inner(),
            phone: submission.phone,
            car_model_interest: submission.car_model_interest,
            message: submission.message.into_inner(),
            status: submission.status.as_str().to_string(),
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        }
    }
}
