use crate::domain::contact::value_objects::{
    ContactStatus, ContactSubmissionId, EmailAddress, Message, SenderName,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub name: SenderName,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub car_model_interest: Option<String>,
    pub message: Message,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: SenderName,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub car_model_interest: Option<String>,
    pub message: Message,
    pub created_at: DateTime<Utc>,
}
