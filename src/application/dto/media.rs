use crate::application::ports::storage::UploadTicket;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadTicketDto {
    /// PUT target, valid for a limited time.
    pub presigned_url: String,
    pub object_key: String,
    /// Where the object will be readable once uploaded.
    pub public_url: String,
}

impl From<UploadTicket> for UploadTicketDto {
    fn from(ticket: UploadTicket) -> Self {
        Self {
            presigned_url: ticket.presigned_url,
            object_key: ticket.object_key,
            public_url: ticket.public_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteMediaResultDto {
    pub success: bool,
}
