// src/application/commands/contact.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ContactSubmissionDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldViolations,
    },
    domain::{
        contact::{
            ContactRepository, ContactStatus, ContactSubmissionId, EmailAddress, Message,
            NewContactSubmission, SenderName,
        },
        optional_text,
    },
};

#[derive(Debug, Clone, Default)]
pub struct SubmitContactCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub car_model_interest: Option<String>,
    pub message: Option<String>,
}

pub struct UpdateContactStatusCommand {
    pub id: i64,
    pub status: String,
}

pub struct DeleteContactSubmissionCommand {
    pub id: i64,
}

pub struct ContactCommandService {
    repo: Arc<dyn ContactRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(repo: Arc<dyn ContactRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn submit(&self, command: SubmitContactCommand) -> ApplicationResult<ContactSubmissionDto> {
        let mut violations = FieldViolations::new();
        let name = violations.require("name", command.name, SenderName::new);
        let email = violations.require("email", command.email, EmailAddress::new);
        let message = violations.require("message", command.message, Message::new);
        violations.finish()?;

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(ApplicationError::validation("missing required fields"));
        };

        let submission = self
            .repo
            .insert(NewContactSubmission {
                name,
                email,
                phone: optional_text(command.phone),
                car_model_interest: optional_text(command.car_model_interest),
                message,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(submission_id = submission.id.0, "contact submission received");
        Ok(submission.into())
    }

    pub async fn update_status(
        &self,
        command: UpdateContactStatusCommand,
    ) -> ApplicationResult<ContactSubmissionDto> {
        let id = ContactSubmissionId::new(command.id)?;
        let status: ContactStatus = command.status.parse()?;
        let updated = self
            .repo
            .update_status(id, status, self.clock.now())
            .await?
            .ok_or_else(|| ApplicationError::not_found("contact submission not found"))?;

        tracing::info!(submission_id = command.id, %status, "contact submission status changed");
        Ok(updated.into())
    }

    pub async fn delete(&self, command: DeleteContactSubmissionCommand) -> ApplicationResult<()> {
        let id = ContactSubmissionId::new(command.id)?;
        if !self.repo.delete(id).await? {
            return Err(ApplicationError::not_found(
                "contact submission not found or could not be deleted",
            ));
        }
        tracing::info!(submission_id = command.id, "contact submission deleted");
        Ok(())
    }
}
