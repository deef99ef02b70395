// src/application/commands/car_models/delete.rs
use super::CarModelCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::car_model::CarModelId,
};

const NOT_DELETED: &str = "car model not found or could not be deleted";

pub struct DeleteCarModelCommand {
    pub id: i64,
}

impl CarModelCommandService {
    pub async fn delete_car_model(&self, command: DeleteCarModelCommand) -> ApplicationResult<()> {
        let id = CarModelId::new(command.id)?;
        let model = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(NOT_DELETED))?;

        if !self.write_repo.delete(id).await? {
            return Err(ApplicationError::not_found(NOT_DELETED));
        }

        tracing::info!(car_model_id = command.id, "car model deleted");
        self.janitor.release(model.image_urls()).await;
        Ok(())
    }
}
