use std::sync::Arc;

use crate::{
    application::{
        dto::AdminPrincipal,
        error::{ApplicationError, ApplicationResult},
    },
    domain::car_model::{CarModel, CarModelReadRepository},
};

pub struct CarModelQueryService {
    pub(super) read_repo: Arc<dyn CarModelReadRepository>,
}

impl CarModelQueryService {
    pub fn new(read_repo: Arc<dyn CarModelReadRepository>) -> Self {
        Self { read_repo }
    }

    pub(super) fn ensure_visible(
        actor: Option<&AdminPrincipal>,
        model: &CarModel,
    ) -> ApplicationResult<()> {
        if model.published || actor.is_some() {
            Ok(())
        } else {
            Err(ApplicationError::not_found("car model not found"))
        }
    }
}
