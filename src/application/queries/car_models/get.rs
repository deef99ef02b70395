use super::CarModelQueryService;
use crate::{
    application::{
        dto::{AdminPrincipal, CarModelDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::car_model::{CarModelId, CarModelSlug},
};

pub struct GetCarModelByIdQuery {
    pub id: i64,
}

pub struct GetCarModelBySlugQuery {
    pub slug: String,
}

impl CarModelQueryService {
    pub async fn get_car_model_by_id(
        &self,
        actor: Option<&AdminPrincipal>,
        query: GetCarModelByIdQuery,
    ) -> ApplicationResult<CarModelDto> {
        let id = CarModelId::new(query.id)?;
        let model = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("car model not found"))?;

        Self::ensure_visible(actor, &model)?;
        Ok(model.into())
    }

    pub async fn get_car_model_by_slug(
        &self,
        actor: Option<&AdminPrincipal>,
        query: GetCarModelBySlugQuery,
    ) -> ApplicationResult<CarModelDto> {
        let slug = CarModelSlug::new(query.slug)?;
        let model = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("car model not found"))?;

        Self::ensure_visible(actor, &model)?;
        Ok(model.into())
    }
}
