use std::sync::Arc;

use crate::domain::car_model::entity::{CarModel, CarModelUpdate, NewCarModel};
use crate::domain::car_model::value_objects::{CarModelId, CarModelSlug};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::slug::SlugOwnership;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct CarModelListFilter {
    pub published_only: bool,
    pub category: Option<String>,
    pub search: Option<String>,
}

#[async_trait]
pub trait CarModelWriteRepository: Send + Sync {
    async fn insert(&self, model: NewCarModel) -> DomainResult<Option<CarModel>>;
    async fn update(&self, update: CarModelUpdate) -> DomainResult<Option<CarModel>>;
    async fn delete(&self, id: CarModelId) -> DomainResult<bool>;
}

#[async_trait]
pub trait CarModelReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CarModelId) -> DomainResult<Option<CarModel>>;
    async fn find_by_slug(&self, slug: &CarModelSlug) -> DomainResult<Option<CarModel>>;
    /// Ordered by display order, then name.
    async fn list_page(
        &self,
        filter: &CarModelListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<CarModel>, u64)>;
}

pub struct CarModelSlugOwnership {
    read_repo: Arc<dyn CarModelReadRepository>,
}

impl CarModelSlugOwnership {
    pub fn new(read_repo: Arc<dyn CarModelReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl SlugOwnership for CarModelSlugOwnership {
    async fn owner_of(&self, slug: &str) -> DomainResult<Option<i64>> {
        let Ok(slug) = CarModelSlug::new(slug) else {
            return Ok(None);
        };
        Ok(self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .map(|model| model.id.into()))
    }
}
