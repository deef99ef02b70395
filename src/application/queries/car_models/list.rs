use super::CarModelQueryService;
use crate::{
    application::{
        dto::{AdminPrincipal, CarModelDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{car_model::CarModelListFilter, optional_text, pagination::PageRequest},
};

#[derive(Debug, Clone, Default)]
pub struct ListCarModelsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub include_drafts: bool,
    pub category: Option<String>,
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
}

impl CarModelQueryService {
    pub async fn list_car_models(
        &self,
        actor: Option<&AdminPrincipal>,
        query: ListCarModelsQuery,
    ) -> ApplicationResult<Page<CarModelDto>> {
        if query.include_drafts && actor.is_none() {
            return Err(ApplicationError::forbidden(
                "authentication required for draft access",
            ));
        }

        let request = PageRequest::new(query.page, query.page_size);
        let filter = CarModelListFilter {
            published_only: !query.include_drafts,
            category: optional_text(query.category),
            search: optional_text(query.search),
        };

        let (records, total) = self.read_repo.list_page(&filter, request).await?;
        Ok(Page::new(records.into_iter().map(Into::into).collect(), request, total))
    }
}
