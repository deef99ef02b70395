use std::sync::Arc;

use crate::{
    application::{dto::HomepageDto, error::ApplicationResult},
    domain::homepage::HomepageRepository,
};

pub struct HomepageQueryService {
    repo: Arc<dyn HomepageRepository>,
}

impl HomepageQueryService {
    pub fn new(repo: Arc<dyn HomepageRepository>) -> Self {
        Self { repo }
    }

    /// The saved homepage, or an empty one before the first save.
    pub async fn get_homepage(&self) -> ApplicationResult<HomepageDto> {
        let config = self.repo.load().await?.unwrap_or_default();
        Ok(config.into())
    }
}
