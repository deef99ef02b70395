use std::sync::Arc;

use crate::{
    application::{dto::AboutPageDto, error::ApplicationResult},
    domain::about::AboutPageRepository,
};

pub struct AboutPageQueryService {
    repo: Arc<dyn AboutPageRepository>,
}

impl AboutPageQueryService {
    pub fn new(repo: Arc<dyn AboutPageRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_about_page(&self) -> ApplicationResult<AboutPageDto> {
        Ok(self.repo.load().await?.unwrap_or_default().into())
    }
}
