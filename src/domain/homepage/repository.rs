use crate::domain::errors::DomainResult;
use crate::domain::homepage::entity::HomepageConfig;
use async_trait::async_trait;

#[async_trait]
pub trait HomepageRepository: Send + Sync {
    /// `None` until the homepage has been saved once.
    async fn load(&self) -> DomainResult<Option<HomepageConfig>>;
    /// Replace the config row and every section row in one transaction.
    async fn replace(&self, config: HomepageConfig) -> DomainResult<HomepageConfig>;
}
