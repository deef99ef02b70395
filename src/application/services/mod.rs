// src/application/services/mod.rs
pub mod content;
pub mod media;

use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            about::AboutPageCommandService, articles::ArticleCommandService,
            car_models::CarModelCommandService, contact::ContactCommandService,
            homepage::HomepageCommandService, media::MediaCommandService,
        },
        dto::AdminPrincipal,
        ports::{
            html::{HtmlSanitizer, SanitizeFailurePolicy},
            security::AdminAuthenticator,
            storage::ObjectStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            about::AboutPageQueryService, articles::ArticleQueryService,
            car_models::CarModelQueryService, contact::ContactQueryService,
            homepage::HomepageQueryService,
        },
    },
    domain::{
        about::AboutPageRepository,
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugOwnership},
        car_model::{CarModelReadRepository, CarModelSlugOwnership, CarModelWriteRepository},
        contact::ContactRepository,
        homepage::HomepageRepository,
        slug::SlugAssigner,
    },
};

use self::{content::ContentSanitizer, media::ImageJanitor};

/// Persistence adapters, one per aggregate.
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub car_model_write: Arc<dyn CarModelWriteRepository>,
    pub car_model_read: Arc<dyn CarModelReadRepository>,
    pub homepage: Arc<dyn HomepageRepository>,
    pub about: Arc<dyn AboutPageRepository>,
    pub contact: Arc<dyn ContactRepository>,
}

/// Non-persistence collaborators.
pub struct Adapters {
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub html_sanitizer: Arc<dyn HtmlSanitizer>,
    pub storage: Arc<dyn ObjectStorage>,
    pub authenticator: Arc<dyn AdminAuthenticator>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub car_model_commands: Arc<CarModelCommandService>,
    pub car_model_queries: Arc<CarModelQueryService>,
    pub homepage_commands: Arc<HomepageCommandService>,
    pub homepage_queries: Arc<HomepageQueryService>,
    pub about_commands: Arc<AboutPageCommandService>,
    pub about_queries: Arc<AboutPageQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub contact_queries: Arc<ContactQueryService>,
    pub media_commands: Arc<MediaCommandService>,
    authenticator: Arc<dyn AdminAuthenticator>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        adapters: Adapters,
        sanitize_policy: SanitizeFailurePolicy,
    ) -> Self {
        let Adapters {
            clock,
            slugger,
            html_sanitizer,
            storage,
            authenticator,
        } = adapters;

        let sanitizer = Arc::new(ContentSanitizer::new(html_sanitizer, sanitize_policy));
        let janitor = Arc::new(ImageJanitor::new(Arc::clone(&storage)));

        let article_slugs = Arc::new(SlugAssigner::new(
            Arc::new(ArticleSlugOwnership::new(Arc::clone(&repos.article_read))),
            Arc::clone(&slugger),
            Arc::clone(&clock),
            "article",
        ));
        let car_model_slugs = Arc::new(SlugAssigner::new(
            Arc::new(CarModelSlugOwnership::new(Arc::clone(&repos.car_model_read))),
            Arc::clone(&slugger),
            Arc::clone(&clock),
            "car-model",
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            article_slugs,
            Arc::clone(&sanitizer),
            Arc::clone(&janitor),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&repos.article_read)));

        let car_model_commands = Arc::new(CarModelCommandService::new(
            Arc::clone(&repos.car_model_write),
            Arc::clone(&repos.car_model_read),
            car_model_slugs,
            Arc::clone(&sanitizer),
            Arc::clone(&janitor),
            Arc::clone(&clock),
        ));
        let car_model_queries =
            Arc::new(CarModelQueryService::new(Arc::clone(&repos.car_model_read)));

        let homepage_commands = Arc::new(HomepageCommandService::new(
            Arc::clone(&repos.homepage),
            Arc::clone(&sanitizer),
            Arc::clone(&janitor),
            Arc::clone(&clock),
        ));
        let homepage_queries = Arc::new(HomepageQueryService::new(Arc::clone(&repos.homepage)));

        let about_commands = Arc::new(AboutPageCommandService::new(
            Arc::clone(&repos.about),
            Arc::clone(&sanitizer),
            Arc::clone(&janitor),
            Arc::clone(&clock),
        ));
        let about_queries = Arc::new(AboutPageQueryService::new(Arc::clone(&repos.about)));

        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&repos.contact),
            Arc::clone(&clock),
        ));
        let contact_queries = Arc::new(ContactQueryService::new(Arc::clone(&repos.contact)));

        let media_commands = Arc::new(MediaCommandService::new(storage));

        Self {
            article_commands,
            article_queries,
            car_model_commands,
            car_model_queries,
            homepage_commands,
            homepage_queries,
            about_commands,
            about_queries,
            contact_commands,
            contact_queries,
            media_commands,
            authenticator,
        }
    }

    /// Resolve a raw bearer token to the admin it belongs to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        self.authenticator.authenticate(token).await
    }
}
