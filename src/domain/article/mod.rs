pub mod entity;
pub mod publish;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, PublishStateUpdate};
pub use publish::compute_published_at;
pub use repository::{ArticleListFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleCategory, ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle,
};
