// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_about;
mod postgres_article;
mod postgres_car_model;
mod postgres_contact;
mod postgres_homepage;

pub use error::map_sqlx;
pub use postgres_about::PostgresAboutPageRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_car_model::{PostgresCarModelReadRepository, PostgresCarModelWriteRepository};
pub use postgres_contact::PostgresContactRepository;
pub use postgres_homepage::PostgresHomepageRepository;
