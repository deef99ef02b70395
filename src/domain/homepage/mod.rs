pub mod entity;
pub mod repository;

pub use entity::{FeatureCard, HeroBlock, HomepageConfig, HomepageSection, SectionBody, SectionKind};
pub use repository::HomepageRepository;
