// tests/support/builders.rs
use showroom_cms::domain::article::*;
use showroom_cms::domain::car_model::*;

use super::mocks::FIXED_NOW;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    category: String,
    featured_image_url: Option<String>,
    published: bool,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            content: "<p>Test body</p>".into(),
            category: "News".into(),
            featured_image_url: None,
            published: false,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image_url = Some(url.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Article {
        let now = *FIXED_NOW;
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            excerpt: ArticleExcerpt::new("Excerpt").unwrap(),
            category: ArticleCategory::new(self.category).unwrap(),
            featured_image_url: self.featured_image_url,
            featured_image_alt: None,
            youtube_url: None,
            published: self.published,
            published_at: self.published.then_some(now),
            meta_description: None,
            created_at: now,
            updated_at: now,
        }
    }
}

pub struct CarModelBuilder {
    id: i64,
    name: String,
    slug: String,
    category: String,
    display_order: i32,
    main_image_url: Option<String>,
    published: bool,
}

impl CarModelBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Tank 300".into(),
            slug: "tank-300".into(),
            category: "SUV".into(),
            display_order: 0,
            main_image_url: None,
            published: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>, slug: impl Into<String>) -> Self {
        self.name = name.into();
        self.slug = slug.into();
        self
    }

    pub fn display_order(mut self, order: i32) -> Self {
        self.display_order = order;
        self
    }

    pub fn main_image(mut self, url: impl Into<String>) -> Self {
        self.main_image_url = Some(url.into());
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn build(self) -> CarModel {
        let now = *FIXED_NOW;
        CarModel {
            id: CarModelId::new(self.id).unwrap(),
            name: CarModelName::new(self.name).unwrap(),
            slug: CarModelSlug::new(self.slug).unwrap(),
            category: CarModelCategory::new(self.category).unwrap(),
            tagline: None,
            description: None,
            starting_price: Some(850_000_000),
            main_image_url: self.main_image_url,
            brochure_url: None,
            features: vec![],
            colors: vec![],
            gallery: vec![],
            published: self.published,
            display_order: self.display_order,
            created_at: now,
            updated_at: now,
        }
    }
}
