// src/application/commands/car_models/create.rs
use super::{
    CarModelCommandService,
    inputs::{CarColorInput, GalleryImageInput, build_colors, build_gallery, check_price, clean_features},
};
use crate::{
    application::{
        dto::CarModelDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldViolations,
    },
    domain::{
        car_model::{CarModelCategory, CarModelName, CarModelSlug, NewCarModel},
        optional_text,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateCarModelCommand {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<i64>,
    pub main_image_url: Option<String>,
    pub brochure_url: Option<String>,
    pub features: Vec<String>,
    pub colors: Vec<CarColorInput>,
    pub gallery: Vec<GalleryImageInput>,
    pub published: bool,
    pub display_order: Option<i32>,
}

impl CarModelCommandService {
    pub async fn create_car_model(
        &self,
        command: CreateCarModelCommand,
    ) -> ApplicationResult<CarModelDto> {
        let mut violations = FieldViolations::new();
        let name = violations.require("name", command.name, CarModelName::new);
        let category = violations.require("category", command.category, CarModelCategory::new);
        check_price(&mut violations, command.starting_price);
        let colors = build_colors(&mut violations, command.colors);
        let gallery = build_gallery(&mut violations, command.gallery);
        violations.finish()?;

        let (Some(name), Some(category)) = (name, category) else {
            return Err(ApplicationError::validation("missing required fields"));
        };

        let slug = self
            .slugs
            .assign_for_create(name.as_str(), command.slug.as_deref())
            .await?;
        let slug = CarModelSlug::new(slug)?;
        let description = self.clean_description(command.description)?;

        let now = self.clock.now();
        let new_model = NewCarModel {
            name,
            slug,
            category,
            tagline: optional_text(command.tagline),
            description,
            starting_price: command.starting_price,
            main_image_url: optional_text(command.main_image_url),
            brochure_url: optional_text(command.brochure_url),
            features: clean_features(command.features),
            colors,
            gallery,
            published: command.published,
            display_order: command.display_order.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let created = self
            .write_repo
            .insert(new_model)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("failed to create car model"))?;

        tracing::info!(car_model_id = created.id.0, slug = %created.slug, "car model created");
        Ok(created.into())
    }
}
