// src/application/commands/car_models/inputs.rs
use crate::{
    application::validation::FieldViolations,
    domain::car_model::{CarColor, GalleryImage},
};

#[derive(Debug, Clone, Default)]
pub struct CarColorInput {
    pub name: Option<String>,
    pub hex_code: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryImageInput {
    pub url: Option<String>,
    pub alt: Option<String>,
}

fn present(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

pub(super) fn build_colors(
    violations: &mut FieldViolations,
    inputs: Vec<CarColorInput>,
) -> Vec<CarColor> {
    let mut colors = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.into_iter().enumerate() {
        let has_name = present(input.name.as_ref());
        let has_hex = present(input.hex_code.as_ref());
        if !has_name {
            violations.missing(format!("colors[{index}].name"));
        }
        if !has_hex {
            violations.missing(format!("colors[{index}].hex_code"));
        }
        if !(has_name && has_hex) {
            continue;
        }
        let built = CarColor::new(
            input.name.unwrap_or_default(),
            input.hex_code.unwrap_or_default(),
            input.image_url,
        );
        if let Some(color) = violations.check(built) {
            colors.push(color);
        }
    }
    colors
}

pub(super) fn build_gallery(
    violations: &mut FieldViolations,
    inputs: Vec<GalleryImageInput>,
) -> Vec<GalleryImage> {
    let mut gallery = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.into_iter().enumerate() {
        let alt = input.alt;
        if let Some(image) = violations.require(format!("gallery[{index}].url"), input.url, |url| {
            GalleryImage::new(url, alt)
        }) {
            gallery.push(image);
        }
    }
    gallery
}

pub(super) fn clean_features(features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

pub(super) fn check_price(violations: &mut FieldViolations, price: Option<i64>) {
    if price.is_some_and(|p| p < 0) {
        violations.invalid("starting_price must not be negative");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_problems_are_reported_with_positions() {
        let mut violations = FieldViolations::new();
        let colors = build_colors(
            &mut violations,
            vec![
                CarColorInput {
                    name: Some("Hamilton White".into()),
                    hex_code: Some("#f5f5f5".into()),
                    image_url: None,
                },
                CarColorInput {
                    name: None,
                    hex_code: Some("#000000".into()),
                    image_url: None,
                },
                CarColorInput {
                    name: Some("Red".into()),
                    hex_code: Some("red".into()),
                    image_url: None,
                },
            ],
        );
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].hex_code, "#F5F5F5");
        let msg = violations.finish().unwrap_err().to_string();
        assert!(msg.contains("missing required fields: colors[1].name"), "{msg}");
        assert!(msg.contains("color Red needs a #RRGGBB hex code"), "{msg}");
    }

    #[test]
    fn gallery_entries_need_urls() {
        let mut violations = FieldViolations::new();
        let gallery = build_gallery(
            &mut violations,
            vec![
                GalleryImageInput {
                    url: Some("https://cdn/a.jpg".into()),
                    alt: None,
                },
                GalleryImageInput::default(),
            ],
        );
        assert_eq!(gallery.len(), 1);
        let msg = violations.finish().unwrap_err().to_string();
        assert!(msg.contains("gallery[1].url"), "{msg}");
    }

    #[test]
    fn features_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            clean_features(vec![" 4x4 ".into(), String::new(), "ADAS".into()]),
            vec!["4x4".to_string(), "ADAS".to_string()]
        );
    }
}
