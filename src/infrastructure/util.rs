use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_lowercase_hyphenated_ascii() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("GWM Tank 300 Launch"), "gwm-tank-300-launch");
        assert_eq!(slugger.slugify("  Promo -- Ramadhan!! "), "promo-ramadhan");
        assert_eq!(slugger.slugify("Café Crème"), "cafe-creme");
        assert_eq!(slugger.slugify("!!!"), "");
    }

    #[test]
    fn output_only_contains_slug_characters() {
        let slugger = DefaultSlugGenerator;
        for title in ["Haval H6 HEV: 2024 Review", "ORA 03 / GT", "___Tank___500___"] {
            let slug = slugger.slugify(title);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{slug}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
        }
    }
}
