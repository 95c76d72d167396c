//! Display helpers over a fetched aggregate.
//!
//! Duplicate same-language translations and duplicate primary flags are
//! tolerated; the first match in store-returned order wins.

use crate::models::{Image, Language, ListingWithDetails, Translation};

impl ListingWithDetails {
    /// First translation matching `language`
    pub fn translation(&self, language: Language) -> Option<&Translation> {
        self.translations.iter().find(|t| t.language == language)
    }

    /// Localized title, falling back to "<brand> <model> <year>" when the
    /// requested language has no non-empty title
    pub fn display_title(&self, language: Language) -> String {
        self.translation(language)
            .and_then(|t| t.title.as_deref())
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "{} {} {}",
                    self.listing.brand, self.listing.model, self.listing.year
                )
            })
    }

    /// Localized description when present
    pub fn display_description(&self, language: Language) -> Option<&str> {
        self.translation(language).and_then(|t| t.description.as_deref())
    }

    /// Localized feature strings in display order
    pub fn feature_list(&self, language: Language) -> &[String] {
        self.translation(language)
            .and_then(|t| t.features.as_deref())
            .unwrap_or(&[])
    }

    /// Image marked primary, else the first returned image, else `None`
    pub fn primary_image(&self) -> Option<&Image> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
    }

    /// Every image except the one resolved as primary
    pub fn gallery_images(&self) -> Vec<&Image> {
        match self.primary_image() {
            Some(primary) => self
                .images
                .iter()
                .filter(|image| image.id != primary.id)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Listing, SpecClass};
    use chrono::{TimeZone, Utc};

    fn image(id: &str, is_primary: bool) -> Image {
        Image {
            id: id.to_string(),
            car_id: "car".to_string(),
            image_url: format!("https://cdn.example/{}.jpg", id),
            alt_text: None,
            is_primary,
            sort_order: 0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn translation(language: Language, title: Option<&str>) -> Translation {
        Translation {
            id: "t".to_string(),
            car_id: "car".to_string(),
            language,
            title: title.map(str::to_string),
            description: None,
            features: None,
        }
    }

    fn car(translations: Vec<Translation>, images: Vec<Image>) -> ListingWithDetails {
        ListingWithDetails {
            listing: Listing {
                id: "car".to_string(),
                spec: SpecClass::Gcc,
                brand: "Nissan".to_string(),
                model: "Patrol".to_string(),
                year: 2023,
                price: None,
                mileage: None,
                fuel_type: None,
                transmission: None,
                engine_size: None,
                color: None,
                is_available: true,
                featured: false,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
            translations,
            images,
        }
    }

    #[test]
    fn title_uses_matching_translation() {
        let car = car(
            vec![translation(Language::En, Some("Nissan Patrol Platinum"))],
            vec![],
        );
        assert_eq!(car.display_title(Language::En), "Nissan Patrol Platinum");
    }

    #[test]
    fn title_falls_back_across_languages() {
        let car = car(vec![translation(Language::En, Some("Sedan X"))], vec![]);
        assert_eq!(car.display_title(Language::Ar), "Nissan Patrol 2023");
    }

    #[test]
    fn empty_title_falls_back_to_synthesized() {
        let car = car(vec![translation(Language::En, Some(""))], vec![]);
        assert_eq!(car.display_title(Language::En), "Nissan Patrol 2023");
    }

    #[test]
    fn primary_image_prefers_marked_image() {
        let car = car(vec![], vec![image("1", false), image("2", true)]);
        assert_eq!(car.primary_image().unwrap().id, "2");
    }

    #[test]
    fn primary_image_falls_back_to_first() {
        let car = car(vec![], vec![image("1", false), image("2", false)]);
        assert_eq!(car.primary_image().unwrap().id, "1");
    }

    #[test]
    fn primary_image_none_without_images() {
        let car = car(vec![], vec![]);
        assert!(car.primary_image().is_none());
    }

    #[test]
    fn gallery_excludes_resolved_primary() {
        let car = car(
            vec![],
            vec![image("1", false), image("2", true), image("3", false)],
        );
        let gallery: Vec<&str> = car
            .gallery_images()
            .iter()
            .map(|image| image.id.as_str())
            .collect();
        assert_eq!(gallery, vec!["1", "3"]);
    }
}
