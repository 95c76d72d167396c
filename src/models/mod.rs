use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Regulatory/market specification class of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpecClass {
    Gcc,
    Korean,
}

impl SpecClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecClass::Gcc => "gcc",
            SpecClass::Korean => "korean",
        }
    }
}

/// Catalog display language
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

/// Core vehicle listing row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub spec: SpecClass,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: Option<f64>,
    pub mileage: Option<f64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub engine_size: Option<String>,
    pub color: Option<String>,
    pub is_available: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Localized text content for one listing and one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub id: String,
    pub car_id: String,
    pub language: Language,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Feature strings in display order
    pub features: Option<Vec<String>>,
}

/// Photo attached to a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub car_id: String,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub is_primary: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// A listing with its translations and images attached, as returned by
/// every catalog query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingWithDetails {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub images: Vec<Image>,
}
