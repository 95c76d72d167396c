pub mod catalog;
pub mod config;
pub mod models;
pub mod view;

pub use catalog::{
    Catalog, CatalogError, ListingFilter, ListingQuery, ListingStore, PostgrestStore, StoreError,
};
pub use config::StoreConfig;
pub use models::{Image, Language, Listing, ListingWithDetails, SpecClass, Translation};
