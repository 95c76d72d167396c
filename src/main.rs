use std::sync::Arc;

use car_catalog::{Catalog, Language, PostgrestStore, StoreConfig};
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🚗 Car Catalog - Supabase browser");
    info!("==================================");
    info!("");

    let config = StoreConfig::from_env()?;
    let store = PostgrestStore::new(config)?;
    let catalog = Catalog::new(Arc::new(store));

    info!("Fetching featured listings...");
    let featured = catalog.list_featured().await?;
    info!("✅ {} featured listings", featured.len());

    info!("Fetching the full catalog...");
    let cars = catalog.list_all(None).await?;
    info!("✅ {} listings available", cars.len());
    info!("");

    for (i, car) in cars.iter().enumerate() {
        println!("{}. {}", i + 1, car.display_title(Language::En));
        if let Some(price) = car.listing.price {
            println!("   Price: {} AED", price);
        }
        println!("   Spec: {} | Year: {}", car.listing.spec.as_str(), car.listing.year);
        println!("   Images: {}", car.images.len());
        println!("   ID: {}", car.listing.id);
        println!();
    }

    let brands = catalog.list_brands().await?;
    info!("Brands in stock: {}", brands.join(", "));

    // Save the fetched aggregates for offline inspection
    let json = serde_json::to_string_pretty(&cars)?;
    tokio::fs::write("catalog_listings.json", json).await?;
    info!("💾 Saved {} listings to catalog_listings.json", cars.len());

    Ok(())
}
