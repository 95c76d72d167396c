use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::error::CatalogError;
use crate::catalog::query::ListingQuery;
use crate::catalog::store::ListingStore;
use crate::models::{ListingWithDetails, SpecClass};

/// The featured section never shows more than this many listings
const FEATURED_LIMIT: usize = 6;

/// Read-only catalog query service.
///
/// Holds an injected store; each operation issues a single query against it
/// and keeps no state between calls, so a `Catalog` can be shared freely
/// across concurrent page renders.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn ListingStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    /// Every available listing, newest first, optionally restricted to one
    /// specification class
    pub async fn list_all(
        &self,
        spec: Option<SpecClass>,
    ) -> Result<Vec<ListingWithDetails>, CatalogError> {
        let query = ListingQuery {
            spec,
            ..ListingQuery::default()
        };
        Ok(self.store.fetch_with_relations(&query).await?)
    }

    /// Featured listings for the home page, newest first, capped at six
    pub async fn list_featured(&self) -> Result<Vec<ListingWithDetails>, CatalogError> {
        let query = ListingQuery {
            featured_only: true,
            limit: Some(FEATURED_LIMIT),
            ..ListingQuery::default()
        };
        Ok(self.store.fetch_with_relations(&query).await?)
    }

    /// Single available listing by identifier.
    ///
    /// `Ok(None)` when no available listing has this identifier; `Err` is
    /// reserved for store failures.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<ListingWithDetails>, CatalogError> {
        let query = ListingQuery {
            id: Some(id.to_string()),
            limit: Some(1),
            ..ListingQuery::default()
        };
        let rows = self.store.fetch_with_relations(&query).await?;
        if rows.is_empty() {
            debug!("No available listing with id {}", id);
        }
        Ok(rows.into_iter().next())
    }

    /// Available listings whose brand matches case-insensitively, newest first
    pub async fn list_by_brand(
        &self,
        brand: &str,
    ) -> Result<Vec<ListingWithDetails>, CatalogError> {
        let query = ListingQuery {
            brand: Some(brand.to_string()),
            ..ListingQuery::default()
        };
        Ok(self.store.fetch_with_relations(&query).await?)
    }

    /// Distinct brands across available listings, sorted ascending
    pub async fn list_brands(&self) -> Result<Vec<String>, CatalogError> {
        let brands = self.store.fetch_brands().await?;
        let distinct: BTreeSet<String> = brands.into_iter().collect();
        Ok(distinct.into_iter().collect())
    }
}
