use crate::catalog::error::StoreError;
use crate::catalog::query::ListingQuery;
use crate::models::ListingWithDetails;
use async_trait::async_trait;

/// Remote store boundary for the catalog.
///
/// One seam for the nested listing join plus the brand projection, so tests
/// can swap in an in-memory store instead of the hosted API.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Fetch listings matching `query`, each with its translations and
    /// images attached. Zero matches is an empty Vec, not an error.
    async fn fetch_with_relations(
        &self,
        query: &ListingQuery,
    ) -> Result<Vec<ListingWithDetails>, StoreError>;

    /// Brand column of every available listing, duplicates included
    async fn fetch_brands(&self) -> Result<Vec<String>, StoreError>;
}
