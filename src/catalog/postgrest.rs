use crate::catalog::error::StoreError;
use crate::catalog::query::{Direction, ListingQuery};
use crate::catalog::store::ListingStore;
use crate::config::StoreConfig;
use crate::models::ListingWithDetails;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Nested join requested for every listing query
const LISTING_SELECT: &str = "*,translations:car_translations(*),images:car_images(*)";

/// PostgREST-backed listing store (the hosted Supabase API)
pub struct PostgrestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PostgrestStore {
    /// Create a store from explicit configuration
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    fn cars_url(&self) -> String {
        format!("{}/rest/v1/cars", self.base_url)
    }

    /// Render a listing query as PostgREST filter parameters
    fn query_params(query: &ListingQuery) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), LISTING_SELECT.to_string())];

        if query.available_only {
            params.push(("is_available".to_string(), "eq.true".to_string()));
        }
        if let Some(spec) = query.spec {
            params.push(("spec".to_string(), format!("eq.{}", spec.as_str())));
        }
        if query.featured_only {
            params.push(("featured".to_string(), "eq.true".to_string()));
        }
        if let Some(brand) = &query.brand {
            // ilike without wildcards is case-insensitive equality
            params.push(("brand".to_string(), format!("ilike.{}", brand)));
        }
        if let Some(id) = &query.id {
            params.push(("id".to_string(), format!("eq.{}", id)));
        }

        let direction = match query.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        params.push(("order".to_string(), format!("{}.{}", query.order_by, direction)));

        if let Some(limit) = query.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }

    async fn get_rows(&self, params: &[(String, String)]) -> Result<String, StoreError> {
        let response = self
            .client
            .get(self.cars_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Store returned status {}", status);
            return Err(StoreError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ListingStore for PostgrestStore {
    async fn fetch_with_relations(
        &self,
        query: &ListingQuery,
    ) -> Result<Vec<ListingWithDetails>, StoreError> {
        let params = Self::query_params(query);
        debug!("Fetching listings with params: {:?}", params);

        let body = self.get_rows(&params).await?;
        let listings: Vec<ListingWithDetails> = serde_json::from_str(&body)?;

        debug!("Fetched {} listings", listings.len());
        Ok(listings)
    }

    async fn fetch_brands(&self) -> Result<Vec<String>, StoreError> {
        let params = vec![
            ("select".to_string(), "brand".to_string()),
            ("is_available".to_string(), "eq.true".to_string()),
        ];

        let body = self.get_rows(&params).await?;
        let rows: Vec<BrandRow> = serde_json::from_str(&body)?;

        Ok(rows.into_iter().map(|row| row.brand).collect())
    }
}

#[derive(Deserialize)]
struct BrandRow {
    brand: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpecClass;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn default_query_selects_available_newest_first() {
        let params = PostgrestStore::query_params(&ListingQuery::default());

        assert_eq!(param(&params, "select"), Some(LISTING_SELECT));
        assert_eq!(param(&params, "is_available"), Some("eq.true"));
        assert_eq!(param(&params, "order"), Some("created_at.desc"));
        assert_eq!(param(&params, "limit"), None);
        assert_eq!(param(&params, "spec"), None);
        assert_eq!(param(&params, "featured"), None);
    }

    #[test]
    fn spec_filter_renders_equality() {
        let query = ListingQuery {
            spec: Some(SpecClass::Korean),
            ..ListingQuery::default()
        };
        let params = PostgrestStore::query_params(&query);

        assert_eq!(param(&params, "spec"), Some("eq.korean"));
    }

    #[test]
    fn featured_query_renders_flag_and_limit() {
        let query = ListingQuery {
            featured_only: true,
            limit: Some(6),
            ..ListingQuery::default()
        };
        let params = PostgrestStore::query_params(&query);

        assert_eq!(param(&params, "featured"), Some("eq.true"));
        assert_eq!(param(&params, "limit"), Some("6"));
    }

    #[test]
    fn brand_filter_renders_ilike() {
        let query = ListingQuery {
            brand: Some("bmw".to_string()),
            ..ListingQuery::default()
        };
        let params = PostgrestStore::query_params(&query);

        assert_eq!(param(&params, "brand"), Some("ilike.bmw"));
    }

    #[test]
    fn id_filter_renders_equality() {
        let query = ListingQuery {
            id: Some("a1b2".to_string()),
            limit: Some(1),
            ..ListingQuery::default()
        };
        let params = PostgrestStore::query_params(&query);

        assert_eq!(param(&params, "id"), Some("eq.a1b2"));
        assert_eq!(param(&params, "limit"), Some("1"));
    }
}
