use anyhow::{Context, Result};
use std::env;

/// Connection settings for the hosted store.
///
/// Supplied explicitly to `PostgrestStore::new`; nothing in the catalog
/// reads the environment after startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base project URL, e.g. https://example.supabase.co
    pub url: String,
    /// Anonymous (read-only) API key
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read configuration from SUPABASE_URL and SUPABASE_ANON_KEY
    pub fn from_env() -> Result<Self> {
        let url = env::var("SUPABASE_URL").context("SUPABASE_URL is not set")?;
        let api_key = env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY is not set")?;
        Ok(Self { url, api_key })
    }
}
