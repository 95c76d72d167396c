use thiserror::Error;

/// Failure reported by the remote store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("store returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure surfaced to catalog consumers.
///
/// A listing that does not exist is not an error; `Catalog::get_by_id`
/// reports that case as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog retrieval failed: {0}")]
    Store(#[from] StoreError),
}
