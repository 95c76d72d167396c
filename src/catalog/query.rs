use crate::models::SpecClass;

/// Ordering direction for a listing query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One catalog retrieval: filters, ordering and an optional row cap.
///
/// `Default` is the base query every operation starts from: available
/// listings only, newest first, no cap.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    /// Restrict to rows with the availability flag set
    pub available_only: bool,
    /// Equality filter on the specification class
    pub spec: Option<SpecClass>,
    /// Restrict to rows with the featured flag set
    pub featured_only: bool,
    /// Case-insensitive brand equality
    pub brand: Option<String>,
    /// Exact identifier match
    pub id: Option<String>,
    pub order_by: &'static str,
    pub direction: Direction,
    pub limit: Option<usize>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            available_only: true,
            spec: None,
            featured_only: false,
            brand: None,
            id: None,
            order_by: "created_at",
            direction: Direction::Descending,
            limit: None,
        }
    }
}
