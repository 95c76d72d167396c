use crate::models::{Listing, ListingWithDetails};

/// In-memory refinement over an already fetched result set.
///
/// Mirrors the browse-page filter panel: every field is optional and an
/// unset field matches everything. Text comparisons ignore case. Runs
/// entirely on fetched aggregates and issues no queries.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub year: Option<i32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(brand) = &self.brand {
            if !listing.brand.eq_ignore_ascii_case(brand) {
                return false;
            }
        }
        // A price bound excludes listings with no price at all
        if self.min_price.is_some() || self.max_price.is_some() {
            match listing.price {
                Some(price) => {
                    if self.min_price.map_or(false, |min| price < min) {
                        return false;
                    }
                    if self.max_price.map_or(false, |max| price > max) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if let Some(year) = self.year {
            if listing.year != year {
                return false;
            }
        }
        if let Some(fuel) = &self.fuel_type {
            if !matches_text(listing.fuel_type.as_deref(), fuel) {
                return false;
            }
        }
        if let Some(transmission) = &self.transmission {
            if !matches_text(listing.transmission.as_deref(), transmission) {
                return false;
            }
        }
        true
    }

    /// Keep only the aggregates whose listing passes the filter
    pub fn apply(&self, listings: Vec<ListingWithDetails>) -> Vec<ListingWithDetails> {
        listings
            .into_iter()
            .filter(|car| self.matches(&car.listing))
            .collect()
    }
}

fn matches_text(value: Option<&str>, wanted: &str) -> bool {
    value.map_or(false, |v| v.eq_ignore_ascii_case(wanted))
}
