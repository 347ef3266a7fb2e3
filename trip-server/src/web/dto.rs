//! Data transfer objects for web requests and responses.
//!
//! Plans and candidate selections are serialized directly from their
//! domain types.

use serde::{Deserialize, Serialize};

/// Default number of cities returned for a country.
pub const DEFAULT_CITY_LIMIT: usize = 5;

/// Default candidate set size.
pub const DEFAULT_MAX_CITIES: usize = 5;

/// Response listing supported countries.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountriesResponse {
    /// Canonical country names, sorted ascending
    pub countries: Vec<String>,
}

/// Query for a country's cities.
#[derive(Debug, Deserialize)]
pub struct CitiesQuery {
    /// Maximum cities to return (at least one is always returned)
    pub limit: Option<usize>,
}

/// Response listing a country's cities.
#[derive(Debug, Serialize, Deserialize)]
pub struct CitiesResponse {
    /// Canonical country name
    pub country: String,

    /// City names in preference order
    pub cities: Vec<String>,
}

/// Request to resolve city candidates.
#[derive(Debug, Deserialize)]
pub struct CandidatesRequest {
    pub from_country: String,
    pub to_country: String,

    /// Desired candidate count including start and end
    #[serde(default = "default_max_cities")]
    pub max_cities: usize,

    /// Seed for a reproducible selection
    pub seed: Option<u64>,
}

fn default_max_cities() -> usize {
    DEFAULT_MAX_CITIES
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
