//! JSON file loader for the table catalog.
//!
//! File format:
//!
//! ```json
//! {
//!   "countries": { "France": [{ "name": "Paris", "lat": 48.8566, "lon": 2.3522 }] },
//!   "aliases": { "FR": "France" }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::City;
use super::error::CatalogError;
use super::table::TableCatalog;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    countries: HashMap<String, Vec<City>>,
    #[serde(default)]
    aliases: HashMap<String, String>,
}

impl TableCatalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| CatalogError::DataUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let file: CatalogFile =
            serde_json::from_str(&contents).map_err(|e| CatalogError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let countries = file
            .countries
            .into_iter()
            .map(|(name, cities)| {
                let cities = cities
                    .into_iter()
                    .map(|city| City::new(city.name.trim(), city.lat, city.lon))
                    .collect();
                (name.trim().to_string(), cities)
            })
            .collect();

        let aliases = file
            .aliases
            .into_iter()
            .map(|(alias, canonical)| (alias.trim().to_string(), canonical.trim().to_string()))
            .collect();

        Ok(Self { countries, aliases })
    }
}
