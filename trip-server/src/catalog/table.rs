//! In-memory table catalog.

use std::collections::HashMap;

use super::data::{ALIASES, COUNTRY_CITIES};
use super::{City, ReferenceCatalog};

/// Catalog backed by plain lookup tables.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    pub(super) countries: HashMap<String, Vec<City>>,
    pub(super) aliases: HashMap<String, String>,
}

impl TableCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        let countries = COUNTRY_CITIES
            .iter()
            .map(|(country, cities)| {
                let cities = cities
                    .iter()
                    .map(|(name, lat, lon)| City::new(*name, *lat, *lon))
                    .collect();
                (country.to_string(), cities)
            })
            .collect();

        let aliases = ALIASES
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();

        Self { countries, aliases }
    }

    /// Add or replace a country's city list.
    pub fn with_country(mut self, country: impl Into<String>, cities: Vec<City>) -> Self {
        self.countries.insert(country.into(), cities);
        self
    }

    /// Add an alias for a canonical country name.
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    /// Number of countries with at least one city.
    pub fn len(&self) -> usize {
        self.countries.values().filter(|c| !c.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReferenceCatalog for TableCatalog {
    fn canonicalize(&self, name: &str) -> String {
        let name = name.trim();
        if name.is_empty() {
            return String::new();
        }
        self.aliases
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    fn cities_for(&self, country: &str) -> &[City] {
        self.countries
            .get(country.trim())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn supported_countries(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .countries
            .iter()
            .filter(|(_, cities)| !cities.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }
}
