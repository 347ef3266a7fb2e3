//! Reference catalog of countries and their cities.
//!
//! The planner never touches raw tables directly; it goes through the
//! [`ReferenceCatalog`] trait so the built-in tables can be swapped for a
//! file or a live geocoding source.

mod data;
mod error;
mod file;
mod table;

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::geo::LatLon;

pub use error::CatalogError;
pub use table::TableCatalog;

/// A named city with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    pub fn location(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

/// Source of country and city reference data.
pub trait ReferenceCatalog: Send + Sync {
    /// Map a user-entered country name to its canonical form.
    ///
    /// Trims whitespace and resolves known aliases. Unknown names pass
    /// through unchanged; matching is case-sensitive.
    fn canonicalize(&self, name: &str) -> String;

    /// Configured cities for a canonical country name, in preference order.
    ///
    /// Empty if the country is unknown.
    fn cities_for(&self, country: &str) -> &[City];

    /// Canonical names of all countries with configured cities, sorted.
    fn supported_countries(&self) -> Vec<String>;

    /// The representative city for a country.
    ///
    /// This is the first configured city. For a country the catalog does
    /// not know, a placeholder named `"<country> City"` at (0, 0) is
    /// returned instead of an error. Callers must not treat that
    /// placeholder as a real location.
    fn hub_city(&self, country: &str) -> Cow<'_, City> {
        let canonical = self.canonicalize(country);
        match self.cities_for(&canonical).first() {
            Some(city) => Cow::Borrowed(city),
            None => Cow::Owned(City::new(format!("{canonical} City"), 0.0, 0.0)),
        }
    }
}

/// Up to `limit` distinct city names for a country, in catalog order.
///
/// The country name is canonicalized first; a limit of zero still yields
/// one city.
pub fn top_cities(catalog: &dyn ReferenceCatalog, country: &str, limit: usize) -> Vec<String> {
    let country = catalog.canonicalize(country);
    if country.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    catalog
        .cities_for(&country)
        .iter()
        .map(|c| c.name.trim())
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .take(limit.max(1))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_city_is_first_configured() {
        let catalog = TableCatalog::builtin();
        let hub = catalog.hub_city("France");
        assert_eq!(hub.name, "Paris");
        assert_eq!(hub.location(), LatLon::new(48.8566, 2.3522));
    }

    #[test]
    fn hub_city_resolves_aliases() {
        let catalog = TableCatalog::builtin();
        assert_eq!(catalog.hub_city(" UAE ").name, "Dubai");
        assert_eq!(catalog.hub_city("USA").name, "New York");
    }

    #[test]
    fn hub_city_placeholder_for_unknown_country() {
        let catalog = TableCatalog::builtin();
        let hub = catalog.hub_city("Atlantis");
        assert!(matches!(hub, Cow::Owned(_)));
        assert_eq!(hub.name, "Atlantis City");
        assert_eq!((hub.lat, hub.lon), (0.0, 0.0));
    }

    #[test]
    fn top_cities_limits_and_canonicalizes() {
        let catalog = TableCatalog::builtin();
        assert_eq!(
            top_cities(&catalog, "Italy", 3),
            vec!["Rome", "Milan", "Florence"]
        );
        assert_eq!(top_cities(&catalog, "UK", 0), vec!["London"]);
        assert!(top_cities(&catalog, "Atlantis", 5).is_empty());
        assert!(top_cities(&catalog, "   ", 5).is_empty());
    }

    #[test]
    fn top_cities_skips_duplicates() {
        let catalog = TableCatalog::new().with_country(
            "Testland",
            vec![
                City::new("Alpha", 1.0, 1.0),
                City::new(" Alpha ", 1.0, 1.0),
                City::new("Beta", 2.0, 2.0),
            ],
        );
        assert_eq!(top_cities(&catalog, "Testland", 5), vec!["Alpha", "Beta"]);
    }
}
