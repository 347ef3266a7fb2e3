//! City candidate resolution.
//!
//! Picks a start and end city for a pair of countries and assembles a
//! deduplicated pool of cities a richer multi-stop plan may visit,
//! passing through bridge countries where a direct hop is unrealistic.
//!
//! All randomness comes from the caller's RNG, so a seeded RNG gives a
//! reproducible selection.

mod bridges;
mod error;

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{SliceRandom, index};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{City, ReferenceCatalog};

pub use bridges::BridgeTable;
pub use error::CandidateError;

/// Maximum redraws when looking for an end city distinct from the start.
const DISTINCT_END_ATTEMPTS: usize = 10;

/// Result of candidate resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitySelection {
    pub start_city: String,
    pub end_city: String,
    /// Start, sampled mid cities, then end; no case/whitespace duplicates.
    pub candidates: Vec<String>,
    /// Countries passed through between the two endpoints.
    pub bridge_countries: Vec<String>,
}

/// Resolves countries to candidate cities using a catalog and bridge table.
pub struct CandidateResolver<'a> {
    catalog: &'a dyn ReferenceCatalog,
    bridges: &'a BridgeTable,
}

impl<'a> CandidateResolver<'a> {
    pub fn new(catalog: &'a dyn ReferenceCatalog, bridges: &'a BridgeTable) -> Self {
        Self { catalog, bridges }
    }

    /// Draw one start city from `from_country` and one end city from `to_country`.
    ///
    /// When both countries are the same and have more than one city, the end
    /// draw is retried a bounded number of times to avoid repeating the
    /// start. A repeat is still possible.
    pub fn choose_city_pair<R: Rng + ?Sized>(
        &self,
        from_country: &str,
        to_country: &str,
        rng: &mut R,
    ) -> Result<(String, String), CandidateError> {
        let from_list = self.catalog.cities_for(from_country);
        let to_list = self.catalog.cities_for(to_country);

        let start = from_list.choose(rng).ok_or_else(|| CandidateError::NoCities {
            role: "from_country",
            country: from_country.to_string(),
        })?;
        let mut end = to_list.choose(rng).ok_or_else(|| CandidateError::NoCities {
            role: "to_country",
            country: to_country.to_string(),
        })?;

        if same_key(from_country, to_country) && from_list.len() > 1 {
            let mut attempts = 0;
            while end.name == start.name && attempts < DISTINCT_END_ATTEMPTS {
                if let Some(redraw) = to_list.choose(rng) {
                    end = redraw;
                }
                attempts += 1;
            }
        }

        Ok((start.name.clone(), end.name.clone()))
    }

    /// Build the candidate set for a trip from `from_country` to `to_country`.
    ///
    /// `max_cities` is the desired size of the set including start and end;
    /// values below 2 are raised to 2 and the result never exceeds the
    /// number of distinct cities available.
    pub fn build<R: Rng + ?Sized>(
        &self,
        from_country: &str,
        to_country: &str,
        max_cities: usize,
        rng: &mut R,
    ) -> Result<CitySelection, CandidateError> {
        let from_country = self.catalog.canonicalize(from_country);
        let to_country = self.catalog.canonicalize(to_country);

        let bridge = self.bridges.lookup(&from_country, &to_country).to_vec();

        let countries_pool: Vec<&str> = std::iter::once(from_country.as_str())
            .chain(bridge.iter().map(String::as_str))
            .chain(std::iter::once(to_country.as_str()))
            .collect();

        let (start_city, end_city) = self.choose_city_pair(&from_country, &to_country, rng)?;

        let pool = unique_keep_order(
            countries_pool
                .iter()
                .flat_map(|country| self.catalog.cities_for(country))
                .map(|city: &City| city.name.as_str()),
        );

        let remaining: Vec<&String> = pool
            .iter()
            .filter(|name| **name != start_city && **name != end_city)
            .collect();

        let mid_needed = max_cities.saturating_sub(2).min(remaining.len());

        let mid = index::sample(rng, remaining.len(), mid_needed)
            .into_iter()
            .map(|i| remaining[i].as_str());

        let candidates = unique_keep_order(
            std::iter::once(start_city.as_str())
                .chain(mid)
                .chain(std::iter::once(end_city.as_str())),
        );

        debug!(
            from = %from_country,
            to = %to_country,
            bridges = ?bridge,
            count = candidates.len(),
            "resolved city candidates"
        );

        Ok(CitySelection {
            start_city,
            end_city,
            candidates,
            bridge_countries: bridge,
        })
    }
}

/// Dedup key: trimmed and lowercased.
fn dedup_key(s: &str) -> String {
    s.trim().to_lowercase()
}

fn same_key(a: &str, b: &str) -> bool {
    dedup_key(a) == dedup_key(b)
}

/// Trim each item and drop empty or case-insensitive duplicates, keeping
/// the first spelling seen.
fn unique_keep_order<'s>(items: impl IntoIterator<Item = &'s str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| {
            let key = dedup_key(item);
            (!key.is_empty() && seen.insert(key)).then(|| item.trim().to_string())
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalog::TableCatalog;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn country() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "India",
            "United Arab Emirates",
            "United States",
            "United Kingdom",
            "France",
            "Italy",
            "Germany",
            "Austria",
            "Spain",
            "Greece",
        ])
    }

    proptest! {
        #[test]
        fn candidates_contain_endpoints_without_duplicates(
            from in country(),
            to in country(),
            max_cities in 0usize..20,
            seed in any::<u64>(),
        ) {
            let catalog = TableCatalog::builtin();
            let bridges = BridgeTable::builtin();
            let resolver = CandidateResolver::new(&catalog, &bridges);
            let mut rng = SmallRng::seed_from_u64(seed);

            let selection = resolver.build(from, to, max_cities, &mut rng).unwrap();

            prop_assert!(selection.candidates.contains(&selection.start_city));
            prop_assert!(selection.candidates.contains(&selection.end_city));

            let keys: HashSet<String> = selection.candidates.iter().map(|c| dedup_key(c)).collect();
            prop_assert_eq!(keys.len(), selection.candidates.len());
            prop_assert!(selection.candidates.len() <= max_cities.max(2));
        }
    }
}
