//! Plan synthesis.
//!
//! Resolves a country chain to hub cities, estimates the legs between
//! them, splits the budget and lays out a day-by-day skeleton.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::catalog::{City, ReferenceCatalog};
use crate::geo::TravelMode;

use super::config::PlanConfig;
use super::cost::{CostBreakdown, allocate};
use super::error::PlanError;
use super::legs::{LegEstimator, RouteLeg};
use super::request::PlanRequest;

/// Headline transport mode of a whole plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingMode {
    /// Every leg shares this mode. A plan with no legs is a `Stay`.
    Uniform(TravelMode),
    /// Legs use more than one mode.
    Mixed,
}

impl RoutingMode {
    /// Summarize the modes of a leg list.
    pub fn of(legs: &[RouteLeg]) -> Self {
        let Some(first) = legs.first() else {
            return RoutingMode::Uniform(TravelMode::Stay);
        };
        if legs.iter().all(|leg| leg.mode == first.mode) {
            RoutingMode::Uniform(first.mode)
        } else {
            RoutingMode::Mixed
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoutingMode::Uniform(mode) => mode.as_str(),
            RoutingMode::Mixed => "mixed",
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RoutingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryDay {
    /// 1-based day number.
    pub day: u32,
    pub city: String,
    pub bullets: Vec<String>,
}

/// A city marker for the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&City> for MapPoint {
    fn from(city: &City) -> Self {
        Self {
            city: city.name.clone(),
            lat: city.lat,
            lon: city.lon,
        }
    }
}

/// A synthesized trip plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    /// Hub city names in visiting order.
    pub cities: Vec<String>,
    pub route: Vec<RouteLeg>,
    pub itinerary: Vec<ItineraryDay>,
    pub cost_breakdown: CostBreakdown,
    pub estimated_total: f64,
    pub routing_mode: RoutingMode,
    pub map_points: Vec<MapPoint>,
    /// Inclusive trip length, when the dates could be read.
    pub trip_days: Option<i64>,
}

/// Builds plans from requests.
pub struct PlanSynthesizer<'a, E> {
    catalog: &'a dyn ReferenceCatalog,
    estimator: E,
    config: &'a PlanConfig,
}

impl<'a, E: LegEstimator> PlanSynthesizer<'a, E> {
    pub fn new(catalog: &'a dyn ReferenceCatalog, estimator: E, config: &'a PlanConfig) -> Self {
        Self {
            catalog,
            estimator,
            config,
        }
    }

    /// Canonicalize each entry, drop blanks and collapse adjacent repeats.
    pub fn resolve_chain<S: AsRef<str>>(&self, chain: &[S]) -> Result<Vec<String>, PlanError> {
        let mut out: Vec<String> = Vec::with_capacity(chain.len());
        for country in chain {
            let canonical = self.catalog.canonicalize(country.as_ref());
            if canonical.is_empty() || out.last() == Some(&canonical) {
                continue;
            }
            out.push(canonical);
        }

        if out.is_empty() {
            return Err(PlanError::EmptyChain);
        }
        Ok(out)
    }

    /// Estimate one leg per consecutive pair of cities.
    pub fn build_legs(&self, cities: &[City], request: &PlanRequest) -> Vec<RouteLeg> {
        cities
            .windows(2)
            .map(|pair| {
                let (a, b) = (&pair[0], &pair[1]);
                RouteLeg::new(a, b, self.estimator.estimate_leg(a, b, request.pace))
            })
            .collect()
    }

    /// Synthesize a plan for the request.
    pub fn synthesize(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        request.validate()?;

        let chain = self.resolve_chain(&request.raw_chain())?;

        let hubs: Vec<City> = chain
            .iter()
            .map(|country| self.catalog.hub_city(country).into_owned())
            .collect();

        let route = self.build_legs(&hubs, request);
        let routing_mode = RoutingMode::of(&route);
        let cost_breakdown = allocate(request.budget_usd, &route, self.config);

        let itinerary = hubs
            .iter()
            .zip(1..)
            .map(|(city, day)| ItineraryDay {
                day,
                city: city.name.clone(),
                bullets: self.config.day_bullets.clone(),
            })
            .collect();

        debug!(
            chain = ?chain,
            legs = route.len(),
            mode = %routing_mode,
            total = cost_breakdown.total,
            "synthesized plan"
        );

        Ok(Plan {
            cities: hubs.iter().map(|c| c.name.clone()).collect(),
            map_points: hubs.iter().map(MapPoint::from).collect(),
            route,
            itinerary,
            estimated_total: cost_breakdown.total,
            cost_breakdown,
            routing_mode,
            trip_days: request.trip_days(),
        })
    }
}
