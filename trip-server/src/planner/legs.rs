//! Route legs and leg estimators.

use serde::Serialize;

use crate::catalog::City;
use crate::geo::{self, EstimateParams, Pace, RouteEstimate, TravelMode};

/// One directed travel segment between consecutive cities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from_city: String,
    pub to_city: String,
    pub distance_km: f64,
    pub duration_min: f64,
    pub mode: TravelMode,
    pub from_lat: f64,
    pub from_lon: f64,
    pub to_lat: f64,
    pub to_lon: f64,
}

impl RouteLeg {
    /// Build a leg from its endpoints and an estimate.
    pub fn new(from: &City, to: &City, estimate: RouteEstimate) -> Self {
        Self {
            from_city: from.name.clone(),
            to_city: to.name.clone(),
            distance_km: estimate.distance_km,
            duration_min: estimate.duration_min,
            mode: estimate.mode,
            from_lat: from.lat,
            from_lon: from.lon,
            to_lat: to.lat,
            to_lon: to.lon,
        }
    }

    /// Duration formatted as `"Xh Ym"`.
    pub fn duration_label(&self) -> String {
        geo::format_minutes(self.duration_min)
    }
}

/// Estimates distance, duration and mode for travelling between two cities.
///
/// This abstraction lets the planner use the geometric estimator or an
/// external routing backend.
pub trait LegEstimator {
    fn estimate_leg(&self, from: &City, to: &City, pace: Pace) -> RouteEstimate;
}

/// Leg estimator using great-circle geometry only.
#[derive(Debug, Clone, Default)]
pub struct GeoLegEstimator {
    params: EstimateParams,
}

impl GeoLegEstimator {
    pub fn new(params: EstimateParams) -> Self {
        Self { params }
    }
}

impl LegEstimator for GeoLegEstimator {
    fn estimate_leg(&self, from: &City, to: &City, pace: Pace) -> RouteEstimate {
        geo::estimate(from.location(), to.location(), pace, &self.params)
    }
}

impl<E: LegEstimator + ?Sized> LegEstimator for &E {
    fn estimate_leg(&self, from: &City, to: &City, pace: Pace) -> RouteEstimate {
        (**self).estimate_leg(from, to, pace)
    }
}
