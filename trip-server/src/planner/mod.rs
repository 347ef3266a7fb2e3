//! Trip plan synthesis.
//!
//! Turns a plan request into hub cities, route legs, a cost breakdown, a
//! day-by-day itinerary skeleton and map points. Leg estimation goes
//! through the [`LegEstimator`] trait so the geometric estimator can be
//! swapped for an external routing backend.

mod config;
mod cost;
mod error;
mod legs;
mod request;
mod synthesize;

pub use config::PlanConfig;
pub use cost::{CostBreakdown, allocate, leg_travel_cost};
pub use error::PlanError;
pub use legs::{GeoLegEstimator, LegEstimator, RouteLeg};
pub use request::PlanRequest;
pub use synthesize::{ItineraryDay, MapPoint, Plan, PlanSynthesizer, RoutingMode};
