//! Configuration for plan synthesis.

use crate::geo::EstimateParams;

/// Tunable constants for leg estimation and cost allocation.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Overheads and thresholds passed to the geo estimator.
    pub estimate: EstimateParams,

    /// Flat cost of a flown leg.
    pub flight_leg_cost: f64,

    /// Per-kilometre cost of a ground leg.
    pub ground_cost_per_km: f64,

    /// Minimum cost of any ground leg.
    pub min_ground_leg_cost: f64,

    /// Share of the budget that may go to travel.
    pub travel_share: f64,

    /// Share of the budget allocated to accommodation.
    pub stay_share: f64,

    /// Share of the budget allocated to food.
    pub food_share: f64,

    /// Share of the budget allocated to activities.
    pub activities_share: f64,

    /// Placeholder activities listed for every itinerary day.
    pub day_bullets: Vec<String>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            estimate: EstimateParams::default(),
            flight_leg_cost: 220.0,
            ground_cost_per_km: 0.15,
            min_ground_leg_cost: 40.0,
            travel_share: 0.20,
            stay_share: 0.36,
            food_share: 0.13,
            activities_share: 0.03,
            day_bullets: vec![
                "Museum or landmark".to_string(),
                "Historic center".to_string(),
                "Local food spot".to_string(),
            ],
        }
    }
}
