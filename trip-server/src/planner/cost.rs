//! Budget allocation across cost categories.

use serde::Serialize;

use crate::geo::TravelMode;

use super::config::PlanConfig;
use super::legs::RouteLeg;

/// Estimated spend per category, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub travel: f64,
    pub stay: f64,
    pub food: f64,
    pub activities: f64,
    pub total: f64,
}

/// Cost of a single leg before any budget cap.
pub fn leg_travel_cost(leg: &RouteLeg, config: &PlanConfig) -> f64 {
    match leg.mode {
        TravelMode::Flight => config.flight_leg_cost,
        TravelMode::EstimatedGeo | TravelMode::DrivingOsrm => {
            (leg.distance_km * config.ground_cost_per_km).max(config.min_ground_leg_cost)
        }
        TravelMode::Stay => 0.0,
    }
}

/// Split a budget across travel, stay, food and activities.
///
/// Travel is capped at its share of the budget, so expensive legs are
/// under-funded rather than rejected. The total is capped at the budget.
pub fn allocate(budget_usd: f64, legs: &[RouteLeg], config: &PlanConfig) -> CostBreakdown {
    let budget = if budget_usd.is_finite() {
        budget_usd.max(0.0)
    } else {
        0.0
    };

    let raw_travel: f64 = legs.iter().map(|leg| leg_travel_cost(leg, config)).sum();

    let stay = (budget * config.stay_share).max(0.0);
    let food = (budget * config.food_share).max(0.0);
    let activities = (budget * config.activities_share).max(0.0);
    let travel = (budget * config.travel_share).min(raw_travel).max(0.0);
    let total = budget.min(travel + stay + food + activities);

    CostBreakdown {
        travel: travel.round(),
        stay: stay.round(),
        food: food.round(),
        activities: activities.round(),
        // Rounding up could push a fractional budget over its cap.
        total: total.round().min(budget.floor()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::City;
    use crate::geo::RouteEstimate;

    fn leg(mode: TravelMode, distance_km: f64) -> RouteLeg {
        let a = City::new("A", 0.0, 0.0);
        let b = City::new("B", 1.0, 1.0);
        RouteLeg::new(
            &a,
            &b,
            RouteEstimate {
                distance_km,
                duration_min: 0.0,
                mode,
            },
        )
    }

    #[test]
    fn leg_costs() {
        let config = PlanConfig::default();
        assert_eq!(leg_travel_cost(&leg(TravelMode::Flight, 5000.0), &config), 220.0);
        assert_eq!(leg_travel_cost(&leg(TravelMode::EstimatedGeo, 100.0), &config), 40.0);
        assert!(
            (leg_travel_cost(&leg(TravelMode::EstimatedGeo, 1000.0), &config) - 150.0).abs()
                < 1e-9
        );
        assert!(
            (leg_travel_cost(&leg(TravelMode::DrivingOsrm, 1000.0), &config) - 150.0).abs() < 1e-9
        );
        assert_eq!(leg_travel_cost(&leg(TravelMode::Stay, 0.0), &config), 0.0);
    }

    #[test]
    fn france_italy_budget() {
        let config = PlanConfig::default();
        let cost = allocate(2000.0, &[leg(TravelMode::EstimatedGeo, 1105.3)], &config);

        assert_eq!(cost.travel, 166.0);
        assert_eq!(cost.stay, 720.0);
        assert_eq!(cost.food, 260.0);
        assert_eq!(cost.activities, 60.0);
        assert_eq!(cost.total, 1206.0);
    }

    #[test]
    fn travel_capped_at_share() {
        let config = PlanConfig::default();
        let legs = vec![leg(TravelMode::Flight, 3000.0); 5];
        let cost = allocate(1000.0, &legs, &config);

        assert_eq!(cost.travel, 200.0);
        assert_eq!(cost.total, 720.0);
    }

    #[test]
    fn no_legs_no_travel() {
        let cost = allocate(500.0, &[], &PlanConfig::default());
        assert_eq!(cost.travel, 0.0);
        assert_eq!(cost.total, 260.0);
    }

    #[test]
    fn zero_budget() {
        let cost = allocate(0.0, &[leg(TravelMode::Flight, 3000.0)], &PlanConfig::default());
        assert_eq!(cost.travel, 0.0);
        assert_eq!(cost.total, 0.0);
    }

    #[test]
    fn total_capped_at_budget_when_shares_exceed_it() {
        let config = PlanConfig {
            stay_share: 0.9,
            food_share: 0.5,
            ..PlanConfig::default()
        };
        let cost = allocate(100.0, &[], &config);
        assert_eq!(cost.total, 100.0);
    }

    #[test]
    fn fractional_budget_stays_under_cap() {
        let config = PlanConfig {
            stay_share: 1.0,
            ..PlanConfig::default()
        };
        let cost = allocate(100.6, &[], &config);
        assert!(cost.total <= 100.6);
        assert_eq!(cost.total, 100.0);
    }
}
