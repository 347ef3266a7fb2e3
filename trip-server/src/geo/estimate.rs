//! Great-circle distance and leg duration estimates.

use serde::{Deserialize, Serialize};

use super::pace::{Pace, TravelMode};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distances below this are treated as the same place.
const SAME_PLACE_EPSILON_KM: f64 = 1e-6;

/// Straight-line distance understates real ground routes by roughly this factor.
const GROUND_DETOUR_FACTOR: f64 = 1.10;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Tunable overheads for [`estimate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateParams {
    /// Legs at least this long are flown.
    pub flight_threshold_km: f64,
    /// Airport, security and transfer time added to every flight.
    pub flight_overhead_min: f64,
    /// Border or immigration friction added to every non-stay leg.
    pub border_overhead_min: f64,
    /// Duration reported for a `stay` leg.
    pub same_place_overhead_min: f64,
}

impl EstimateParams {
    /// Set the flight threshold.
    pub fn with_flight_threshold_km(mut self, km: f64) -> Self {
        self.flight_threshold_km = km;
        self
    }

    /// Set the flight overhead.
    pub fn with_flight_overhead_min(mut self, mins: f64) -> Self {
        self.flight_overhead_min = mins;
        self
    }

    /// Set the border overhead.
    pub fn with_border_overhead_min(mut self, mins: f64) -> Self {
        self.border_overhead_min = mins;
        self
    }

    /// Set the same-place overhead.
    pub fn with_same_place_overhead_min(mut self, mins: f64) -> Self {
        self.same_place_overhead_min = mins;
        self
    }
}

impl Default for EstimateParams {
    fn default() -> Self {
        Self {
            flight_threshold_km: 1500.0,
            flight_overhead_min: 120.0,
            border_overhead_min: 30.0,
            same_place_overhead_min: 0.0,
        }
    }
}

/// Result of a geometric leg estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    /// Great-circle distance, rounded to 0.1 km.
    pub distance_km: f64,
    /// Estimated travel time, rounded to 0.1 min.
    pub duration_min: f64,
    pub mode: TravelMode,
}

/// Great-circle distance between two points in kilometres.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let p1 = a.lat.to_radians();
    let p2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let x = (dlat / 2.0).sin().powi(2) + p1.cos() * p2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push x a hair past 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * x.clamp(0.0, 1.0).sqrt().asin()
}

/// Estimate distance, duration and mode for travelling from `a` to `b`.
///
/// Never fails: negative overheads are treated as zero and speeds are
/// floored at 1 km/h.
pub fn estimate(a: LatLon, b: LatLon, pace: Pace, params: &EstimateParams) -> RouteEstimate {
    let distance = haversine_km(a, b);

    if !(distance >= SAME_PLACE_EPSILON_KM) {
        return RouteEstimate {
            distance_km: 0.0,
            duration_min: non_negative(params.same_place_overhead_min),
            mode: TravelMode::Stay,
        };
    }

    let border = non_negative(params.border_overhead_min);
    let (mode, minutes) = if distance >= params.flight_threshold_km {
        let hours = distance / pace.flight_speed_kmh().max(1.0);
        let minutes = hours * 60.0 + non_negative(params.flight_overhead_min) + border;
        (TravelMode::Flight, minutes)
    } else {
        let hours = distance / pace.ground_speed_kmh().max(1.0);
        let minutes = hours * 60.0 * GROUND_DETOUR_FACTOR + border;
        (TravelMode::EstimatedGeo, minutes)
    };

    RouteEstimate {
        distance_km: round1(distance),
        duration_min: round1(minutes),
        mode,
    }
}

/// Format a duration as `"Xh Ym"`, or just `"Ym"` under an hour.
pub fn format_minutes(minutes: f64) -> String {
    let total = if minutes.is_finite() {
        minutes.round().max(0.0) as u64
    } else {
        0
    };
    let (h, m) = (total / 60, total % 60);
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}

/// Round to one decimal place.
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn non_negative(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.max(0.0) }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn latlon() -> impl Strategy<Value = LatLon> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| LatLon::new(lat, lon))
    }

    fn pace() -> impl Strategy<Value = Pace> {
        prop_oneof![Just(Pace::Relaxed), Just(Pace::Balanced), Just(Pace::Packed)]
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(p in latlon(), pace in pace()) {
            let r = estimate(p, p, pace, &EstimateParams::default());
            prop_assert_eq!(r.mode, TravelMode::Stay);
            prop_assert_eq!(r.distance_km, 0.0);
        }

        #[test]
        fn estimate_is_symmetric(a in latlon(), b in latlon(), pace in pace()) {
            let params = EstimateParams::default();
            let ab = estimate(a, b, pace, &params);
            let ba = estimate(b, a, pace, &params);

            prop_assert_eq!(ab.mode, ba.mode);
            prop_assert!((ab.distance_km - ba.distance_km).abs() <= 0.1);
            prop_assert!((ab.duration_min - ba.duration_min).abs() <= 0.1);
        }

        #[test]
        fn mode_follows_threshold(a in latlon(), b in latlon(), pace in pace()) {
            let params = EstimateParams::default();
            let raw = haversine_km(a, b);
            let r = estimate(a, b, pace, &params);

            prop_assert!(r.distance_km >= 0.0);
            prop_assert!(r.duration_min >= 0.0);
            if raw >= params.flight_threshold_km {
                prop_assert_eq!(r.mode, TravelMode::Flight);
            } else if raw >= 1e-6 {
                prop_assert_eq!(r.mode, TravelMode::EstimatedGeo);
            }
        }

        #[test]
        fn distance_never_exceeds_half_circumference(a in latlon(), b in latlon()) {
            let d = haversine_km(a, b);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
