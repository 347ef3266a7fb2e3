//! Travel pace and transport mode types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How hurried the traveler wants to be.
///
/// The pace selects the assumed ground and flight speeds. Unknown pace
/// strings fall back to [`Pace::Balanced`] via [`Pace::parse_lossy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Balanced,
    Packed,
}

impl Pace {
    /// Parse a pace, ignoring case and surrounding whitespace.
    ///
    /// Anything unrecognised is treated as `Balanced`.
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Pace::Relaxed,
            "packed" => Pace::Packed,
            _ => Pace::Balanced,
        }
    }

    /// Assumed door-to-door ground speed in km/h.
    pub fn ground_speed_kmh(self) -> f64 {
        match self {
            Pace::Relaxed => 70.0,
            Pace::Balanced => 90.0,
            Pace::Packed => 110.0,
        }
    }

    /// Assumed cruise speed for flights in km/h.
    pub fn flight_speed_kmh(self) -> f64 {
        match self {
            Pace::Relaxed => 650.0,
            Pace::Balanced => 750.0,
            Pace::Packed => 850.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Balanced => "balanced",
            Pace::Packed => "packed",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport classification of a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// Both endpoints coincide; nothing to travel.
    Stay,
    /// Ground transport estimated from straight-line distance.
    EstimatedGeo,
    /// Long hop, assumed to be flown.
    Flight,
    /// Driving route computed by the OSRM backend.
    DrivingOsrm,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Stay => "stay",
            TravelMode::EstimatedGeo => "estimated_geo",
            TravelMode::Flight => "flight",
            TravelMode::DrivingOsrm => "driving_osrm",
        }
    }

    /// Whether the leg is travelled over land.
    pub fn is_ground(self) -> bool {
        matches!(self, TravelMode::EstimatedGeo | TravelMode::DrivingOsrm)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
