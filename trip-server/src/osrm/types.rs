//! OSRM Route service response types.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

use crate::geo::{RouteEstimate, TravelMode, round1};

use super::error::RoutingError;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code, `"Ok"` on success.
    #[serde(default)]
    pub code: Option<String>,

    /// Error message when `code` is not `"Ok"`.
    #[serde(default)]
    pub message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// A single route.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Distance in metres.
    pub distance: f64,
    /// Duration in seconds.
    pub duration: f64,
}

impl RouteResponse {
    /// Convert the first route into a `driving_osrm` estimate.
    pub fn into_estimate(self) -> Result<RouteEstimate, RoutingError> {
        let Some(route) = self.routes.into_iter().next() else {
            return Err(RoutingError::NoRoute {
                code: self.code.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            });
        };

        Ok(RouteEstimate {
            distance_km: round1(route.distance.max(0.0) / 1000.0),
            duration_min: round1(route.duration.max(0.0) / 60.0),
            mode: TravelMode::DrivingOsrm,
        })
    }
}
