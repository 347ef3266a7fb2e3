//! Geometric travel estimation.
//!
//! Turns two coordinates and a travel pace into a distance, a duration and
//! a transport mode without consulting any external service.

mod estimate;
mod pace;

pub use estimate::{
    EARTH_RADIUS_KM, EstimateParams, LatLon, RouteEstimate, estimate, format_minutes,
    haversine_km,
};
pub use pace::{Pace, TravelMode};

pub(crate) use estimate::round1;
