//! OSRM driving-directions backend.
//!
//! Optional alternative to the geometric estimator for ground legs.
//! Every failure (network, timeout, HTTP status, bad body, no route) is
//! reported as a [`RoutingError`]; retrying is left to the caller.

mod client;
mod error;
mod estimator;
mod types;

pub use client::{OsrmClient, OsrmConfig};
pub use error::RoutingError;
pub use estimator::OsrmLegEstimator;
pub use types::{OsrmRoute, RouteResponse};
