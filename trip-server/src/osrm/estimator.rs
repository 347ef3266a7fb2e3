//! Leg estimator backed by OSRM.

use std::sync::Arc;

use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn};

use crate::cache::CachedOsrmClient;
use crate::catalog::City;
use crate::geo::{Pace, RouteEstimate};
use crate::planner::{GeoLegEstimator, LegEstimator};

/// Routes ground legs through OSRM, falling back to geometry.
///
/// Legs the geometric estimator classifies as flights or stays are never
/// sent to OSRM. A routing failure is logged and the geometric estimate
/// is used instead, so planning never fails because of the backend.
///
/// [`LegEstimator`] is synchronous; the HTTP call is driven on the current
/// multi-threaded Tokio runtime via `block_in_place`. Outside such a
/// runtime the geometric estimate is returned.
#[derive(Clone)]
pub struct OsrmLegEstimator {
    client: Arc<CachedOsrmClient>,
    fallback: GeoLegEstimator,
}

impl OsrmLegEstimator {
    pub fn new(client: Arc<CachedOsrmClient>, fallback: GeoLegEstimator) -> Self {
        Self { client, fallback }
    }
}

impl LegEstimator for OsrmLegEstimator {
    fn estimate_leg(&self, from: &City, to: &City, pace: Pace) -> RouteEstimate {
        let geometric = self.fallback.estimate_leg(from, to, pace);
        if !geometric.mode.is_ground() {
            return geometric;
        }

        let handle = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => handle,
            _ => {
                debug!("no multi-threaded runtime; using geometric estimate");
                return geometric;
            }
        };

        let routed = tokio::task::block_in_place(|| {
            handle.block_on(self.client.route_driving(from.location(), to.location()))
        });

        match routed {
            Ok(estimate) => estimate,
            Err(e) => {
                warn!(
                    from = %from.name,
                    to = %to.name,
                    error = %e,
                    "routing backend failed; using geometric estimate"
                );
                geometric
            }
        }
    }
}
