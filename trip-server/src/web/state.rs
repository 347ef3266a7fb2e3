//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedOsrmClient;
use crate::candidates::BridgeTable;
use crate::catalog::ReferenceCatalog;
use crate::planner::PlanConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Country and city reference data
    pub catalog: Arc<dyn ReferenceCatalog>,

    /// Bridge countries for candidate resolution
    pub bridges: Arc<BridgeTable>,

    /// Plan synthesis configuration
    pub config: Arc<PlanConfig>,

    /// Optional driving-route backend
    pub routing: Option<Arc<CachedOsrmClient>>,
}

impl AppState {
    /// Create a new app state using geometric estimates only.
    pub fn new(
        catalog: impl ReferenceCatalog + 'static,
        bridges: BridgeTable,
        config: PlanConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            bridges: Arc::new(bridges),
            config: Arc::new(config),
            routing: None,
        }
    }

    /// Route ground legs through the given backend.
    pub fn with_routing(mut self, routing: CachedOsrmClient) -> Self {
        self.routing = Some(Arc::new(routing));
        self
    }
}
