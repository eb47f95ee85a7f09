mod null_backend;

pub use null_backend::{NullHost, NullSurface, SurfaceEvent};

use geojson::FeatureCollection;
use serde_json::Value;

use crate::error::DashResult;

/// One chart instance owned by a binding.
///
/// Surfaces receive fully materialized option documents so the rendering
/// library stays isolated from dashboard domain and selection logic.
/// Function-valued option fields (tooltip and label formatters) are host
/// concerns; bindings expose the data the host needs through the store.
pub trait RenderSurface {
    /// Applies an option document. `not_merge` requests a full replacement
    /// of the previous options instead of an incremental merge.
    fn apply_option(&mut self, option: &Value, not_merge: bool) -> DashResult<()>;

    /// Dispatches an interaction action (select, highlight, ...).
    fn dispatch_action(&mut self, action: &Value) -> DashResult<()>;

    fn resize(&mut self);

    /// Releases the underlying instance. Bindings call this before
    /// rebinding a container so reinitialization never leaks instances.
    fn dispose(&mut self);
}

/// Factory half of the rendering contract.
pub trait RenderHost {
    type Surface: RenderSurface;

    /// Creates a chart instance bound to a container.
    fn create(&mut self, container: &str) -> DashResult<Self::Surface>;

    /// Registers named map geometry shared by every map surface.
    /// Re-registering the same name replaces the geometry.
    fn register_map(&mut self, name: &str, geometry: &FeatureCollection) -> DashResult<()>;
}
