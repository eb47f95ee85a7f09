//! ecodash-rs: data-binding and view-synchronization engine for an
//! ecological-sensitivity dashboard.
//!
//! The crate owns everything between the static JSON bundle and the
//! rendering library: typed dataset access, geography merging, the shared
//! selection and the per-widget option projections. Drawing itself stays
//! behind the [`render::RenderHost`] / [`render::RenderSurface`] seam.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, DashboardPhase, MapEvent, MapStatus};
pub use error::{DashError, DashResult};
