mod bar;
mod category;
mod controller;
mod controls;
mod detail;
mod line_options;
mod map;
mod overview;
mod pie;
mod trend;

pub use bar::BarBinding;
pub use category::CategoryBinding;
pub use controller::{
    ContainerIds, Dashboard, DashboardConfig, DashboardPhase, MAP_ERROR_TEXT, MapEvent, MapStatus,
};
pub use controls::{ControlButton, ControlPanel, control_panel, statistics_title};
pub use detail::{RegionDetail, render_detail};
pub use map::{LABEL_VISIBILITY_ZOOM, MapBinding, MapView};
pub use overview::{OverviewCanvas, OverviewFrame, ViewRect};
pub use pie::PieBinding;
pub use trend::TrendBinding;
