use std::time::Duration;

use tracing::{debug, warn};

use crate::api::bar::BarBinding;
use crate::api::category::CategoryBinding;
use crate::api::controls::{ControlPanel, control_panel, statistics_title};
use crate::api::detail::{RegionDetail, render_detail};
use crate::api::map::{MapBinding, MapView};
use crate::api::overview::{OverviewCanvas, OverviewFrame};
use crate::api::pie::PieBinding;
use crate::api::trend::TrendBinding;
use crate::core::geo::DEFAULT_EXCLUSIONS;
use crate::core::selection::{Selection, SelectionState, SelectionUpdate};
use crate::core::types::IndicatorKind;
use crate::data::source::DocumentSource;
use crate::data::store::DataStore;
use crate::error::{DashError, DashResult};
use crate::render::RenderHost;

/// User-visible text shown in place of a failed map widget.
pub const MAP_ERROR_TEXT: &str = "地图数据加载失败，请刷新页面重试";

/// Container ids the chart instances bind to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerIds {
    pub trend: String,
    pub gas: String,
    pub nature: String,
    pub human: String,
    pub pie: String,
    pub bar: String,
    pub map: String,
    pub overview: String,
}

impl Default for ContainerIds {
    fn default() -> Self {
        Self {
            trend: "trendChart".to_owned(),
            gas: "gasChart".to_owned(),
            nature: "natureChart".to_owned(),
            human: "humanChart".to_owned(),
            pie: "pieChart".to_owned(),
            bar: "barChart".to_owned(),
            map: "mainMap".to_owned(),
            overview: "mapOverview".to_owned(),
        }
    }
}

/// Dashboard configuration; the defaults mirror the deployed page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub containers: ContainerIds,
    pub map_view: MapView,
    pub overview_frame: OverviewFrame,
    pub overview_canvas: OverviewCanvas,
    /// Base-geography feature names dropped from the merge.
    pub exclusions: Vec<String>,
    /// Bounded retry for map loading, the only retry policy in the system.
    pub max_map_retries: u32,
    pub retry_base_delay: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            containers: ContainerIds::default(),
            map_view: MapView::default(),
            overview_frame: OverviewFrame::default(),
            overview_canvas: OverviewCanvas::default(),
            exclusions: DEFAULT_EXCLUSIONS.map(str::to_owned).to_vec(),
            max_map_retries: 3,
            retry_base_delay: Duration::from_secs(2),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    #[must_use]
    pub fn with_map_view(mut self, view: MapView) -> Self {
        self.map_view = view;
        self
    }

    #[must_use]
    pub fn with_map_retries(mut self, max_retries: u32, base_delay: Duration) -> Self {
        self.max_map_retries = max_retries;
        self.retry_base_delay = base_delay;
        self
    }
}

/// Dashboard lifecycle phase.
///
/// `Error` means the map geography is unrecoverable; every non-map chart
/// stays live in that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Ready,
    Error,
}

/// Map widget status, separate from the overall phase while retries run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStatus {
    Pending,
    Ready,
    /// Waiting for the host to call `retry_map` after `delay`.
    Retrying { attempt: u32, delay: Duration },
    Failed,
}

/// Host-observed map interaction, delivered as a value.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Click { name: String },
    Roam { zoom: f64, center: (f64, f64) },
    RenderFailure { reason: String },
}

/// The interaction controller: owns every widget, the store and the shared
/// selection, and fans updates out on each mutation.
///
/// Single writer of [`SelectionState`]; all reads happen inside the same
/// render pass, so no locking is needed in the single-threaded host model.
pub struct Dashboard<H: RenderHost> {
    host: H,
    config: DashboardConfig,
    store: DataStore,
    selection: SelectionState,
    phase: DashboardPhase,
    map_status: MapStatus,
    map_attempts: u32,
    trend: TrendBinding<H::Surface>,
    gas: CategoryBinding<H::Surface>,
    nature: CategoryBinding<H::Surface>,
    human: CategoryBinding<H::Surface>,
    pie: PieBinding<H::Surface>,
    bar: BarBinding<H::Surface>,
    map: MapBinding<H::Surface>,
    detail: Option<RegionDetail>,
}

impl<H: RenderHost> Dashboard<H> {
    #[must_use]
    pub fn new(host: H, config: DashboardConfig) -> Self {
        let map = MapBinding::new(
            config.map_view,
            config.overview_frame,
            config.overview_canvas,
        );
        Self {
            host,
            config,
            store: DataStore::new(),
            selection: SelectionState::default(),
            phase: DashboardPhase::Loading,
            map_status: MapStatus::Pending,
            map_attempts: 0,
            trend: TrendBinding::new(),
            gas: CategoryBinding::new(IndicatorKind::Gas),
            nature: CategoryBinding::new(IndicatorKind::Nature),
            human: CategoryBinding::new(IndicatorKind::Human),
            pie: PieBinding::new(),
            bar: BarBinding::new(),
            map,
            detail: None,
        }
    }

    /// Loads the bundle, wires every chart and performs the first full
    /// render pass.
    ///
    /// Individual document failures are contained inside the store; only a
    /// failure to create chart surfaces is fatal here. Geography failures
    /// enter the bounded retry policy instead of failing the start.
    pub fn start(&mut self, source: &dyn DocumentSource) -> DashResult<()> {
        self.store.load(source);

        self.trend.init(&mut self.host, &self.config.containers.trend)?;
        self.gas.init(&mut self.host, &self.config.containers.gas)?;
        self.nature
            .init(&mut self.host, &self.config.containers.nature)?;
        self.human
            .init(&mut self.host, &self.config.containers.human)?;
        self.pie.init(&mut self.host, &self.config.containers.pie)?;
        self.bar.init(&mut self.host, &self.config.containers.bar)?;
        self.map.init(
            &mut self.host,
            &self.config.containers.map,
            &self.config.containers.overview,
        )?;

        self.phase = DashboardPhase::Ready;
        self.try_load_geography(source);
        self.render_all();
        Ok(())
    }

    /// Selects an indicator dimension by control label.
    pub fn select_indicator(&mut self, label: &str) -> DashResult<Selection> {
        self.apply_selection(SelectionUpdate::parse(Some(label), None)?)
    }

    /// Selects an observation year by control label.
    pub fn select_year(&mut self, label: &str) -> DashResult<Selection> {
        self.apply_selection(SelectionUpdate::parse(None, Some(label))?)
    }

    fn apply_selection(&mut self, update: SelectionUpdate) -> DashResult<Selection> {
        if self.phase == DashboardPhase::Loading {
            debug!("selection ignored while loading");
            return Ok(self.selection.current().clone());
        }
        let snapshot = self.selection.select(update);
        self.render_all();
        Ok(snapshot)
    }

    /// Processes a map interaction delivered by the host.
    pub fn handle_map_event(&mut self, event: MapEvent) {
        if self.phase == DashboardPhase::Loading {
            debug!("map event ignored while loading");
            return;
        }
        match event {
            MapEvent::Click { name } => self.handle_map_click(&name),
            MapEvent::Roam { zoom, center } => {
                if self.map_status == MapStatus::Ready {
                    if let Err(err) = self.map.on_roam(zoom, center) {
                        warn!(error = %err, "overview update failed");
                    }
                }
            }
            MapEvent::RenderFailure { reason } => {
                warn!(%reason, "map render failure reported");
                self.register_map_failure(&DashError::Render(reason));
            }
        }
    }

    fn handle_map_click(&mut self, name: &str) {
        if self.map_status != MapStatus::Ready {
            return;
        }
        // Clicks on base-document context regions never move the selection.
        if !self.map.is_governed(name) || !self.store.has_region(name) {
            debug!(region = name, "ignored click outside governed regions");
            return;
        }
        self.selection.select(SelectionUpdate::region(name));
        self.render_all();
        if let Err(err) = self.map.select_region(name) {
            warn!(error = %err, region = name, "map select action failed");
        }
    }

    /// Re-runs the geography load after a `MapStatus::Retrying` delay has
    /// elapsed. A no-op in any other map state.
    pub fn retry_map(&mut self, source: &dyn DocumentSource) {
        if !matches!(self.map_status, MapStatus::Retrying { .. }) {
            return;
        }
        debug!(attempt = self.map_attempts, "retrying map geography load");
        self.try_load_geography(source);
        if self.map_status == MapStatus::Ready {
            let selection = self.selection.current().clone();
            if let Err(err) = self
                .map
                .update(selection.indicator, selection.year, &self.store)
            {
                warn!(error = %err, "map render after retry failed");
                self.register_map_failure(&err);
            }
        }
    }

    fn try_load_geography(&mut self, source: &dyn DocumentSource) {
        match self
            .map
            .load_geography(&mut self.host, source, &self.config.exclusions)
        {
            Ok(()) => {
                self.map_status = MapStatus::Ready;
                self.map_attempts = 0;
                if self.phase == DashboardPhase::Error {
                    self.phase = DashboardPhase::Ready;
                }
            }
            Err(err) => {
                warn!(error = %err, "map geography load failed");
                self.register_map_failure(&err);
            }
        }
    }

    fn register_map_failure(&mut self, err: &DashError) {
        if self.map_attempts < self.config.max_map_retries {
            self.map_attempts += 1;
            let delay = self.config.retry_base_delay * self.map_attempts;
            self.map_status = MapStatus::Retrying {
                attempt: self.map_attempts,
                delay,
            };
            debug!(attempt = self.map_attempts, delay_ms = delay.as_millis() as u64, "map retry scheduled");
        } else {
            warn!(error = %err, "map retries exhausted");
            self.map_status = MapStatus::Failed;
            self.phase = DashboardPhase::Error;
        }
    }

    /// One synchronized render pass across every widget.
    ///
    /// Each binding fully replaces its own options, so the pass is
    /// idempotent; a single failing widget is logged and contained.
    fn render_all(&mut self) {
        let selection = self.selection.current().clone();

        if let Err(err) = self.trend.update(&selection, &self.store) {
            warn!(error = %err, chart = "trend", "chart update failed");
        }
        if let Err(err) = self.gas.update(&selection, &self.store) {
            warn!(error = %err, chart = "gas", "chart update failed");
        }
        if let Err(err) = self.nature.update(&selection, &self.store) {
            warn!(error = %err, chart = "nature", "chart update failed");
        }
        if let Err(err) = self.human.update(&selection, &self.store) {
            warn!(error = %err, chart = "human", "chart update failed");
        }
        if let Err(err) = self.pie.update(&self.store) {
            warn!(error = %err, chart = "pie", "chart update failed");
        }
        if let Err(err) = self
            .bar
            .update(selection.indicator, selection.year, &self.store)
        {
            warn!(error = %err, chart = "bar", "chart update failed");
        }
        if self.map_status == MapStatus::Ready {
            if let Err(err) = self
                .map
                .update(selection.indicator, selection.year, &self.store)
            {
                warn!(error = %err, chart = "map", "chart update failed");
                self.register_map_failure(&err);
            }
        }

        self.detail = render_detail(&selection, &self.store);
    }

    /// Fans a container resize out to every chart instance.
    pub fn resize_all(&mut self) {
        self.trend.resize();
        self.gas.resize();
        self.nature.resize();
        self.human.resize();
        self.pie.resize();
        self.bar.resize();
        self.map.resize();
    }

    #[must_use]
    pub fn phase(&self) -> DashboardPhase {
        self.phase
    }

    #[must_use]
    pub fn map_status(&self) -> MapStatus {
        self.map_status
    }

    /// Static text the host renders in place of a failed map widget.
    #[must_use]
    pub fn map_error_text(&self) -> Option<&'static str> {
        (self.map_status == MapStatus::Failed).then_some(MAP_ERROR_TEXT)
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.selection.current()
    }

    #[must_use]
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Current detail panel content, if a known region is selected.
    #[must_use]
    pub fn detail(&self) -> Option<&RegionDetail> {
        self.detail.as_ref()
    }

    /// Declarative control-button state for the current selection.
    #[must_use]
    pub fn controls(&self) -> ControlPanel {
        control_panel(self.selection.current())
    }

    /// Title of the statistics panel for the current selection.
    #[must_use]
    pub fn statistics_title(&self) -> String {
        let selection = self.selection.current();
        statistics_title(selection.indicator, selection.year)
    }
}
