use serde_json::{Value, json};
use tracing::debug;

use crate::api::overview::{OverviewCanvas, OverviewFrame};
use crate::core::geo::{MERGED_MAP_NAME, MergedGeography};
use crate::core::palette;
use crate::core::types::{IndicatorKind, Level, ObservationYear};
use crate::data::source::{BASE_GEOGRAPHY_DOCUMENT, DocumentSource, OVERLAY_GEOGRAPHY_DOCUMENT};
use crate::data::store::DataStore;
use crate::error::DashResult;
use crate::render::{RenderHost, RenderSurface};

/// Region labels are hidden below this main-map zoom level.
pub const LABEL_VISIBILITY_ZOOM: f64 = 4.0;

/// Initial view of the main map instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: f64,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: (126.5, 43.8),
            zoom: 8.0,
            scale_min: 1.0,
            scale_max: 50.0,
        }
    }
}

/// Map widget: the roamable main instance plus the fixed overview
/// (mini-map) instance, both drawing the registered merged geometry.
///
/// Only governed (overlay) regions are selectable; base-document features
/// are rendered dim for context and stay non-interactive.
#[derive(Debug)]
pub struct MapBinding<S: RenderSurface> {
    surface: Option<S>,
    overview: Option<S>,
    geography: Option<MergedGeography>,
    view: MapView,
    frame: OverviewFrame,
    canvas: OverviewCanvas,
}

impl<S: RenderSurface> MapBinding<S> {
    #[must_use]
    pub fn new(view: MapView, frame: OverviewFrame, canvas: OverviewCanvas) -> Self {
        Self {
            surface: None,
            overview: None,
            geography: None,
            view,
            frame,
            canvas,
        }
    }

    /// Creates the main and overview instances, disposing any prior pair.
    pub fn init<H: RenderHost<Surface = S>>(
        &mut self,
        host: &mut H,
        main_container: &str,
        overview_container: &str,
    ) -> DashResult<()> {
        if let Some(mut previous) = self.surface.take() {
            previous.dispose();
        }
        if let Some(mut previous) = self.overview.take() {
            previous.dispose();
        }
        self.surface = Some(host.create(main_container)?);
        self.overview = Some(host.create(overview_container)?);
        Ok(())
    }

    /// Fetches both geographic documents, merges them and registers the
    /// result with the host.
    ///
    /// Any failure is returned to the caller untouched; no partial
    /// geometry is ever registered or rendered.
    pub fn load_geography<H: RenderHost<Surface = S>>(
        &mut self,
        host: &mut H,
        source: &dyn DocumentSource,
        exclusions: &[String],
    ) -> DashResult<()> {
        let base = source.fetch(BASE_GEOGRAPHY_DOCUMENT)?;
        let overlay = source.fetch(OVERLAY_GEOGRAPHY_DOCUMENT)?;
        let merged = MergedGeography::build(&base, &overlay, exclusions)?;
        host.register_map(MERGED_MAP_NAME, merged.collection())?;
        debug!(
            features = merged.feature_count(),
            governed = merged.governed_count(),
            "registered merged geography"
        );
        self.geography = Some(merged);
        Ok(())
    }

    #[must_use]
    pub fn has_geography(&self) -> bool {
        self.geography.is_some()
    }

    /// Whether the region belongs to the interactive overlay subset.
    #[must_use]
    pub fn is_governed(&self, name: &str) -> bool {
        self.geography
            .as_ref()
            .is_some_and(|geography| geography.is_governed(name))
    }

    /// Re-renders both instances for the displayed (kind, year).
    pub fn update(
        &mut self,
        kind: IndicatorKind,
        year: ObservationYear,
        store: &DataStore,
    ) -> DashResult<()> {
        let Some(geography) = self.geography.as_ref() else {
            return Ok(());
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.apply_option(&main_option(kind, year, store, geography, self.view), true)?;
        }
        if let Some(overview) = self.overview.as_mut() {
            overview.apply_option(&overview_option(kind, year, store, geography), true)?;
        }
        Ok(())
    }

    /// Marks a governed region selected and highlighted on the main map.
    pub fn select_region(&mut self, name: &str) -> DashResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        surface.dispatch_action(&json!({"type": "select", "name": name}))?;
        surface.dispatch_action(&json!({"type": "highlight", "name": name}))
    }

    /// Follows a pan/zoom of the main instance: toggles label visibility
    /// and repositions the overview view rectangle.
    pub fn on_roam(&mut self, zoom: f64, center: (f64, f64)) -> DashResult<()> {
        if let Some(surface) = self.surface.as_mut() {
            surface.apply_option(
                &json!({"series": [{"label": {"show": zoom >= LABEL_VISIBILITY_ZOOM}}]}),
                false,
            )?;
        }

        let Some(overview) = self.overview.as_mut() else {
            return Ok(());
        };
        let rect = self.frame.view_rect(self.canvas, zoom, center);
        overview.apply_option(
            &json!({
                "graphic": [{
                    "type": "rect",
                    "z": 100,
                    "shape": {
                        "x": rect.x,
                        "y": rect.y,
                        "width": rect.width,
                        "height": rect.height
                    },
                    "style": {"fill": "none", "stroke": "#ff0", "lineWidth": 2}
                }],
                "series": [{
                    "zoom": 1,
                    "center": [self.frame.reference_center.0, self.frame.reference_center.1]
                }]
            }),
            false,
        )
    }

    pub fn resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize();
        }
        if let Some(overview) = self.overview.as_mut() {
            overview.resize();
        }
    }
}

fn visual_map_pieces(kind: IndicatorKind, store: &DataStore) -> Vec<Value> {
    (Level::MIN..=Level::MAX)
        .filter_map(Level::new)
        .map(|level| {
            json!({
                "value": level.get(),
                "label": store.level_label(kind, level),
                "color": palette::bucket_color(kind, level)
            })
        })
        .collect()
}

/// Per-feature series data: dim non-interactive context entries followed by
/// the governed regions colored by their level.
fn series_data(
    kind: IndicatorKind,
    year: ObservationYear,
    store: &DataStore,
    geography: &MergedGeography,
    interactive: bool,
) -> Vec<Value> {
    let mut data: Vec<Value> = geography
        .context_names()
        .map(|name| {
            json!({
                "name": name,
                "itemStyle": {"areaColor": palette::BASE_AREA, "opacity": 0.6},
                "emphasis": {"disabled": true},
                "select": {"disabled": true}
            })
        })
        .collect();

    // Governed entries are limited to the dashboard's region universe so a
    // county absent from the datasets never becomes selectable.
    for name in geography.governed() {
        if !store.has_region(name) {
            continue;
        }
        let level = store.level(kind, name, year);
        let value = u32::from(level.get());
        data.push(json!({
            "name": name,
            "value": value,
            "itemStyle": {
                "areaColor": palette::bucket_color(kind, level),
                "borderWidth": 1.5,
                "borderColor": palette::GOVERNED_BORDER,
                "shadowColor": "rgba(0, 0, 0, 0.8)",
                "shadowBlur": value * 5,
                "shadowOffsetX": value * 2,
                "shadowOffsetY": value * 2
            },
            "emphasis": {
                "disabled": !interactive,
                "itemStyle": {
                    "shadowBlur": value * 8,
                    "shadowOffsetX": value * 3,
                    "shadowOffsetY": value * 3,
                    "borderWidth": 2,
                    "borderColor": "#fff"
                }
            },
            "select": {
                "disabled": !interactive,
                "itemStyle": {
                    "shadowBlur": value * 10,
                    "shadowOffsetX": value * 4,
                    "shadowOffsetY": value * 4,
                    "borderWidth": 2.5,
                    "borderColor": "#fff"
                }
            }
        }));
    }
    data
}

fn main_option(
    kind: IndicatorKind,
    year: ObservationYear,
    store: &DataStore,
    geography: &MergedGeography,
    view: MapView,
) -> Value {
    json!({
        "backgroundColor": "transparent",
        "animation": false,
        "progressive": 500,
        "progressiveThreshold": 3000,
        "visualMap": {
            "show": true,
            "type": "piecewise",
            "left": 20,
            "top": 100,
            "pieces": visual_map_pieces(kind, store),
            "textStyle": {"color": "#fff"}
        },
        "tooltip": {"show": true, "trigger": "item"},
        "series": [{
            "name": "主地图",
            "type": "map",
            "map": MERGED_MAP_NAME,
            "roam": true,
            "zoom": view.zoom,
            "center": [view.center.0, view.center.1],
            "scaleLimit": {"min": view.scale_min, "max": view.scale_max},
            "selectedMode": "single",
            "label": {
                "show": view.zoom >= LABEL_VISIBILITY_ZOOM,
                "position": "inside",
                "fontSize": 12,
                "color": "#fff",
                "fontWeight": "bold",
                "textBorderColor": "#000",
                "textBorderWidth": 2
            },
            "itemStyle": {
                "areaColor": palette::BASE_AREA,
                "borderColor": palette::BASE_BORDER,
                "borderWidth": 1,
                "shadowColor": "rgba(0, 0, 0, 0.5)",
                "shadowBlur": 10,
                "shadowOffsetX": 5,
                "shadowOffsetY": 5
            },
            "emphasis": {
                "label": {"show": true, "color": "#fff", "fontWeight": "bold"},
                "itemStyle": {
                    "areaColor": palette::HIGHLIGHT_AREA,
                    "opacity": 0.8,
                    "shadowColor": "rgba(0, 0, 0, 0.5)",
                    "shadowBlur": 20
                }
            },
            "select": {
                "label": {"show": true, "color": "#fff", "fontWeight": "bold"},
                "itemStyle": {
                    "areaColor": palette::HIGHLIGHT_AREA,
                    "shadowColor": "rgba(0, 0, 0, 0.5)",
                    "shadowBlur": 20
                }
            },
            "data": series_data(kind, year, store, geography, true)
        }]
    })
}

fn overview_option(
    kind: IndicatorKind,
    year: ObservationYear,
    store: &DataStore,
    geography: &MergedGeography,
) -> Value {
    json!({
        "animation": false,
        "visualMap": {
            "show": false,
            "dimension": 0,
            "pieces": visual_map_pieces(kind, store)
        },
        "series": [{
            "name": "鹰眼视图",
            "type": "map",
            "map": MERGED_MAP_NAME,
            "roam": false,
            "zoom": 1,
            "aspectScale": 0.75,
            "layoutCenter": ["50%", "50%"],
            "layoutSize": "100%",
            "selectedMode": false,
            "itemStyle": {
                "areaColor": palette::BASE_AREA,
                "borderColor": palette::OVERVIEW_BORDER
            },
            "emphasis": {"disabled": true},
            "select": {"disabled": true},
            "label": {"show": false},
            "data": series_data(kind, year, store, geography, false)
        }]
    })
}
