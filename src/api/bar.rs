use serde_json::{Value, json};

use crate::core::palette;
use crate::core::types::{IndicatorKind, ObservationYear};
use crate::data::store::DataStore;
use crate::error::DashResult;
use crate::render::{RenderHost, RenderSurface};

/// All-region statistics bar chart.
///
/// Unlike the region-following charts this binding takes (kind, year)
/// explicitly: it aggregates across every region rather than the selected
/// one. Region order is strictly alphabetical for determinism.
#[derive(Debug)]
pub struct BarBinding<S: RenderSurface> {
    surface: Option<S>,
}

impl<S: RenderSurface> Default for BarBinding<S> {
    fn default() -> Self {
        Self { surface: None }
    }
}

impl<S: RenderSurface> BarBinding<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init<H: RenderHost<Surface = S>>(
        &mut self,
        host: &mut H,
        container: &str,
    ) -> DashResult<()> {
        if let Some(mut previous) = self.surface.take() {
            previous.dispose();
        }
        self.surface = Some(host.create(container)?);
        Ok(())
    }

    pub fn update(
        &mut self,
        kind: IndicatorKind,
        year: ObservationYear,
        store: &DataStore,
    ) -> DashResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        surface.apply_option(&bar_option(kind, year, store), true)
    }

    pub fn resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize();
        }
    }
}

fn bar_option(kind: IndicatorKind, year: ObservationYear, store: &DataStore) -> Value {
    // The region universe is the overall dataset's (alphabetical) name list,
    // whichever dimension is displayed.
    let regions = store.overall_regions();
    let data: Vec<u8> = regions
        .iter()
        .map(|region| store.level(kind, region, year).get())
        .collect();

    json!({
        "title": {
            "text": format!("{} - {}年", kind.display_name(), year.as_str()),
            "textStyle": {"color": "#fff", "fontSize": 16},
            "left": "center",
            "top": 10
        },
        "tooltip": {
            "trigger": "axis",
            "axisPointer": {"type": "shadow"}
        },
        "yAxis": {
            "type": "category",
            "data": regions,
            "axisLabel": {"color": "#fff", "fontSize": 11, "margin": 8},
            "axisTick": {"alignWithLabel": true}
        },
        "xAxis": {
            "type": "value",
            "axisLabel": {"color": "#fff", "fontSize": 12},
            "splitLine": {
                "show": true,
                "lineStyle": {
                    "color": "rgba(255, 255, 255, 0.1)",
                    "type": "dashed"
                }
            }
        },
        "series": [{
            "name": kind.display_name(),
            "type": "bar",
            "data": data,
            "barWidth": "40%",
            "barCategoryGap": "30%",
            "itemStyle": {"color": palette::bar_color(kind)},
            "label": {"show": true, "position": "right", "color": "#fff"}
        }]
    })
}
