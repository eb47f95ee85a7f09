use serde_json::{Value, json};

use crate::core::palette;
use crate::core::weights::WeightDocument;
use crate::data::store::DataStore;
use crate::error::DashResult;
use crate::render::{RenderHost, RenderSurface};

/// Two-ring indicator weight pie: subcategories inside, weighted leaf
/// indicators outside.
#[derive(Debug)]
pub struct PieBinding<S: RenderSurface> {
    surface: Option<S>,
}

impl<S: RenderSurface> Default for PieBinding<S> {
    fn default() -> Self {
        Self { surface: None }
    }
}

impl<S: RenderSurface> PieBinding<S> {
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

    /// Projects the weight tree into the two rings. A missing weight
    /// document leaves the chart untouched.
    pub fn update(&mut self, store: &DataStore) -> DashResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let Some(weights) = store.weights() else {
            return Ok(());
        };
        surface.apply_option(&pie_option(weights), true)
    }

    pub fn resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize();
        }
    }
}

fn pie_option(weights: &WeightDocument) -> Value {
    let inner: Vec<Value> = weights
        .inner_ring()
        .into_iter()
        .map(|slice| {
            let color = palette::pie_category_color(&slice.name).unwrap_or(palette::PIE_FALLBACK);
            json!({
                "value": slice.value,
                "name": slice.name,
                "itemStyle": {"color": color}
            })
        })
        .collect();

    let outer: Vec<Value> = weights
        .outer_ring()
        .into_iter()
        .map(|slice| {
            let color = palette::pie_leaf_color(&slice.name).unwrap_or(palette::PIE_FALLBACK);
            json!({
                "value": slice.value,
                "name": slice.name,
                "parentName": slice.parent,
                "itemStyle": {"color": color}
            })
        })
        .collect();

    json!({
        "tooltip": {"trigger": "item"},
        "legend": {
            "type": "scroll",
            "orient": "vertical",
            "right": -20,
            "left": 20,
            "top": 20,
            "bottom": 20,
            "textStyle": {"color": "#fff"}
        },
        "series": [
            {
                "name": "主要指标",
                "type": "pie",
                "radius": ["0%", "40%"],
                "itemStyle": {
                    "borderRadius": 5,
                    "borderColor": "#fff",
                    "borderWidth": 2
                },
                "label": {
                    "show": true,
                    "position": "inner",
                    "fontSize": 14,
                    "color": "#fff"
                },
                "emphasis": {
                    "label": {"show": true, "fontSize": 16, "fontWeight": "bold"},
                    "itemStyle": {
                        "shadowBlur": 10,
                        "shadowOffsetX": 0,
                        "shadowColor": "rgba(0, 0, 0, 0.5)"
                    }
                },
                "data": inner
            },
            {
                "name": "具体指标",
                "type": "pie",
                "radius": ["45%", "70%"],
                "itemStyle": {
                    "borderRadius": 5,
                    "borderColor": "#fff",
                    "borderWidth": 2
                },
                "label": {
                    "show": true,
                    "position": "outside",
                    "color": "#fff"
                },
                "emphasis": {
                    "label": {"show": true, "fontSize": 16, "fontWeight": "bold"},
                    "itemStyle": {
                        "shadowBlur": 10,
                        "shadowOffsetX": 0,
                        "shadowColor": "rgba(0, 0, 0, 0.5)"
                    }
                },
                "labelLine": {
                    "length": 15,
                    "length2": 10,
                    "smooth": true,
                    "lineStyle": {"color": "#fff"}
                },
                "data": outer
            }
        ]
    })
}
