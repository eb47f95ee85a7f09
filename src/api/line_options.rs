//! Shared option skeleton for the trend and per-dimension line charts.

use serde_json::{Value, json};

use crate::core::palette;
use crate::core::types::{IndicatorKind, ObservationYear};
use crate::data::store::DataStore;

/// Full base option for a three-year level line chart.
pub(crate) fn base_line_option(kind: IndicatorKind) -> Value {
    let color = palette::series_color(kind);
    json!({
        "grid": {
            "top": "15%",
            "left": "3%",
            "right": "4%",
            "bottom": "3%",
            "containLabel": true
        },
        "xAxis": {
            "type": "category",
            "data": ObservationYear::ALL.map(ObservationYear::as_str),
            "axisLabel": {"color": "#fff"}
        },
        "yAxis": {
            "type": "value",
            "min": 1,
            "max": 5,
            "interval": 1,
            "axisLabel": {"color": "#fff"}
        },
        "tooltip": {"trigger": "axis"},
        "series": [{
            "name": kind.series_name(),
            "type": "line",
            "smooth": true,
            "lineStyle": {"color": color, "width": 3},
            "itemStyle": {"color": color},
            "symbolSize": 8,
            "data": [1, 1, 1]
        }]
    })
}

/// Incremental option carrying only the series data.
pub(crate) fn series_data_option(levels: [u8; 3]) -> Value {
    json!({"series": [{"data": levels}]})
}

/// The region's three-year levels in one dimension; missing entries map to
/// 0 ("no data") rather than being skipped.
pub(crate) fn region_year_levels(
    store: &DataStore,
    kind: IndicatorKind,
    region: &str,
) -> [u8; 3] {
    ObservationYear::ALL.map(|year| store.level(kind, region, year).get())
}
