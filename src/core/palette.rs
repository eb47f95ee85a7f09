//! Fixed color tables for the dashboard widgets.
//!
//! The five-bucket map ramps, series and bar colors come from the deployed
//! page design and are looked up by indicator kind, never by raw string.

use crate::core::types::{IndicatorKind, Level};

/// Neutral area color for regions without data at the selected (kind, year).
pub const NO_DATA_AREA: &str = "#eee";
/// Area color for context (non-interactive) regions.
pub const BASE_AREA: &str = "#323c48";
pub const BASE_BORDER: &str = "rgba(22, 134, 204, 0.2)";
pub const OVERVIEW_BORDER: &str = "#1686cc";
pub const HIGHLIGHT_AREA: &str = "#FFD700";
pub const GOVERNED_BORDER: &str = "rgba(255, 255, 255, 0.7)";

/// Fallback for pie segments whose indicator name has no fixed color.
pub const PIE_FALLBACK: &str = "#5470c6";

/// Five-bucket map ramp for an indicator, indexed by `level - 1`.
#[must_use]
pub fn bucket_colors(kind: IndicatorKind) -> [&'static str; 5] {
    match kind {
        IndicatorKind::Overall => ["#c6e6ff", "#7ec2f3", "#3498db", "#2166ac", "#053061"],
        IndicatorKind::Gas => ["#ffe5e5", "#ffb3b3", "#ff8080", "#ff4d4d", "#cc0000"],
        IndicatorKind::Nature => ["#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#238b45"],
        IndicatorKind::Human => ["#fff7bc", "#fee391", "#fec44f", "#fe9929", "#ec7014"],
        IndicatorKind::Geological => ["#f2d7d5", "#d7bde2", "#af7ac5", "#884ea0", "#6c3483"],
    }
}

/// Map area color for a level; the sentinel maps to [`NO_DATA_AREA`].
#[must_use]
pub fn bucket_color(kind: IndicatorKind, level: Level) -> &'static str {
    match level.bucket() {
        Some(bucket) => bucket_colors(kind)[bucket],
        None => NO_DATA_AREA,
    }
}

/// Line color of the per-dimension trend/category charts.
#[must_use]
pub fn series_color(kind: IndicatorKind) -> &'static str {
    match kind {
        IndicatorKind::Overall => "#00ffff",
        IndicatorKind::Gas => "#ff7f50",
        IndicatorKind::Nature => "#90ee90",
        IndicatorKind::Human => "#73c0de",
        IndicatorKind::Geological => "#884ea0",
    }
}

/// Bar color of the all-region statistics chart.
#[must_use]
pub fn bar_color(kind: IndicatorKind) -> &'static str {
    match kind {
        IndicatorKind::Overall => "#36D1DC",
        IndicatorKind::Gas => "#FF6B6B",
        IndicatorKind::Nature => "#4CAF50",
        IndicatorKind::Human => "#FFD93D",
        IndicatorKind::Geological => "#884ea0",
    }
}

/// Inner-ring pie color for a weight subcategory.
#[must_use]
pub fn pie_category_color(name: &str) -> Option<&'static str> {
    match name {
        "地质敏感性" => Some("#91cc75"),
        "气候敏感性" => Some("#fac858"),
        "自然敏感性" => Some("#ee6666"),
        "人类干扰敏感性" => Some("#73c0de"),
        _ => None,
    }
}

/// Outer-ring pie color for a leaf indicator.
#[must_use]
pub fn pie_leaf_color(name: &str) -> Option<&'static str> {
    match name {
        "高程" => Some("#95c794"),
        "坡度" => Some("#7fb972"),
        "坡向" => Some("#67ab50"),
        "平均气温" => Some("#ffd77a"),
        "年均降水" => Some("#ffcb58"),
        "相对湿度" => Some("#ffbf36"),
        "NDVI" => Some("#ff8585"),
        "土地利用" => Some("#ff6363"),
        "水域" => Some("#ff4141"),
        "道路" => Some("#8fd1e8"),
        "人口密度" => Some("#73c0de"),
        _ => None,
    }
}
