use serde::Serialize;

use crate::core::selection::Selection;
use crate::core::types::{IndicatorKind, ObservationYear};

/// One dashboard control button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlButton {
    pub label: String,
    pub active: bool,
}

/// Declarative state of the dashboard controls.
///
/// Derived from the selection snapshot on demand; the engine never retains
/// UI state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlPanel {
    pub indicator_buttons: Vec<ControlButton>,
    pub year_buttons: Vec<ControlButton>,
}

#[must_use]
pub fn control_panel(selection: &Selection) -> ControlPanel {
    ControlPanel {
        indicator_buttons: IndicatorKind::ALL
            .into_iter()
            .map(|kind| ControlButton {
                label: kind.display_name().to_owned(),
                active: kind == selection.indicator,
            })
            .collect(),
        year_buttons: ObservationYear::ALL
            .into_iter()
            .map(|year| ControlButton {
                label: year.as_str().to_owned(),
                active: year == selection.year,
            })
            .collect(),
    }
}

/// Title of the all-region statistics panel.
#[must_use]
pub fn statistics_title(kind: IndicatorKind, year: ObservationYear) -> String {
    format!("{}年{}统计情况", year.as_str(), kind.display_name())
}
