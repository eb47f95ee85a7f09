use serde::Serialize;

use crate::error::{DashError, DashResult};

/// The five sensitivity dimensions the dashboard can display.
///
/// Every string-keyed dispatch of the data bundle (file names, payload keys,
/// display labels) is resolved through this enum in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorKind {
    Overall,
    Gas,
    Nature,
    Human,
    Geological,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 5] = [
        IndicatorKind::Overall,
        IndicatorKind::Gas,
        IndicatorKind::Nature,
        IndicatorKind::Human,
        IndicatorKind::Geological,
    ];

    /// Position of this dimension in fixed dashboard order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            IndicatorKind::Overall => 0,
            IndicatorKind::Gas => 1,
            IndicatorKind::Nature => 2,
            IndicatorKind::Human => 3,
            IndicatorKind::Geological => 4,
        }
    }

    /// Document name of the backing dataset in the static bundle.
    ///
    /// The geological series is published by the upstream pipeline under the
    /// `climate_*` file and payload names.
    #[must_use]
    pub fn dataset_file(self) -> &'static str {
        match self {
            IndicatorKind::Overall => "sensitivity_levels.json",
            IndicatorKind::Gas => "gas_sensitivity_levels.json",
            IndicatorKind::Nature => "nature_sensitivity_levels.json",
            IndicatorKind::Human => "human_sensitivity_levels.json",
            IndicatorKind::Geological => "climate_sensitivity_levels.json",
        }
    }

    /// Key of the per-region payload object inside the dataset document.
    #[must_use]
    pub fn data_key(self) -> &'static str {
        match self {
            IndicatorKind::Overall => "sensitivity_data",
            IndicatorKind::Gas => "gas_sensitivity_data",
            IndicatorKind::Nature => "nature_sensitivity_data",
            IndicatorKind::Human => "human_sensitivity_data",
            IndicatorKind::Geological => "climate_sensitivity_data",
        }
    }

    /// Display label, as used by the dashboard controls and chart titles.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            IndicatorKind::Overall => "生态敏感性",
            IndicatorKind::Gas => "气候敏感性",
            IndicatorKind::Nature => "自然敏感性",
            IndicatorKind::Human => "人类干扰敏感性",
            IndicatorKind::Geological => "地质敏感性",
        }
    }

    /// Series name used by the per-dimension line charts.
    #[must_use]
    pub fn series_name(self) -> &'static str {
        match self {
            IndicatorKind::Overall => "敏感性等级",
            IndicatorKind::Gas => "气敏等级",
            IndicatorKind::Nature => "自然敏感等级",
            IndicatorKind::Human => "人类干扰敏感等级",
            IndicatorKind::Geological => "地质敏感等级",
        }
    }

    /// Parses a control label back into its dimension.
    pub fn from_label(label: &str) -> DashResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.display_name() == label)
            .ok_or_else(|| DashError::InvalidSelection(format!("unknown indicator `{label}`")))
    }
}

/// The three observation years carried by every sensitivity dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ObservationYear {
    Y2017,
    Y2020,
    Y2023,
}

impl ObservationYear {
    pub const ALL: [ObservationYear; 3] = [
        ObservationYear::Y2017,
        ObservationYear::Y2020,
        ObservationYear::Y2023,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ObservationYear::Y2017 => "2017",
            ObservationYear::Y2020 => "2020",
            ObservationYear::Y2023 => "2023",
        }
    }

    pub fn from_label(label: &str) -> DashResult<Self> {
        Self::ALL
            .into_iter()
            .find(|year| year.as_str() == label)
            .ok_or_else(|| DashError::InvalidSelection(format!("unknown year `{label}`")))
    }
}

/// Severity bucket reported by the sensitivity datasets.
///
/// `Level::NONE` is the canonical "no data" sentinel. It is distinct from
/// level 1 ("not sensitive") and renders as a neutral gray on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const NONE: Level = Level(0);
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Accepts only the valid severity range 1..=5.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Zero-based color-bucket index (`level - 1`), `None` for the sentinel.
    #[must_use]
    pub fn bucket(self) -> Option<usize> {
        if self.is_none() {
            None
        } else {
            Some(usize::from(self.0) - 1)
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::NONE
    }
}

/// Levels observed for one region across the three observation years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YearSeries {
    pub y2017: Level,
    pub y2020: Level,
    pub y2023: Level,
}

impl YearSeries {
    #[must_use]
    pub fn level(self, year: ObservationYear) -> Level {
        match year {
            ObservationYear::Y2017 => self.y2017,
            ObservationYear::Y2020 => self.y2020,
            ObservationYear::Y2023 => self.y2023,
        }
    }

    pub fn set(&mut self, year: ObservationYear, level: Level) {
        match year {
            ObservationYear::Y2017 => self.y2017 = level,
            ObservationYear::Y2020 => self.y2020 = level,
            ObservationYear::Y2023 => self.y2023 = level,
        }
    }
}
