use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::types::{IndicatorKind, Level, ObservationYear, YearSeries};
use crate::error::{DashError, DashResult};

/// Severity keywords checked most-severe-first when deriving a label from a
/// region description. First match wins.
pub const SEVERITY_KEYWORDS: [&str; 4] = ["极度敏感", "高度敏感", "中度敏感", "轻度敏感"];

pub const LABEL_NOT_SENSITIVE: &str = "不敏感";
pub const NO_DESCRIPTION: &str = "暂无描述";

/// Fallback level-label table used before any dataset is available.
pub const DEFAULT_LEVEL_LABELS: [&str; 5] =
    ["不敏感", "轻度敏感", "中度敏感", "高度敏感", "极度敏感"];

/// Derives a severity label from free-text region description.
#[must_use]
pub fn severity_label(description: &str) -> &'static str {
    SEVERITY_KEYWORDS
        .iter()
        .find(|keyword| description.contains(*keyword))
        .copied()
        .unwrap_or(LABEL_NOT_SENSITIVE)
}

/// One parsed sensitivity dataset: the 5-entry level-label table plus the
/// per-region year series.
///
/// Regions are kept in a `BTreeMap` so iteration is alphabetical by
/// construction regardless of document key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityDataset {
    kind: IndicatorKind,
    levels: [String; 5],
    regions: BTreeMap<String, YearSeries>,
}

impl SensitivityDataset {
    /// Parses a dataset document fetched from the static bundle.
    ///
    /// The payload object is looked up under `kind.data_key()`; the label
    /// table must carry exactly the keys 1..=5.
    pub fn from_document(kind: IndicatorKind, document: &Value) -> DashResult<Self> {
        let levels = parse_level_labels(kind, document)?;

        let data = document
            .get(kind.data_key())
            .and_then(Value::as_object)
            .ok_or_else(|| {
                DashError::fetch(
                    kind.dataset_file(),
                    format!("missing `{}` object", kind.data_key()),
                )
            })?;

        let mut regions = BTreeMap::new();
        for (region, years) in data {
            let years = years.as_object().ok_or_else(|| {
                DashError::fetch(
                    kind.dataset_file(),
                    format!("region `{region}` is not a year table"),
                )
            })?;

            let mut series = YearSeries::default();
            for year in ObservationYear::ALL {
                if let Some(raw) = years.get(year.as_str()) {
                    let level = raw
                        .as_u64()
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Level::new)
                        .ok_or_else(|| {
                            DashError::fetch(
                                kind.dataset_file(),
                                format!("region `{region}` year {} is not a level 1..=5", year.as_str()),
                            )
                        })?;
                    series.set(year, level);
                }
            }
            regions.insert(region.clone(), series);
        }

        Ok(Self {
            kind,
            levels,
            regions,
        })
    }

    #[must_use]
    pub fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Level for (region, year); `Level::NONE` when either key is absent.
    #[must_use]
    pub fn level(&self, region: &str, year: ObservationYear) -> Level {
        self.regions
            .get(region)
            .map_or(Level::NONE, |series| series.level(year))
    }

    /// Display label for a valid level, `None` for the sentinel.
    #[must_use]
    pub fn level_label(&self, level: Level) -> Option<&str> {
        level.bucket().map(|bucket| self.levels[bucket].as_str())
    }

    /// Region names in alphabetical order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains_region(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

fn parse_level_labels(kind: IndicatorKind, document: &Value) -> DashResult<[String; 5]> {
    let table = document
        .get("sensitivity_levels")
        .and_then(Value::as_object)
        .ok_or_else(|| DashError::fetch(kind.dataset_file(), "missing `sensitivity_levels` object"))?;

    if table.len() != 5 {
        return Err(DashError::fetch(
            kind.dataset_file(),
            format!("expected 5 level labels, found {}", table.len()),
        ));
    }

    let mut labels: [String; 5] = Default::default();
    for value in Level::MIN..=Level::MAX {
        let label = table
            .get(&value.to_string())
            .and_then(Value::as_str)
            .ok_or_else(|| {
                DashError::fetch(kind.dataset_file(), format!("missing label for level {value}"))
            })?;
        labels[usize::from(value) - 1] = label.to_owned();
    }
    Ok(labels)
}

/// One region entry of `region_descriptions.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDescription {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct RegionDescriptionsDocument {
    region_descriptions: Vec<RegionDescription>,
}

/// Name-indexed region descriptions, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionDirectory {
    entries: IndexMap<String, RegionDescription>,
}

impl RegionDirectory {
    pub fn from_document(document: &Value) -> DashResult<Self> {
        let parsed: RegionDescriptionsDocument = serde_json::from_value(document.clone())
            .map_err(|e| DashError::fetch("region_descriptions.json", e))?;

        let mut entries = IndexMap::new();
        for region in parsed.region_descriptions {
            entries.insert(region.name.clone(), region);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegionDescription> {
        self.entries.get(name)
    }

    /// Severity label for a region, derived from its description text.
    #[must_use]
    pub fn severity_label_for(&self, name: &str) -> Option<&'static str> {
        self.get(name)
            .map(|region| severity_label(&region.description))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
