use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DashError, DashResult};

/// Indicator weight tree from `sensitivity_weights.json`.
///
/// The document is keyed by the Chinese indicator names of the upstream
/// evaluation model; `IndexMap` keeps document order so pie segments stay
/// stable across renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDocument {
    #[serde(rename = "综合生态敏感性")]
    pub composite: WeightCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightCategory {
    #[serde(rename = "权重值")]
    pub weight: f64,
    #[serde(rename = "子指标", default)]
    pub subcategories: IndexMap<String, WeightGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightGroup {
    #[serde(rename = "权重值")]
    pub weight: f64,
    #[serde(rename = "指标层", default)]
    pub indicators: IndexMap<String, WeightLeaf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLeaf {
    #[serde(rename = "权重值")]
    pub weight: f64,
}

/// One pie segment: a subcategory (inner ring) or a leaf indicator weighted
/// by its parent (outer ring).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightSlice {
    pub name: String,
    pub parent: Option<String>,
    pub value: f64,
}

impl WeightDocument {
    pub fn from_document(document: &Value) -> DashResult<Self> {
        serde_json::from_value(document.clone())
            .map_err(|e| DashError::fetch("sensitivity_weights.json", e))
    }

    /// Inner pie ring: the subcategory weights in document order.
    #[must_use]
    pub fn inner_ring(&self) -> Vec<WeightSlice> {
        self.composite
            .subcategories
            .iter()
            .map(|(name, group)| WeightSlice {
                name: name.clone(),
                parent: None,
                value: group.weight,
            })
            .collect()
    }

    /// Outer pie ring: leaf weights scaled by their parent subcategory.
    #[must_use]
    pub fn outer_ring(&self) -> Vec<WeightSlice> {
        self.composite
            .subcategories
            .iter()
            .flat_map(|(parent, group)| {
                group.indicators.iter().map(move |(name, leaf)| WeightSlice {
                    name: name.clone(),
                    parent: Some(parent.clone()),
                    value: group.weight * leaf.weight,
                })
            })
            .collect()
    }
}
