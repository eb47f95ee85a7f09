use geojson::{Feature, FeatureCollection, GeoJson};
use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{DashError, DashResult};

/// Registered name of the merged map geometry.
pub const MERGED_MAP_NAME: &str = "merged";

/// Canonical name property read by the renderer.
pub const CANONICAL_NAME_KEY: &str = "name";
/// Upstream overlay documents key their features by this property instead.
pub const FALLBACK_NAME_KEY: &str = "NAME";

/// Base-document features dropped before the merge. 朝阳区 is the Beijing
/// district whose name collides with the Jilin county of the same name;
/// 吉林省 is the province outline the overlay counties replace.
pub const DEFAULT_EXCLUSIONS: [&str; 2] = ["朝阳区", "吉林省"];

/// Base and overlay geography merged into one renderable feature collection.
///
/// Overlay features are guaranteed a canonical `name` property and form the
/// governed (interactive) region set; base features remain for visual
/// context only.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedGeography {
    collection: FeatureCollection,
    governed: IndexSet<String>,
}

impl MergedGeography {
    /// Merges the base (national) and overlay (county) documents.
    ///
    /// Either input lacking a `features` array is rejected with
    /// `DashError::Geometry`; callers must not partially render in that
    /// case. Base features named in `exclusions` are dropped.
    pub fn build(base: &Value, overlay: &Value, exclusions: &[String]) -> DashResult<Self> {
        let base = parse_collection("base geography", base)?;
        let overlay = parse_collection("overlay geography", overlay)?;

        let mut features: Vec<Feature> = base
            .features
            .into_iter()
            .filter(|feature| {
                feature_name(feature)
                    .is_none_or(|name| !exclusions.iter().any(|excluded| excluded == name))
            })
            .collect();
        let context_count = features.len();

        let mut governed = IndexSet::new();
        for mut feature in overlay.features {
            normalize_name(&mut feature);
            if let Some(name) = feature_name(&feature) {
                governed.insert(name.to_owned());
            }
            features.push(feature);
        }

        for feature in &features[..context_count] {
            if let Some(name) = feature_name(feature) {
                if governed.contains(name) {
                    warn!(region = name, "context feature shadows a governed region");
                }
            }
        }

        debug!(
            context = context_count,
            governed = governed.len(),
            "merged geography"
        );

        Ok(Self {
            collection: FeatureCollection {
                bbox: None,
                features,
                foreign_members: None,
            },
            governed,
        })
    }

    #[must_use]
    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.collection.features.len()
    }

    /// Interactive region names, in overlay document order.
    pub fn governed(&self) -> impl Iterator<Item = &str> {
        self.governed.iter().map(String::as_str)
    }

    #[must_use]
    pub fn governed_count(&self) -> usize {
        self.governed.len()
    }

    #[must_use]
    pub fn is_governed(&self, name: &str) -> bool {
        self.governed.contains(name)
    }

    /// Context (non-interactive) feature names, deduplicated against the
    /// governed set.
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.collection
            .features
            .iter()
            .filter_map(feature_name)
            .filter(|name| !self.governed.contains(*name))
    }
}

fn parse_collection(label: &str, raw: &Value) -> DashResult<FeatureCollection> {
    if raw.get("features").and_then(Value::as_array).is_none() {
        return Err(DashError::Geometry(format!(
            "{label}: missing `features` array"
        )));
    }

    let geojson = GeoJson::from_json_value(raw.clone())
        .map_err(|e| DashError::Geometry(format!("{label}: {e}")))?;
    FeatureCollection::try_from(geojson)
        .map_err(|e| DashError::Geometry(format!("{label}: {e}")))
}

fn feature_name(feature: &Feature) -> Option<&str> {
    feature
        .properties
        .as_ref()?
        .get(CANONICAL_NAME_KEY)?
        .as_str()
}

/// Copies the fallback `NAME` property into `name` when `name` is absent.
fn normalize_name(feature: &mut Feature) {
    let Some(properties) = feature.properties.as_mut() else {
        return;
    };
    if properties.contains_key(CANONICAL_NAME_KEY) {
        return;
    }
    if let Some(fallback) = properties.get(FALLBACK_NAME_KEY).cloned() {
        properties.insert(CANONICAL_NAME_KEY.to_owned(), fallback);
    }
}
