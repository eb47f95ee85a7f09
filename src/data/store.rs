use tracing::{debug, warn};

use crate::core::dataset::{RegionDirectory, SensitivityDataset};
use crate::core::types::{IndicatorKind, Level, ObservationYear};
use crate::core::weights::WeightDocument;
use crate::data::source::{DocumentSource, REGION_DESCRIPTIONS_DOCUMENT, WEIGHTS_DOCUMENT};

/// Holds every dataset of the dashboard after the one-shot load pass.
///
/// Populated once at startup and read-only afterwards. Each document fails
/// softly: a fetch or parse error is logged and leaves that slot empty
/// while the sibling loads proceed.
#[derive(Debug, Default)]
pub struct DataStore {
    datasets: [Option<SensitivityDataset>; 5],
    directory: Option<RegionDirectory>,
    weights: Option<WeightDocument>,
    settled: bool,
}

impl DataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one load pass over every document of the bundle.
    ///
    /// All requests are issued in the same pass and the store only reports
    /// ready once every one of them has settled, so a render pass can never
    /// observe a half-loaded bundle.
    pub fn load(&mut self, source: &dyn DocumentSource) {
        for kind in IndicatorKind::ALL {
            let loaded = source
                .fetch(kind.dataset_file())
                .and_then(|document| SensitivityDataset::from_document(kind, &document));
            match loaded {
                Ok(dataset) => {
                    debug!(
                        file = kind.dataset_file(),
                        regions = dataset.region_count(),
                        "loaded sensitivity dataset"
                    );
                    self.datasets[kind.index()] = Some(dataset);
                }
                Err(err) => {
                    warn!(
                        error = %err,
                        file = kind.dataset_file(),
                        "sensitivity dataset unavailable"
                    );
                }
            }
        }

        match source
            .fetch(REGION_DESCRIPTIONS_DOCUMENT)
            .and_then(|document| RegionDirectory::from_document(&document))
        {
            Ok(directory) => {
                debug!(regions = directory.len(), "loaded region descriptions");
                self.directory = Some(directory);
            }
            Err(err) => warn!(error = %err, "region descriptions unavailable"),
        }

        match source
            .fetch(WEIGHTS_DOCUMENT)
            .and_then(|document| WeightDocument::from_document(&document))
        {
            Ok(weights) => {
                debug!(
                    subcategories = weights.composite.subcategories.len(),
                    "loaded indicator weights"
                );
                self.weights = Some(weights);
            }
            Err(err) => warn!(error = %err, "indicator weights unavailable"),
        }

        self.settled = true;
    }

    /// True once a load pass has settled (every fetch succeeded or was
    /// caught). This is the gate for chart wiring and the first render.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.settled
    }

    /// True when all five sensitivity datasets are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.datasets.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn dataset(&self, kind: IndicatorKind) -> Option<&SensitivityDataset> {
        self.datasets[kind.index()].as_ref()
    }

    /// Level at (kind, region, year); `Level::NONE` when any key is absent.
    #[must_use]
    pub fn level(&self, kind: IndicatorKind, region: &str, year: ObservationYear) -> Level {
        self.dataset(kind)
            .map_or(Level::NONE, |dataset| dataset.level(region, year))
    }

    /// Display label for a level in a dimension, falling back to the
    /// built-in table when that dataset is missing.
    #[must_use]
    pub fn level_label(&self, kind: IndicatorKind, level: Level) -> Option<&str> {
        match self.dataset(kind) {
            Some(dataset) => dataset.level_label(level),
            None => level
                .bucket()
                .map(|bucket| crate::core::dataset::DEFAULT_LEVEL_LABELS[bucket]),
        }
    }

    /// The region universe of the dashboard: the overall dataset's region
    /// names, alphabetical.
    #[must_use]
    pub fn overall_regions(&self) -> Vec<&str> {
        self.dataset(IndicatorKind::Overall)
            .map(|dataset| dataset.region_names().collect())
            .unwrap_or_default()
    }

    /// Whether the region exists in the overall dataset.
    #[must_use]
    pub fn has_region(&self, name: &str) -> bool {
        self.dataset(IndicatorKind::Overall)
            .is_some_and(|dataset| dataset.contains_region(name))
    }

    #[must_use]
    pub fn directory(&self) -> Option<&RegionDirectory> {
        self.directory.as_ref()
    }

    #[must_use]
    pub fn weights(&self) -> Option<&WeightDocument> {
        self.weights.as_ref()
    }
}
