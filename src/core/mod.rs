pub mod dataset;
pub mod geo;
pub mod palette;
pub mod selection;
pub mod types;
pub mod weights;

pub use dataset::{
    DEFAULT_LEVEL_LABELS, RegionDescription, RegionDirectory, SensitivityDataset, severity_label,
};
pub use geo::{DEFAULT_EXCLUSIONS, MERGED_MAP_NAME, MergedGeography};
pub use selection::{Selection, SelectionState, SelectionUpdate};
pub use types::{IndicatorKind, Level, ObservationYear, YearSeries};
pub use weights::{WeightDocument, WeightSlice};
