pub mod source;
pub mod store;

#[cfg(feature = "http-source")]
pub use source::HttpSource;
pub use source::{
    BASE_GEOGRAPHY_DOCUMENT, DirectorySource, DocumentSource, MemorySource,
    OVERLAY_GEOGRAPHY_DOCUMENT, REGION_DESCRIPTIONS_DOCUMENT, WEIGHTS_DOCUMENT,
};
pub use store::DataStore;
