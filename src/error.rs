use std::fmt::Display;

use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

/// Error taxonomy for the dashboard engine.
///
/// Errors are contained at the component boundary that detects them:
/// `Fetch` never aborts sibling document loads, `Geometry` is fatal to the
/// map widget only, `InvalidSelection` leaves the prior selection in place,
/// and `Render` feeds the map retry policy.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("failed to load {name}: {reason}")]
    Fetch { name: String, reason: String },

    #[error("malformed geography: {0}")]
    Geometry(String),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("render failure: {0}")]
    Render(String),
}

impl DashError {
    pub fn fetch(name: impl Into<String>, reason: impl Display) -> Self {
        Self::Fetch {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
