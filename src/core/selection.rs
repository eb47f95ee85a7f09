use serde::Serialize;

use crate::core::types::{IndicatorKind, ObservationYear};
use crate::error::DashResult;

/// The shared dashboard selection: indicator dimension, observation year and
/// the optionally selected region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub indicator: IndicatorKind,
    pub year: ObservationYear,
    pub region: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            indicator: IndicatorKind::Overall,
            year: ObservationYear::Y2023,
            region: None,
        }
    }
}

/// Partial selection mutation; only the provided fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub indicator: Option<IndicatorKind>,
    pub year: Option<ObservationYear>,
    pub region: Option<String>,
}

impl SelectionUpdate {
    #[must_use]
    pub fn indicator(kind: IndicatorKind) -> Self {
        Self {
            indicator: Some(kind),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn year(year: ObservationYear) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn region(name: impl Into<String>) -> Self {
        Self {
            region: Some(name.into()),
            ..Self::default()
        }
    }

    /// Parses control labels into a typed update.
    ///
    /// An unknown label is rejected with `DashError::InvalidSelection`
    /// before any state is touched.
    pub fn parse(indicator: Option<&str>, year: Option<&str>) -> DashResult<Self> {
        let indicator = indicator.map(IndicatorKind::from_label).transpose()?;
        let year = year.map(ObservationYear::from_label).transpose()?;
        Ok(Self {
            indicator,
            year,
            region: None,
        })
    }
}

/// Single source of truth for the current selection.
///
/// Mutated only by the dashboard controller (single writer); every widget
/// reads the snapshot handed to it during a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    #[must_use]
    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Applies the provided fields and returns the new snapshot.
    pub fn select(&mut self, update: SelectionUpdate) -> Selection {
        if let Some(indicator) = update.indicator {
            self.current.indicator = indicator;
        }
        if let Some(year) = update.year {
            self.current.year = year;
        }
        if let Some(region) = update.region {
            self.current.region = Some(region);
        }
        self.current.clone()
    }

    /// Parses and applies control labels in one step.
    ///
    /// On a parse failure the prior selection is retained unchanged.
    pub fn select_labels(
        &mut self,
        indicator: Option<&str>,
        year: Option<&str>,
    ) -> DashResult<Selection> {
        let update = SelectionUpdate::parse(indicator, year)?;
        Ok(self.select(update))
    }
}
