use crate::api::line_options::{base_line_option, region_year_levels, series_data_option};
use crate::core::selection::Selection;
use crate::core::types::IndicatorKind;
use crate::data::store::DataStore;
use crate::error::DashResult;
use crate::render::{RenderHost, RenderSurface};

/// Overall sensitivity trend of the selected region across the three
/// observation years.
#[derive(Debug)]
pub struct TrendBinding<S: RenderSurface> {
    surface: Option<S>,
}

impl<S: RenderSurface> Default for TrendBinding<S> {
    fn default() -> Self {
        Self { surface: None }
    }
}

impl<S: RenderSurface> TrendBinding<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the chart instance and applies the base option.
    ///
    /// Idempotent: a prior instance on the same container is disposed
    /// before the new one is created.
    pub fn init<H: RenderHost<Surface = S>>(
        &mut self,
        host: &mut H,
        container: &str,
    ) -> DashResult<()> {
        if let Some(mut previous) = self.surface.take() {
            previous.dispose();
        }
        let mut surface = host.create(container)?;
        surface.apply_option(&base_line_option(IndicatorKind::Overall), true)?;
        self.surface = Some(surface);
        Ok(())
    }

    /// Projects the selected region's overall levels into the chart.
    ///
    /// No selected region keeps the base placeholder; missing data renders
    /// as 0 points.
    pub fn update(&mut self, selection: &Selection, store: &DataStore) -> DashResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let Some(region) = selection.region.as_deref() else {
            return Ok(());
        };
        let levels = region_year_levels(store, IndicatorKind::Overall, region);
        surface.apply_option(&series_data_option(levels), false)
    }

    pub fn resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize();
        }
    }
}
