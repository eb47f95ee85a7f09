use crate::api::line_options::{base_line_option, region_year_levels, series_data_option};
use crate::core::selection::Selection;
use crate::core::types::IndicatorKind;
use crate::data::store::DataStore;
use crate::error::DashResult;
use crate::render::{RenderHost, RenderSurface};

/// Line chart for one fixed sensitivity dimension (gas, nature or human
/// disturbance), following the shared region selection.
#[derive(Debug)]
pub struct CategoryBinding<S: RenderSurface> {
    kind: IndicatorKind,
    surface: Option<S>,
}

impl<S: RenderSurface> CategoryBinding<S> {
    #[must_use]
    pub fn new(kind: IndicatorKind) -> Self {
        Self {
            kind,
            surface: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Creates the chart instance; a prior instance on the same container
    /// is disposed first.
    pub fn init<H: RenderHost<Surface = S>>(
        &mut self,
        host: &mut H,
        container: &str,
    ) -> DashResult<()> {
        if let Some(mut previous) = self.surface.take() {
            previous.dispose();
        }
        let mut surface = host.create(container)?;
        surface.apply_option(&base_line_option(self.kind), true)?;
        self.surface = Some(surface);
        Ok(())
    }

    pub fn update(&mut self, selection: &Selection, store: &DataStore) -> DashResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let Some(region) = selection.region.as_deref() else {
            return Ok(());
        };
        let levels = region_year_levels(store, self.kind, region);
        surface.apply_option(&series_data_option(levels), false)
    }

    pub fn resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize();
        }
    }
}
