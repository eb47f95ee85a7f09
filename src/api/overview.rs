//! View-rectangle math for the map overview (mini-map) instance.
//!
//! The overview never roams; on every pan/zoom of the main map its view
//! rectangle is recomputed from the main view's (zoom, center) against a
//! fixed reference center and an assumed geographic span, then clamped to
//! the overview canvas.

use serde::Serialize;

/// Pixel size of the overview canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewCanvas {
    pub width: f64,
    pub height: f64,
}

impl OverviewCanvas {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for OverviewCanvas {
    fn default() -> Self {
        Self::new(150.0, 100.0)
    }
}

/// Clamped view rectangle in overview canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Geographic frame the overview projects the main view into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewFrame {
    /// Reference (longitude, latitude) the main view is measured against.
    pub reference_center: (f64, f64),
    /// Assumed longitude span of the overview canvas, in degrees.
    pub lon_span: f64,
    /// Assumed latitude span of the overview canvas, in degrees.
    pub lat_span: f64,
}

impl Default for OverviewFrame {
    fn default() -> Self {
        Self {
            reference_center: (126.5, 43.8),
            lon_span: 10.0,
            lat_span: 6.0,
        }
    }
}

impl OverviewFrame {
    /// Computes the clamped view rectangle for the main view state.
    ///
    /// A non-positive or non-finite zoom yields the full-canvas rectangle.
    #[must_use]
    pub fn view_rect(&self, canvas: OverviewCanvas, zoom: f64, center: (f64, f64)) -> ViewRect {
        if !(zoom.is_finite() && zoom > 0.0) {
            return ViewRect {
                x: 0.0,
                y: 0.0,
                width: canvas.width,
                height: canvas.height,
            };
        }

        let view_width = canvas.width / zoom;
        let view_height = canvas.height / zoom;

        let offset_x = ((center.0 - self.reference_center.0) / self.lon_span) * canvas.width;
        let offset_y = ((self.reference_center.1 - center.1) / self.lat_span) * canvas.height;

        let x = (canvas.width - view_width) / 2.0 + offset_x;
        let y = (canvas.height - view_height) / 2.0 + offset_y;

        ViewRect {
            x: x.clamp(0.0, (canvas.width - view_width).max(0.0)),
            y: y.clamp(0.0, (canvas.height - view_height).max(0.0)),
            width: view_width.min(canvas.width),
            height: view_height.min(canvas.height),
        }
    }
}
