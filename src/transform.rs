//! Coordinate transforms between data and screen space.
//!
//! A [`Transform`] is rebuilt from the active range and the current canvas
//! size on every redraw; no scale survives a resize.

use crate::error::{PlotError, Result};
use crate::geom::{Point, ScreenPoint};
use crate::view::{Range, Viewport};

/// Span substituted for a range that is degenerate on both axes.
pub const FALLBACK_SPAN: f64 = 1.0;

/// Aspect-preserving affine mapping between data and screen coordinates.
///
/// The scale is `min(width / span_x, height / span_y)`; the axis with
/// surplus canvas space has its bounds inflated symmetrically so the
/// requested range stays centered and undistorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: f64,
    visible: Viewport,
}

impl Transform {
    /// Create a transform for the given range and canvas size in pixels.
    ///
    /// A range that is degenerate on one axis borrows the other axis's
    /// scale; a range degenerate on both axes fails with
    /// [`PlotError::DegenerateRange`].
    pub fn new(range: Viewport, width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(PlotError::EmptyCanvas { width, height });
        }
        let span_x = range.x.span();
        let span_y = range.y.span();
        let scale_x = (span_x > 0.0).then(|| width / span_x);
        let scale_y = (span_y > 0.0).then(|| height / span_y);
        let scale = match (scale_x, scale_y) {
            (Some(sx), Some(sy)) => sx.min(sy),
            (Some(sx), None) => sx,
            (None, Some(sy)) => sy,
            (None, None) => return Err(PlotError::DegenerateRange),
        };
        // Zero on the axis whose scale was chosen as the minimum.
        let x_pad = (width / scale - span_x) / 2.0;
        let y_pad = (height / scale - span_y) / 2.0;
        let visible = Viewport::new(
            Range::new(range.x.min - x_pad, range.x.max + x_pad),
            Range::new(range.y.min - y_pad, range.y.max + y_pad),
        );
        Ok(Self { scale, visible })
    }

    /// Create a transform, substituting [`FALLBACK_SPAN`] when the range is
    /// degenerate on both axes.
    ///
    /// This is the render-path constructor: a single-sample dataset ends up
    /// centered on the canvas instead of failing.
    pub fn with_fallback(range: Viewport, width: f64, height: f64) -> Result<Self> {
        match Self::new(range, width, height) {
            Err(PlotError::DegenerateRange) => {
                let padded = Viewport::new(
                    range.x.with_min_span(FALLBACK_SPAN),
                    range.y.with_min_span(FALLBACK_SPAN),
                );
                Self::new(padded, width, height)
            }
            other => other,
        }
    }

    /// Pixels per data unit, identical on both axes.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The corrected range actually filling the canvas.
    pub fn visible(&self) -> Viewport {
        self.visible
    }

    /// Map a data point into screen space. Screen Y grows downward.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(
            (point.x - self.visible.x.min) * self.scale,
            (self.visible.y.max - point.y) * self.scale,
        )
    }

    /// Map a screen point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Point {
        Point::new(
            point.x / self.scale + self.visible.x.min,
            self.visible.y.max - point.y / self.scale,
        )
    }
}
