//! Zoom history as a stack of visited ranges.

use tracing::debug;

use crate::error::{PlotError, Result};
use crate::geom::ScreenPoint;
use crate::transform::Transform;
use crate::view::{Range, Viewport};

/// Stack of visited data ranges; the top is the active viewing range.
///
/// The stack is non-empty by construction: element 0 is the full bounding
/// box of the current dataset, established at creation or on [`reset`].
///
/// [`reset`]: ZoomStack::reset
#[derive(Debug, Clone)]
pub struct ZoomStack {
    ranges: Vec<Viewport>,
}

impl ZoomStack {
    /// Create a stack holding the dataset bounding box.
    pub fn new(bounds: Viewport) -> Self {
        Self {
            ranges: vec![bounds],
        }
    }

    /// Clear the stack down to a single bounding-box entry.
    pub fn reset(&mut self, bounds: Viewport) {
        self.ranges.clear();
        self.ranges.push(bounds);
    }

    /// Push a new active range.
    ///
    /// The range need not be contained in the previous top: a drag outside
    /// the current view still becomes the new active range. Ranges with
    /// zero area are rejected with [`PlotError::EmptyZoomRegion`] and the
    /// prior range stays active.
    pub fn push(&mut self, range: Viewport) -> Result<()> {
        if !range.has_area() {
            return Err(PlotError::EmptyZoomRegion);
        }
        self.ranges.push(range);
        debug!(depth = self.ranges.len(), "zoom range pushed");
        Ok(())
    }

    /// Remove the top range, unless only the bounding box remains.
    ///
    /// Returns whether a range was removed.
    pub fn pop(&mut self) -> bool {
        if self.ranges.len() <= 1 {
            return false;
        }
        self.ranges.pop();
        debug!(depth = self.ranges.len(), "zoom range popped");
        true
    }

    /// The active viewing range.
    pub fn current(&self) -> Viewport {
        // Non-empty by construction.
        self.ranges[self.ranges.len() - 1]
    }

    /// Number of ranges on the stack.
    pub fn depth(&self) -> usize {
        self.ranges.len()
    }
}

/// Convert two arbitrary screen corners into a normalized data range.
///
/// Both corners go through the inverse mapping; element-wise min/max makes
/// the result independent of drag direction.
pub fn viewport_from_screen_rect(
    transform: &Transform,
    a: ScreenPoint,
    b: ScreenPoint,
) -> Viewport {
    let p1 = transform.screen_to_data(a);
    let p2 = transform.screen_to_data(b);
    Viewport::new(Range::new(p1.x, p2.x), Range::new(p1.y, p2.y))
}
