//! Sample storage backing a single plot.

use crate::geom::Point;
use crate::view::{Range, Viewport};

/// Ordered sequence of samples for one plot.
///
/// Insertion order is sample order: the curve is a polyline through the
/// samples as given, not sorted by X. The dataset is replaced wholesale on
/// load; the only in-place mutation is drag-to-edit of a picked sample.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Create a dataset from an ordered sample sequence.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Access the samples in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Access one sample by index.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Replace one sample in place. Returns false if the index is out of
    /// bounds.
    pub(crate) fn set_point(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Bounding box of all samples, computed in a single pass.
    ///
    /// Returns `None` for an empty dataset. The box may have zero extent on
    /// one or both axes (repeated values, single sample).
    pub fn bounds(&self) -> Option<Viewport> {
        let first = self.points.first()?;
        let mut x = Range::new(first.x, first.x);
        let mut y = Range::new(first.y, first.y);
        for point in &self.points[1..] {
            x.expand_to_include(point.x);
            y.expand_to_include(point.y);
        }
        Some(Viewport::new(x, y))
    }
}
