//! Nearest-sample hit-testing for hover and pick feedback.

use crate::dataset::Dataset;
use crate::geom::ScreenPoint;
use crate::transform::Transform;

/// Pixel tolerance on each axis for a sample to count as picked.
pub const PICK_TOLERANCE: f64 = 5.0;

/// Find the sample under the cursor, if any.
///
/// Samples are scanned in dataset order and the first one whose screen
/// projection lies within [`PICK_TOLERANCE`] pixels on both axes wins, even
/// if a later sample is closer. The test is a box, not a circle.
pub fn pick_point(dataset: &Dataset, transform: &Transform, cursor: ScreenPoint) -> Option<usize> {
    for (index, point) in dataset.points().iter().enumerate() {
        let screen = transform.data_to_screen(*point);
        if (cursor.x - screen.x).abs() <= PICK_TOLERANCE
            && (cursor.y - screen.y).abs() <= PICK_TOLERANCE
        {
            return Some(index);
        }
    }
    None
}
