//! Fixed drawing styles.
//!
//! The plot's look is not configurable; every stroke, dash pattern, color,
//! and font size is a constant here.

use crate::render::Color;

/// Background fill.
pub(crate) const BACKGROUND: Color = Color::WHITE;

/// Curve stroke color.
pub(crate) const CURVE_COLOR: Color = Color::RED;
/// Curve stroke width in pixels.
pub(crate) const CURVE_WIDTH: f64 = 2.0;
/// Curve dash pattern in pixels.
pub(crate) const CURVE_DASH: &[f64] = &[2.0, 3.0, 4.0, 3.0, 2.0, 3.0, 8.0, 3.0, 4.0, 3.0, 2.0];

/// Axis stroke color, arrow fill, and label color.
pub(crate) const AXIS_COLOR: Color = Color::BLACK;
/// Axis stroke width in pixels.
pub(crate) const AXIS_WIDTH: f64 = 2.0;
/// Axis label font size in pixels.
pub(crate) const AXIS_FONT_SIZE: f64 = 36.0;
/// Arrowhead width at its base in pixels.
pub(crate) const ARROW_WIDTH: f64 = 10.0;
/// Arrowhead length from tip to base in pixels.
pub(crate) const ARROW_LENGTH: f64 = 20.0;

/// Marker outline width in pixels.
pub(crate) const MARKER_WIDTH: f64 = 1.0;
/// Marker outline for samples with even `floor(x)`.
pub(crate) const MARKER_EVEN_COLOR: Color = Color::BLUE;
/// Marker outline for samples with odd `floor(x)`.
pub(crate) const MARKER_ODD_COLOR: Color = Color::RED;

/// Star-burst marker outline: pixel offsets of the 20 vertices around the
/// sample's screen position, in drawing order.
pub(crate) const MARKER_OUTLINE: [(f64, f64); 20] = [
    (-1.0, 5.0),
    (1.0, 5.0),
    (1.0, 2.0),
    (2.0, 2.0),
    (2.0, 1.0),
    (5.0, 1.0),
    (5.0, -1.0),
    (2.0, -1.0),
    (2.0, -2.0),
    (1.0, -2.0),
    (1.0, -5.0),
    (-1.0, -5.0),
    (-1.0, -2.0),
    (-2.0, -2.0),
    (-2.0, -1.0),
    (-5.0, -1.0),
    (-5.0, 1.0),
    (-2.0, 1.0),
    (-2.0, 2.0),
    (-1.0, 2.0),
];

/// Hovered-point label color.
pub(crate) const LABEL_COLOR: Color = Color::BLACK;
/// Hovered-point label font size in pixels.
pub(crate) const LABEL_FONT_SIZE: f64 = 15.0;
/// Hovered-point label offset from the sample's screen position.
pub(crate) const LABEL_OFFSET: (f64, f64) = (5.0, -8.0);

/// Zoom-rectangle overlay stroke color.
pub(crate) const OVERLAY_COLOR: Color = Color::BLACK;
/// Zoom-rectangle overlay stroke width in pixels.
pub(crate) const OVERLAY_WIDTH: f64 = 2.0;
/// Zoom-rectangle overlay dash pattern in pixels.
pub(crate) const OVERLAY_DASH: &[f64] = &[2.0, 1.0, 3.0, 1.0];
