//! Frame composition.
//!
//! One call produces the full ordered command list for a frame. The order
//! is fixed: background, axes, curve, markers, hovered-point label, zoom
//! overlay. Identical input state yields an identical list.

use crate::dataset::Dataset;
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::render::{Color, LineStyle, RectStyle, RenderCommand, RenderList, TextStyle};
use crate::style;
use crate::transform::Transform;

/// Compose the draw commands for one frame.
pub(crate) fn build_frame(
    dataset: &Dataset,
    transform: &Transform,
    show_axis: bool,
    show_markers: bool,
    hovered: Option<Point>,
    selection: Option<ScreenRect>,
) -> RenderList {
    let mut render = RenderList::new();
    render.push(RenderCommand::Clear(style::BACKGROUND));
    if show_axis {
        build_axes(&mut render, transform);
    }
    build_curve(&mut render, dataset, transform);
    if show_markers {
        build_markers(&mut render, dataset, transform);
    }
    if let Some(point) = hovered {
        build_hover_label(&mut render, transform, point);
    }
    if let Some(rect) = selection {
        build_selection(&mut render, rect);
    }
    render
}

/// Axes with arrowheads and labels, each drawn only if the zero line of the
/// other dimension crosses the visible range.
fn build_axes(render: &mut RenderList, transform: &Transform) {
    let visible = transform.visible();
    let axis_style = LineStyle {
        color: style::AXIS_COLOR,
        width: style::AXIS_WIDTH,
        dash: &[],
    };
    let label_style = TextStyle {
        color: style::AXIS_COLOR,
        size: style::AXIS_FONT_SIZE,
    };
    let half_arrow = style::ARROW_WIDTH / 2.0;

    if visible.x.contains(0.0) {
        let top = transform.data_to_screen(Point::new(0.0, visible.y.max));
        let bottom = transform.data_to_screen(Point::new(0.0, visible.y.min));
        render.push(RenderCommand::Polyline {
            points: vec![top, bottom],
            style: axis_style,
        });
        render.push(RenderCommand::Polygon {
            points: vec![
                top,
                top.shifted(half_arrow, style::ARROW_LENGTH),
                top.shifted(-half_arrow, style::ARROW_LENGTH),
            ],
            fill: style::AXIS_COLOR,
        });
        render.push(RenderCommand::Text {
            position: top.shifted(10.0, style::AXIS_FONT_SIZE),
            text: "y".to_string(),
            style: label_style,
        });
    }
    if visible.y.contains(0.0) {
        let left = transform.data_to_screen(Point::new(visible.x.min, 0.0));
        let right = transform.data_to_screen(Point::new(visible.x.max, 0.0));
        render.push(RenderCommand::Polyline {
            points: vec![left, right],
            style: axis_style,
        });
        render.push(RenderCommand::Polygon {
            points: vec![
                right,
                right.shifted(-style::ARROW_LENGTH, -half_arrow),
                right.shifted(-style::ARROW_LENGTH, half_arrow),
            ],
            fill: style::AXIS_COLOR,
        });
        // Label width approximated as half an em; the host owns real
        // text metrics.
        render.push(RenderCommand::Text {
            position: right.shifted(
                -(style::AXIS_FONT_SIZE * 0.5 + 10.0),
                -style::AXIS_FONT_SIZE,
            ),
            text: "x".to_string(),
            style: label_style,
        });
    }
}

/// The data curve: a dashed polyline through all samples in dataset order.
fn build_curve(render: &mut RenderList, dataset: &Dataset, transform: &Transform) {
    if dataset.len() < 2 {
        return;
    }
    let points = dataset
        .points()
        .iter()
        .map(|point| transform.data_to_screen(*point))
        .collect();
    render.push(RenderCommand::Polyline {
        points,
        style: LineStyle {
            color: style::CURVE_COLOR,
            width: style::CURVE_WIDTH,
            dash: style::CURVE_DASH,
        },
    });
}

/// Star-burst marker outlines, one closed polyline per sample.
fn build_markers(render: &mut RenderList, dataset: &Dataset, transform: &Transform) {
    for point in dataset.points() {
        let center = transform.data_to_screen(*point);
        let mut outline: Vec<ScreenPoint> = style::MARKER_OUTLINE
            .iter()
            .map(|(dx, dy)| center.shifted(*dx, *dy))
            .collect();
        outline.push(outline[0]);
        render.push(RenderCommand::Polyline {
            points: outline,
            style: LineStyle {
                color: marker_color(*point),
                width: style::MARKER_WIDTH,
                dash: &[],
            },
        });
    }
}

/// Parity rule for marker outlines: even `floor(x)` is blue, odd is red.
fn marker_color(point: Point) -> Color {
    if (point.x.floor() as i64).rem_euclid(2) == 0 {
        style::MARKER_EVEN_COLOR
    } else {
        style::MARKER_ODD_COLOR
    }
}

/// Coordinate readout next to the hovered sample.
fn build_hover_label(render: &mut RenderList, transform: &Transform, point: Point) {
    let screen = transform.data_to_screen(point);
    let (dx, dy) = style::LABEL_OFFSET;
    render.push(RenderCommand::Text {
        position: screen.shifted(dx, dy),
        text: format!("X: {:.2} Y: {:.2}", point.x, point.y),
        style: TextStyle {
            color: style::LABEL_COLOR,
            size: style::LABEL_FONT_SIZE,
        },
    });
}

/// The in-progress zoom-drag rectangle.
fn build_selection(render: &mut RenderList, rect: ScreenRect) {
    render.push(RenderCommand::Rect {
        rect,
        style: RectStyle {
            fill: Color::new(0.0, 0.0, 0.0, 0.0),
            stroke: LineStyle {
                color: style::OVERLAY_COLOR,
                width: style::OVERLAY_WIDTH,
                dash: style::OVERLAY_DASH,
            },
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 4.0),
        ])
    }

    fn transform() -> Transform {
        Transform::new(dataset().bounds().unwrap(), 800.0, 600.0).unwrap()
    }

    fn texts(render: &RenderList) -> Vec<&str> {
        render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn rendering_twice_is_identical() {
        let dataset = dataset();
        let transform = transform();
        let first = build_frame(&dataset, &transform, true, true, None, None);
        let second = build_frame(&dataset, &transform, true, true, None, None);
        assert_eq!(first, second);
    }

    #[test]
    fn background_comes_first() {
        let render = build_frame(&dataset(), &transform(), true, true, None, None);
        assert_eq!(
            render.commands()[0],
            RenderCommand::Clear(style::BACKGROUND)
        );
    }

    #[test]
    fn both_axes_drawn_when_zero_is_visible() {
        let render = build_frame(&dataset(), &transform(), true, false, None, None);
        let labels = texts(&render);
        assert!(labels.contains(&"y"));
        assert!(labels.contains(&"x"));
    }

    #[test]
    fn axis_labels_sit_beside_the_arrow_tips() {
        let transform = transform();
        let render = build_frame(&dataset(), &transform, true, false, None, None);
        let visible = transform.visible();
        let y_tip = transform.data_to_screen(Point::new(0.0, visible.y.max));
        let x_tip = transform.data_to_screen(Point::new(visible.x.max, 0.0));
        let positions: Vec<_> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { position, text, .. } => {
                    Some((text.as_str(), *position))
                }
                _ => None,
            })
            .collect();
        assert!(
            positions.contains(&("y", y_tip.shifted(10.0, style::AXIS_FONT_SIZE)))
        );
        // "x" is set back by an estimated label width plus 10 px.
        assert!(positions.contains(&(
            "x",
            x_tip.shifted(-(style::AXIS_FONT_SIZE * 0.5 + 10.0), -style::AXIS_FONT_SIZE)
        )));
    }

    #[test]
    fn axes_skipped_when_zero_is_outside() {
        let dataset = Dataset::new(vec![Point::new(3.0, 5.0), Point::new(4.0, 7.0)]);
        let transform = Transform::new(dataset.bounds().unwrap(), 800.0, 600.0).unwrap();
        let render = build_frame(&dataset, &transform, true, false, None, None);
        assert!(texts(&render).is_empty());
    }

    #[test]
    fn axes_skipped_when_toggle_off() {
        let render = build_frame(&dataset(), &transform(), false, false, None, None);
        assert!(texts(&render).is_empty());
        assert!(
            !render
                .commands()
                .iter()
                .any(|command| matches!(command, RenderCommand::Polygon { .. }))
        );
    }

    #[test]
    fn marker_outlines_are_closed_and_parity_colored() {
        let render = build_frame(&dataset(), &transform(), false, true, None, None);
        let markers: Vec<_> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Polyline { points, style } if points.len() == 21 => {
                    Some((points, style))
                }
                _ => None,
            })
            .collect();
        assert_eq!(markers.len(), 3);
        for (points, _) in &markers {
            assert_eq!(points[0], points[20]);
        }
        // floor(0) and floor(2) are even, floor(1) is odd.
        assert_eq!(markers[0].1.color, style::MARKER_EVEN_COLOR);
        assert_eq!(markers[1].1.color, style::MARKER_ODD_COLOR);
        assert_eq!(markers[2].1.color, style::MARKER_EVEN_COLOR);
    }

    #[test]
    fn negative_x_uses_floor_for_parity() {
        // floor(-1.5) = -2, even.
        assert_eq!(marker_color(Point::new(-1.5, 0.0)), style::MARKER_EVEN_COLOR);
        // floor(-1.0) = -1, odd.
        assert_eq!(marker_color(Point::new(-1.0, 0.0)), style::MARKER_ODD_COLOR);
    }

    #[test]
    fn hover_label_is_offset_and_formatted() {
        let point = Point::new(1.0, 1.0);
        let transform = transform();
        let render = build_frame(&dataset(), &transform, false, false, Some(point), None);
        let screen = transform.data_to_screen(point);
        let label = render
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Text {
                    position, text, ..
                } => Some((*position, text.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(label.0, screen.shifted(5.0, -8.0));
        assert_eq!(label.1, "X: 1.00 Y: 1.00");
    }

    #[test]
    fn selection_overlay_is_last() {
        let rect = ScreenRect::from_corners(
            ScreenPoint::new(100.0, 100.0),
            ScreenPoint::new(300.0, 300.0),
        );
        let render = build_frame(&dataset(), &transform(), true, true, None, Some(rect));
        assert!(matches!(
            render.commands().last(),
            Some(RenderCommand::Rect { .. })
        ));
    }

    #[test]
    fn single_sample_emits_no_curve() {
        let dataset = Dataset::new(vec![Point::new(5.0, 5.0)]);
        let transform =
            Transform::with_fallback(dataset.bounds().unwrap(), 800.0, 600.0).unwrap();
        let render = build_frame(&dataset, &transform, false, true, None, None);
        let polylines: Vec<_> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Polyline { points, .. } => Some(points.len()),
                _ => None,
            })
            .collect();
        // Only the marker outline, no curve.
        assert_eq!(polylines, vec![21]);
    }
}
