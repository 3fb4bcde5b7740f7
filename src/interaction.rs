//! Pointer interaction state machine.
//!
//! Translates pointer events into pick updates, drag-to-edit mutation, and
//! zoom stack operations. Every transition is synchronous and requests a
//! redraw through the plot.

use tracing::trace;

use crate::error::PlotError;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::pick::pick_point;
use crate::plot::Plot;
use crate::transform::Transform;
use crate::zoom::viewport_from_screen_rect;

/// Cursor shape the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// The host's default cursor.
    #[default]
    Default,
    /// Pointer-style cursor shown while a sample is picked.
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    DraggingPoint { index: usize },
    ZoomDragging { start: ScreenPoint, end: ScreenPoint },
}

/// Interaction state for one plot.
///
/// The host adapter forwards pointer events here, passing the per-frame
/// [`Transform`] where inverse mapping is needed. State is recorded against
/// the plot's dataset generation: replacing the dataset invalidates any
/// pick or drag from before the load, with no action required of the host.
#[derive(Debug, Clone)]
pub struct Interaction {
    phase: Phase,
    hovered: Option<usize>,
    cursor: Cursor,
    generation: u64,
}

impl Interaction {
    /// Create an idle interaction state.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            hovered: None,
            cursor: Cursor::Default,
            generation: 0,
        }
    }

    /// The cursor the host should currently show.
    pub fn cursor(&self, plot: &Plot) -> Cursor {
        if self.is_stale(plot) {
            return Cursor::Default;
        }
        self.cursor
    }

    /// Index of the currently picked sample, if any.
    pub fn hovered_index(&self, plot: &Plot) -> Option<usize> {
        if self.is_stale(plot) {
            return None;
        }
        self.hovered
    }

    /// The in-progress zoom-drag rectangle, normalized, if any.
    pub fn selection_rect(&self, plot: &Plot) -> Option<ScreenRect> {
        if self.is_stale(plot) {
            return None;
        }
        match self.phase {
            Phase::ZoomDragging { start, end } => Some(ScreenRect::from_corners(start, end)),
            _ => None,
        }
    }

    fn is_stale(&self, plot: &Plot) -> bool {
        self.generation != plot.generation()
    }

    /// Drop pick and drag state recorded against a replaced dataset.
    fn sync(&mut self, plot: &Plot) {
        if !self.is_stale(plot) {
            return;
        }
        trace!("dataset replaced, pick state cleared");
        self.phase = Phase::Idle;
        self.hovered = None;
        self.cursor = Cursor::Default;
        self.generation = plot.generation();
    }

    /// Handle pointer movement.
    ///
    /// Idle movement re-picks under the cursor; while dragging a point the
    /// sample follows the pointer through the inverse mapping; while zoom
    /// dragging the rectangle end point tracks the pointer.
    pub fn pointer_moved(&mut self, plot: &mut Plot, transform: &Transform, position: ScreenPoint) {
        self.sync(plot);
        match &mut self.phase {
            Phase::Idle => {
                let picked = plot
                    .dataset()
                    .and_then(|dataset| pick_point(dataset, transform, position));
                if picked != self.hovered {
                    trace!(?picked, "pick changed");
                }
                self.hovered = picked;
                self.cursor = if picked.is_some() {
                    Cursor::Pointer
                } else {
                    Cursor::Default
                };
            }
            Phase::DraggingPoint { index } => {
                let index = *index;
                plot.set_point(index, transform.screen_to_data(position));
                self.hovered = Some(index);
            }
            Phase::ZoomDragging { end, .. } => {
                *end = position;
            }
        }
        plot.request_redraw();
    }

    /// Handle a primary button press: picked sample starts a point drag,
    /// empty space starts a zoom drag.
    pub fn primary_pressed(&mut self, plot: &mut Plot, position: ScreenPoint) {
        self.sync(plot);
        if !plot.has_dataset() {
            return;
        }
        self.phase = match self.hovered {
            Some(index) => Phase::DraggingPoint { index },
            None => Phase::ZoomDragging {
                start: position,
                end: position,
            },
        };
        plot.request_redraw();
    }

    /// Handle a primary button release: a zoom drag pushes its range, a
    /// point drag commits where it is. A click without drag collapses to a
    /// zero-area rectangle and is silently discarded.
    pub fn primary_released(
        &mut self,
        plot: &mut Plot,
        transform: &Transform,
        position: ScreenPoint,
    ) {
        self.sync(plot);
        match self.phase {
            Phase::ZoomDragging { start, .. } => {
                let range = viewport_from_screen_rect(transform, start, position);
                match plot.push_zoom(range) {
                    Ok(()) | Err(PlotError::EmptyZoomRegion) => {}
                    Err(error) => trace!(%error, "zoom push failed"),
                }
            }
            Phase::DraggingPoint { .. } | Phase::Idle => {}
        }
        self.phase = Phase::Idle;
        plot.request_redraw();
    }

    /// Handle a secondary click: zoom out one level from any state.
    pub fn secondary_clicked(&mut self, plot: &mut Plot) {
        self.sync(plot);
        plot.pop_zoom();
        self.phase = Phase::Idle;
        plot.request_redraw();
    }

    /// Handle the pointer leaving the canvas: pick state and any in-flight
    /// drag are discarded without committing.
    pub fn pointer_left(&mut self, plot: &mut Plot) {
        self.sync(plot);
        self.phase = Phase::Idle;
        self.hovered = None;
        self.cursor = Cursor::Default;
        plot.request_redraw();
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn loaded_plot() -> (Plot, Transform) {
        let mut plot = Plot::new();
        plot.load_dataset(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 4.0),
        ]);
        let transform = plot.transform(800.0, 600.0).unwrap();
        (plot, transform)
    }

    #[test]
    fn hover_switches_cursor() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let on_sample = transform.data_to_screen(Point::new(1.0, 1.0));
        interaction.pointer_moved(&mut plot, &transform, on_sample);
        assert_eq!(interaction.hovered_index(&plot), Some(1));
        assert_eq!(interaction.cursor(&plot), Cursor::Pointer);

        interaction.pointer_moved(&mut plot, &transform, on_sample.shifted(50.0, 50.0));
        assert_eq!(interaction.hovered_index(&plot), None);
        assert_eq!(interaction.cursor(&plot), Cursor::Default);
    }

    #[test]
    fn zoom_drag_pushes_a_range() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let start = ScreenPoint::new(100.0, 100.0);
        let end = ScreenPoint::new(300.0, 300.0);

        interaction.pointer_moved(&mut plot, &transform, start);
        interaction.primary_pressed(&mut plot, start);
        interaction.pointer_moved(&mut plot, &transform, end);
        assert_eq!(
            interaction.selection_rect(&plot),
            Some(ScreenRect::from_corners(start, end))
        );
        interaction.primary_released(&mut plot, &transform, end);

        assert_eq!(plot.zoom_depth(), 2);
        assert!(interaction.selection_rect(&plot).is_none());
        let expected = viewport_from_screen_rect(&transform, start, end);
        assert_eq!(plot.current_range().unwrap(), expected);
    }

    #[test]
    fn click_without_drag_is_discarded() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let position = ScreenPoint::new(100.0, 100.0);
        interaction.pointer_moved(&mut plot, &transform, position);
        interaction.primary_pressed(&mut plot, position);
        interaction.primary_released(&mut plot, &transform, position);
        assert_eq!(plot.zoom_depth(), 1);
    }

    #[test]
    fn secondary_click_pops() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let start = ScreenPoint::new(100.0, 100.0);
        let end = ScreenPoint::new(300.0, 300.0);
        interaction.pointer_moved(&mut plot, &transform, start);
        interaction.primary_pressed(&mut plot, start);
        interaction.primary_released(&mut plot, &transform, end);
        assert_eq!(plot.zoom_depth(), 2);

        let original = {
            let mut fresh = Plot::new();
            fresh.load_dataset(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 4.0),
            ]);
            fresh.current_range().unwrap()
        };
        interaction.secondary_clicked(&mut plot);
        assert_eq!(plot.zoom_depth(), 1);
        assert_eq!(plot.current_range().unwrap(), original);
    }

    #[test]
    fn dragging_a_picked_sample_edits_it() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let on_sample = transform.data_to_screen(Point::new(1.0, 1.0));
        interaction.pointer_moved(&mut plot, &transform, on_sample);
        interaction.primary_pressed(&mut plot, on_sample);

        let target = on_sample.shifted(30.0, -30.0);
        interaction.pointer_moved(&mut plot, &transform, target);
        interaction.primary_released(&mut plot, &transform, target);

        let moved = plot.dataset().unwrap().point(1).unwrap();
        let expected = transform.screen_to_data(target);
        assert!((moved.x - expected.x).abs() < 1e-9);
        assert!((moved.y - expected.y).abs() < 1e-9);
        // No stack effect from a point drag.
        assert_eq!(plot.zoom_depth(), 1);
    }

    #[test]
    fn pointer_leave_clears_pick_and_drag() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let start = ScreenPoint::new(100.0, 100.0);
        interaction.pointer_moved(&mut plot, &transform, start);
        interaction.primary_pressed(&mut plot, start);
        interaction.pointer_moved(&mut plot, &transform, ScreenPoint::new(200.0, 200.0));
        interaction.pointer_left(&mut plot);
        assert!(interaction.selection_rect(&plot).is_none());
        assert_eq!(interaction.hovered_index(&plot), None);
        assert_eq!(interaction.cursor(&plot), Cursor::Default);
        // The abandoned drag committed nothing.
        assert_eq!(plot.zoom_depth(), 1);
    }

    #[test]
    fn press_without_dataset_is_ignored() {
        let mut plot = Plot::new();
        let mut interaction = Interaction::new();
        interaction.primary_pressed(&mut plot, ScreenPoint::new(10.0, 10.0));
        assert!(interaction.selection_rect(&plot).is_none());
    }

    #[test]
    fn loading_a_dataset_clears_pick_state() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let on_sample = transform.data_to_screen(Point::new(1.0, 1.0));
        interaction.pointer_moved(&mut plot, &transform, on_sample);
        assert_eq!(interaction.hovered_index(&plot), Some(1));

        plot.load_dataset(vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(30.0, 30.0),
        ]);

        // The pick belongs to the replaced dataset: no hover, no pointer
        // cursor, and no coordinate label in the next frame.
        assert_eq!(interaction.hovered_index(&plot), None);
        assert_eq!(interaction.cursor(&plot), Cursor::Default);
        let transform = plot.transform(800.0, 600.0).unwrap();
        plot.set_show_axis(false);
        let frame = plot.render(&transform, &interaction);
        assert!(
            !frame
                .commands()
                .iter()
                .any(|command| matches!(command, crate::render::RenderCommand::Text { .. }))
        );

        // The next event re-picks against the new dataset.
        let on_new_sample = transform.data_to_screen(Point::new(20.0, 20.0));
        interaction.pointer_moved(&mut plot, &transform, on_new_sample);
        assert_eq!(interaction.hovered_index(&plot), Some(1));
    }

    #[test]
    fn loading_mid_drag_discards_the_drag() {
        let (mut plot, transform) = loaded_plot();
        let mut interaction = Interaction::new();
        let start = ScreenPoint::new(100.0, 100.0);
        interaction.pointer_moved(&mut plot, &transform, start);
        interaction.primary_pressed(&mut plot, start);
        assert!(interaction.selection_rect(&plot).is_some());

        plot.load_dataset(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(interaction.selection_rect(&plot).is_none());

        // The release that follows must not push a range from the old drag.
        interaction.primary_released(&mut plot, &transform, ScreenPoint::new(300.0, 300.0));
        assert_eq!(plot.zoom_depth(), 1);
    }
}
