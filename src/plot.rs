//! The display component: dataset, zoom history, toggles, redraw requests.

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{PlotError, Result};
use crate::geom::Point;
use crate::interaction::Interaction;
use crate::render::{self, RenderCommand, RenderList};
use crate::style;
use crate::transform::Transform;
use crate::view::Viewport;
use crate::zoom::ZoomStack;

/// Dataset and zoom history created together on load and replaced together.
#[derive(Debug, Clone)]
struct Loaded {
    dataset: Dataset,
    zoom: ZoomStack,
}

/// A single function plot and its interactive view state.
///
/// The plot owns the dataset and the zoom stack; a host adapter owns the
/// drawing surface, forwards pointer events through an [`Interaction`], and
/// consumes [`take_redraw`] once per frame.
///
/// [`take_redraw`]: Plot::take_redraw
#[derive(Debug, Clone)]
pub struct Plot {
    loaded: Option<Loaded>,
    show_axis: bool,
    show_markers: bool,
    redraw: bool,
    generation: u64,
}

impl Plot {
    /// Create an empty plot with axes and markers shown.
    pub fn new() -> Self {
        Self {
            loaded: None,
            show_axis: true,
            show_markers: true,
            redraw: false,
            generation: 0,
        }
    }

    /// Replace the dataset with freshly loaded samples.
    ///
    /// The zoom stack is reset to the new bounding box and any pick state
    /// held by an [`Interaction`] is invalidated. An empty sample sequence
    /// clears the plot instead.
    pub fn load_dataset(&mut self, points: Vec<Point>) {
        self.generation = self.generation.wrapping_add(1);
        let dataset = Dataset::new(points);
        match dataset.bounds() {
            Some(bounds) => {
                debug!(samples = dataset.len(), "dataset loaded");
                self.loaded = Some(Loaded {
                    dataset,
                    zoom: ZoomStack::new(bounds),
                });
            }
            None => {
                debug!("empty dataset, plot cleared");
                self.loaded = None;
            }
        }
        self.request_redraw();
    }

    /// Access the loaded dataset, if any. Samples are in load order, the
    /// order the save collaborator serializes them in.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.loaded.as_ref().map(|loaded| &loaded.dataset)
    }

    /// Check whether a dataset is loaded.
    pub fn has_dataset(&self) -> bool {
        self.loaded.is_some()
    }

    /// The active viewing range.
    pub fn current_range(&self) -> Result<Viewport> {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.zoom.current())
            .ok_or(PlotError::NoDataset)
    }

    /// Number of ranges on the zoom stack, zero before any load.
    pub fn zoom_depth(&self) -> usize {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.zoom.depth())
            .unwrap_or(0)
    }

    /// Push a new active range onto the zoom stack.
    pub fn push_zoom(&mut self, range: Viewport) -> Result<()> {
        let loaded = self.loaded.as_mut().ok_or(PlotError::NoDataset)?;
        loaded.zoom.push(range)?;
        self.request_redraw();
        Ok(())
    }

    /// Pop the active range, never below the bounding box. Returns whether
    /// a range was removed.
    pub fn pop_zoom(&mut self) -> bool {
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        let popped = loaded.zoom.pop();
        if popped {
            self.request_redraw();
        }
        popped
    }

    /// Toggle the coordinate axes.
    pub fn set_show_axis(&mut self, show_axis: bool) {
        self.show_axis = show_axis;
        self.request_redraw();
    }

    /// Toggle the per-sample markers.
    pub fn set_show_markers(&mut self, show_markers: bool) {
        self.show_markers = show_markers;
        self.request_redraw();
    }

    /// Whether the coordinate axes are shown.
    pub fn show_axis(&self) -> bool {
        self.show_axis
    }

    /// Whether the per-sample markers are shown.
    pub fn show_markers(&self) -> bool {
        self.show_markers
    }

    /// Dataset generation, bumped on every load. Interaction state recorded
    /// against an older generation is stale.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace one sample in place (drag-to-edit).
    pub(crate) fn set_point(&mut self, index: usize, point: Point) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.dataset.set_point(index, point);
        }
    }

    /// Compute the per-frame transform for the current canvas size.
    ///
    /// Degenerate bounding boxes (single-sample datasets) fall back to a
    /// fixed minimum span.
    pub fn transform(&self, width: f64, height: f64) -> Result<Transform> {
        Transform::with_fallback(self.current_range()?, width, height)
    }

    /// Compose the draw commands for one frame.
    ///
    /// With no dataset loaded the frame is just the background fill.
    pub fn render(&self, transform: &Transform, interaction: &Interaction) -> RenderList {
        let Some(loaded) = self.loaded.as_ref() else {
            let mut render = RenderList::new();
            render.push(RenderCommand::Clear(style::BACKGROUND));
            return render;
        };
        let hovered = interaction
            .hovered_index(self)
            .and_then(|index| loaded.dataset.point(index));
        render::build_frame(
            &loaded.dataset,
            transform,
            self.show_axis,
            self.show_markers,
            hovered,
            interaction.selection_rect(self),
        )
    }

    /// Request a redraw of the plot.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Consume the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}
