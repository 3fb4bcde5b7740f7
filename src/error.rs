//! Error types for plotview.

use thiserror::Error;

/// Result type alias for plotview operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in the plotting core.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The range to display has zero extent on both axes.
    ///
    /// Recoverable: render paths use [`Transform::with_fallback`] which
    /// substitutes a minimum span instead of failing.
    ///
    /// [`Transform::with_fallback`]: crate::transform::Transform::with_fallback
    #[error("range has zero extent on both axes")]
    DegenerateRange,

    /// A zoom rectangle collapsed to zero area.
    ///
    /// Raised by [`ZoomStack::push`](crate::zoom::ZoomStack::push) for a
    /// click-without-drag; the interaction layer discards the push silently.
    #[error("zoom region has zero area")]
    EmptyZoomRegion,

    /// The active range was queried before any dataset was loaded.
    #[error("no dataset loaded")]
    NoDataset,

    /// A transform was requested for a canvas with a non-positive dimension.
    #[error("canvas size {width}x{height} is not drawable")]
    EmptyCanvas {
        /// Canvas width in pixels.
        width: f64,
        /// Canvas height in pixels.
        height: f64,
    },

    /// A sample file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A sample file line did not hold two floating-point tokens.
    #[error("malformed sample at line {line}: {text:?}")]
    MalformedSample {
        /// 1-based line number within the input.
        line: usize,
        /// The offending line content.
        text: String,
    },
}
