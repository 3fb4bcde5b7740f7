//! plotview is the interactive core of a 2D function-plot viewer.
//! It maps between data and screen space with a shared aspect-preserving
//! scale, keeps a stack of zoom ranges, hit-tests samples under the
//! pointer, and composes each frame as an ordered render-command list for a
//! host adapter to draw.

#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod geom;
pub mod interaction;
pub mod io;
pub mod pick;
pub mod plot;
pub mod render;
mod style;
pub mod transform;
pub mod view;
pub mod zoom;

pub use dataset::Dataset;
pub use error::{PlotError, Result};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use interaction::{Cursor, Interaction};
pub use pick::{PICK_TOLERANCE, pick_point};
pub use plot::Plot;
pub use render::{Color, LineStyle, RectStyle, RenderCommand, RenderList, TextStyle};
pub use transform::{FALLBACK_SPAN, Transform};
pub use view::{Range, Viewport};
pub use zoom::{ZoomStack, viewport_from_screen_rect};
