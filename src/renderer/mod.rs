//! Terminal renderer - frame buffers, ANSI output, diff rendering.
//!
//! The pipeline per frame:
//!
//! ```text
//! face surfaces → compositor → screen FrameBuffer → DiffRenderer → stdout
//! ```
//!
//! Faces draw into their own [`Surface`]; the compositor assembles the
//! visible strip plus indicator dots and alert overlay; the [`DiffRenderer`]
//! writes only the cells that changed since the previous frame, inside a
//! synchronized output block.

pub mod ansi;
mod buffer;
pub(crate) mod compositor;
mod diff;
mod output;
mod surface;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
pub use surface::Surface;
