//! Drawing of laid-out molecules as Lewis structures.
//!
//! The renderer is independent of any output format: it emits
//! [`DrawCommand`]s onto a [`Surface`]. [`Drawing`] records them in order,
//! which is what the SVG writer and the tests consume.
//!
//! Commands are emitted in three passes so later ones sit on top:
//!
//! 1. bonds, one to three parallel strokes per bond
//! 2. lone-pair dots at the electron-domain angles no bond occupies
//! 3. atom labels over a background-colored disc

mod lewis;
mod palette;
mod surface;

pub use lewis::{draw_layout, render_lewis};
pub use palette::{Color, DEFAULT_LABEL_COLOR, ParseColorError, element_color};
pub use surface::{DrawCommand, Drawing, Surface};
