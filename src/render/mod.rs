//! Terminal rendering
//!
//! Styled rows and keyboard lines, centering, and the in-place repaint protocol.

mod engine;
mod theme;
mod width;

pub use engine::{BoardView, Frame, Prompt, RenderEngine};
pub use theme::{CellColors, Palette, Theme};
pub use width::{layout_width, strip_control, visible_width};
