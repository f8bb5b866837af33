//! SVG serialization - converts the vector scene into an SVG string.
//!
//! Pure string building, no DOM manipulation.

mod renderer;
pub mod styles;
mod theme;

pub use renderer::render_svg;
pub use theme::{Palette, WHITE};
