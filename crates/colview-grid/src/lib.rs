// ABOUTME: Drawing primitives against a character grid.
// ABOUTME: Provides the Surface trait and a ratatui Buffer implementation.

mod buffer;
mod glyph;
mod surface;

pub use buffer::BufferSurface;
pub use glyph::{Glyph, Style};
pub use surface::{DrawError, DrawResult, Surface};
