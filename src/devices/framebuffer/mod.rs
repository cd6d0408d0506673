//! # Framebuffer Graphics Module
//!
//! Pixel surfaces, drawing primitives and double-buffered presentation.
//!
//! ## Modules
//!
//! - `surface`: `PixelSurface`, bounds-checked access to a linear buffer
//! - `color`: `Color` type with common color constants
//! - `geometry`: `Rect` and clipping
//! - `damage`: dirty bounding box used by partial presentation
//! - `font`: the 8x16 glyph table
//! - `primitives`: rectangles, borders, glyphs and strings
//! - `present`: `Presenter`, the back → front copy
//!
//! ## Architecture
//!
//! All drawing targets the back buffer. `Presenter::present` copies a
//! finished frame to video memory in one pass; `present_dirty` copies only
//! the bounding box of pixels whose value changed since the last present,
//! which leaves the front buffer identical to a full copy.

pub mod color;
pub mod damage;
pub mod font;
pub mod geometry;
pub mod present;
pub mod primitives;
pub mod surface;

pub use color::Color;
pub use geometry::Rect;
pub use present::{PresentMode, Presenter};
pub use surface::PixelSurface;
