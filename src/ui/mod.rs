//! # User Interface Module
//!
//! Desktop scene painting on top of the framebuffer primitives.
//!
//! ## Modules
//!
//! - `theme`: desktop palettes (classic, dark modern)
//! - `background`: pluggable desktop background painters
//! - `taskbar`: the bottom bar and its start button
//! - `window`: static window descriptors and their painter
//! - `compositor`: fixed-order full repaint of the back buffer
//!
//! ## Example
//!
//! ```ignore
//! let mut compositor = Compositor::new(back, Theme::classic(), 40);
//! compositor.compose(&[window::notepad()], cursor);
//! presenter.present(compositor.back_mut());
//! ```

pub mod background;
pub mod compositor;
pub mod taskbar;
pub mod theme;
pub mod window;

pub use background::{Background, BackgroundPainter};
pub use compositor::Compositor;
pub use theme::Theme;
pub use window::Window;
