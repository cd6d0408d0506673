//! Device Subsystem
//!
//! - `framebuffer`: pixel surfaces, primitives and presentation
//! - `drivers`: PS/2 controller access and the mouse packet decoder
//! - `input`: pointer input controller and the IRQ byte queue
//! - `mouse_cursor`: clamped cursor position and sprite

pub mod drivers;
pub mod framebuffer;
pub mod input;
pub mod mouse_cursor;
