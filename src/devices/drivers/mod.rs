//! Device Drivers
//!
//! - `ps2_controller`: 8042 register access and bounded handshakes
//! - `ps2_mouse`: 3-byte packet decoder (IRQ12 / polled)

pub mod ps2_controller;
pub mod ps2_mouse;

#[cfg(test)]
pub(crate) mod fake;

pub use ps2_controller::{DeviceRegisters, PortRegisters, Ps2Controller};
pub use ps2_mouse::{MouseButtons, MouseDecoder, MouseEvent, PacketSignature};
