//! Compile-time defaults for the desktop and its pointer input.

use crate::devices::drivers::ps2_controller::DEFAULT_HANDSHAKE_SPINS;
use crate::devices::drivers::ps2_mouse::PacketSignature;
use crate::devices::framebuffer::PresentMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// Status polls allowed per controller handshake step.
    pub handshake_spins: u32,
    /// Status-byte check applied to the first byte of every packet.
    pub signature: PacketSignature,
}

impl InputConfig {
    /// Strict packet framing for a real PS/2 mouse.
    pub fn ps2_hardware() -> Self {
        Self {
            signature: PacketSignature::PS2,
            ..Self::default()
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            handshake_spins: DEFAULT_HANDSHAKE_SPINS,
            signature: PacketSignature::LENIENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopConfig {
    pub present_mode: PresentMode,
    pub taskbar_height: u32,
    /// Initial cursor position, clamped to the screen.
    pub cursor_start: (i32, i32),
    pub input: InputConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            present_mode: PresentMode::Full,
            taskbar_height: 40,
            cursor_start: (100, 100),
            input: InputConfig::default(),
        }
    }
}
