//! Error types surfaced by device bring-up, boot validation and packet decode.
//!
//! Drawing has no error type: out-of-range geometry is clipped away.

use core::fmt;

/// Handshake step that was waiting when a bounded wait expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeStep {
    /// Waiting for the controller input buffer to drain before a write.
    Write,
    /// Waiting for the controller output buffer to fill before a read.
    Read,
}

/// Device initialization failure. The only hard error the core reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    Timeout { step: HandshakeStep },
    NoAck { command: u8, response: u8 },
}

/// Invalid boot handshake descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    NotGraphicsMode,
    NullAddress,
    ZeroSized,
    UnsupportedDepth(u8),
    UnsupportedPixelFormat,
    PitchTooSmall,
    MisalignedPitch,
    NonCanonicalAddress,
    BufferTooSmall,
}

/// Packets the decoder drops instead of turning into events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketError {
    /// First byte lacks the expected device signature.
    Malformed { status: u8 },
    /// Complete packet whose status byte flags a counter overflow.
    Overflow { status: u8 },
}

impl fmt::Display for HandshakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandshakeStep::Write => write!(f, "write"),
            HandshakeStep::Read => write!(f, "read"),
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Timeout { step } => write!(f, "PS/2 controller {} timeout", step),
            DeviceError::NoAck { command, response } => write!(
                f,
                "PS/2 device did not ACK command {:#04x} (got {:#04x})",
                command, response
            ),
        }
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::NotGraphicsMode => write!(f, "framebuffer is not in graphics mode"),
            BootError::NullAddress => write!(f, "framebuffer address is null"),
            BootError::ZeroSized => write!(f, "framebuffer has zero width or height"),
            BootError::UnsupportedDepth(bpp) => write!(f, "unsupported depth: {} bpp", bpp),
            BootError::UnsupportedPixelFormat => write!(f, "unsupported pixel format"),
            BootError::PitchTooSmall => write!(f, "pitch smaller than one row"),
            BootError::MisalignedPitch => write!(f, "pitch is not a whole number of pixels"),
            BootError::NonCanonicalAddress => write!(f, "framebuffer address is not canonical"),
            BootError::BufferTooSmall => write!(f, "buffer smaller than width x height"),
        }
    }
}

impl fmt::Display for PacketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketError::Malformed { status } => {
                write!(f, "malformed packet status byte {:#04x}", status)
            }
            PacketError::Overflow { status } => {
                write!(f, "overflow packet discarded, status {:#04x}", status)
            }
        }
    }
}
