//! PS/2 Mouse Packet Decoder
//!
//! Assembles the 3-byte relative-pointer packet one byte at a time and turns
//! each complete packet into a `MouseEvent`.
//!
//! # Packet layout
//! - Byte 0: status (bit 0 left, bit 1 right, bit 3 always one on real
//!   hardware, bits 6..7 overflow)
//! - Byte 1: X movement, two's complement
//! - Byte 2: Y movement, two's complement, positive = device up
//!
//! # Synchronization
//! The cycle counter is the decoder's only state and persists across calls.
//! A byte offered as byte 0 must match the configured `PacketSignature`;
//! otherwise it is dropped and the decoder waits for the next candidate.
//! Overflow packets are framed like any other and discarded once complete.
//!
//! ```ignore
//! let mut decoder = MouseDecoder::new();
//! for byte in [0x00, 10, 0xFB] {
//!     if let Ok(Some(event)) = decoder.on_byte(byte) {
//!         // event.dx == 10, event.dy == 5
//!     }
//! }
//! ```

use crate::error::PacketError;

pub const STATUS_LEFT: u8 = 0x01;
pub const STATUS_RIGHT: u8 = 0x02;
pub const STATUS_ALWAYS_ONE: u8 = 0x08;
pub const STATUS_X_OVERFLOW: u8 = 0x40;
pub const STATUS_Y_OVERFLOW: u8 = 0x80;

const PACKET_LEN: u8 = 3;

/// Bits a status byte must have set and clear to start a packet.
/// Overflow bits belong to a well-framed packet and are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketSignature {
    pub must_set: u8,
    pub must_clear: u8,
}

impl PacketSignature {
    /// Any byte may start a packet.
    pub const LENIENT: Self = Self {
        must_set: 0,
        must_clear: 0,
    };

    /// Standard PS/2 mouse: bit 3 set. Skips the small movement bytes of a
    /// packet whose status byte was lost.
    pub const PS2: Self = Self {
        must_set: STATUS_ALWAYS_ONE,
        must_clear: 0,
    };

    #[inline]
    pub fn accepts(&self, status: u8) -> bool {
        status & self.must_set == self.must_set && status & self.must_clear == 0
    }
}

impl Default for PacketSignature {
    fn default() -> Self {
        Self::LENIENT
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
}

impl MouseButtons {
    pub fn from_status(status: u8) -> Self {
        Self {
            left: status & STATUS_LEFT != 0,
            right: status & STATUS_RIGHT != 0,
        }
    }
}

/// One decoded packet. `dy` is in screen orientation (positive = down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseEvent {
    pub dx: i16,
    pub dy: i16,
    pub buttons: MouseButtons,
}

pub struct MouseDecoder {
    packet: [u8; PACKET_LEN as usize],
    cycle: u8,
    signature: PacketSignature,
    rejected: u32,
    overflows: u32,
}

impl Default for MouseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseDecoder {
    pub const fn new() -> Self {
        Self::with_signature(PacketSignature::LENIENT)
    }

    pub const fn with_signature(signature: PacketSignature) -> Self {
        Self {
            packet: [0; PACKET_LEN as usize],
            cycle: 0,
            signature,
            rejected: 0,
            overflows: 0,
        }
    }

    /// Index the next byte will be stored at (0, 1 or 2).
    pub fn cycle(&self) -> u8 {
        self.cycle
    }

    /// Status bytes dropped since construction.
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    /// Complete packets discarded for an overflow bit.
    pub fn overflows(&self) -> u32 {
        self.overflows
    }

    pub fn signature(&self) -> PacketSignature {
        self.signature
    }

    /// Discard any partial packet; the next byte is treated as byte 0.
    pub fn reset(&mut self) {
        self.cycle = 0;
    }

    /// Accept one byte. Yields an event exactly when it completes a packet.
    pub fn on_byte(&mut self, byte: u8) -> Result<Option<MouseEvent>, PacketError> {
        if self.cycle == 0 && !self.signature.accepts(byte) {
            self.rejected = self.rejected.wrapping_add(1);
            return Err(PacketError::Malformed { status: byte });
        }

        self.packet[self.cycle as usize] = byte;
        self.cycle += 1;

        if self.cycle < PACKET_LEN {
            return Ok(None);
        }
        self.cycle = 0;
        let status = self.packet[0];
        if status & (STATUS_X_OVERFLOW | STATUS_Y_OVERFLOW) != 0 {
            self.overflows = self.overflows.wrapping_add(1);
            return Err(PacketError::Overflow { status });
        }
        Ok(Some(Self::decode(self.packet)))
    }

    /// Feed a burst of bytes, yielding each completed event. Rejected
    /// status bytes and overflow packets are skipped.
    pub fn feed<'a>(&'a mut self, bytes: &'a [u8]) -> impl Iterator<Item = MouseEvent> + 'a {
        bytes
            .iter()
            .filter_map(move |&byte| self.on_byte(byte).ok().flatten())
    }

    fn decode(packet: [u8; 3]) -> MouseEvent {
        let [status, x_raw, y_raw] = packet;
        MouseEvent {
            dx: x_raw as i8 as i16,
            dy: -(y_raw as i8 as i16),
            buttons: MouseButtons::from_status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_one_by_one(decoder: &mut MouseDecoder, bytes: &[u8]) -> Vec<MouseEvent> {
        let mut out = Vec::new();
        for &b in bytes {
            if let Ok(Some(ev)) = decoder.on_byte(b) {
                out.push(ev);
            }
        }
        out
    }

    #[test]
    fn decodes_motion_with_inverted_y() {
        let mut d = MouseDecoder::new();
        assert_eq!(d.on_byte(0x00), Ok(None));
        assert_eq!(d.on_byte(10), Ok(None));
        let ev = d.on_byte((-5i8) as u8).unwrap().unwrap();
        assert_eq!(ev.dx, 10);
        assert_eq!(ev.dy, 5);
        assert_eq!(ev.buttons, MouseButtons::default());
        assert_eq!(d.cycle(), 0);
    }

    #[test]
    fn decodes_left_button() {
        let mut d = MouseDecoder::new();
        let events = feed_one_by_one(&mut d, &[0x01, 0, 0]);
        assert_eq!(
            events,
            [MouseEvent { dx: 0, dy: 0, buttons: MouseButtons { left: true, right: false } }]
        );
    }

    #[test]
    fn decodes_right_button_and_extremes() {
        let mut d = MouseDecoder::new();
        let events = feed_one_by_one(&mut d, &[0x02, 0x80, 0x80, 0x03, 0x7F, 0x7F]);
        assert_eq!(events[0].dx, -128);
        assert_eq!(events[0].dy, 128);
        assert!(events[0].buttons.right && !events[0].buttons.left);
        assert_eq!(events[1].dx, 127);
        assert_eq!(events[1].dy, -127);
        assert!(events[1].buttons.right && events[1].buttons.left);
    }

    #[test]
    fn emits_only_on_third_byte() {
        let mut d = MouseDecoder::new();
        let stream = [0x00, 1, 2, 0x01, 3, 4, 0x02, 5];
        for (i, &b) in stream.iter().enumerate() {
            let out = d.on_byte(b).unwrap();
            assert_eq!(out.is_some(), i % 3 == 2, "byte {i}");
        }
        assert_eq!(d.cycle(), 2);
    }

    #[test]
    fn call_granularity_does_not_change_output() {
        let stream = [0x00, 10, 0xFB, 0x01, 0, 0, 0xC0, 0x02, 0xFF, 0x01, 0x08, 7];
        let single = feed_one_by_one(&mut MouseDecoder::new(), &stream);

        let mut d = MouseDecoder::new();
        let mut burst = Vec::new();
        for chunk in stream.chunks(3) {
            burst.extend(d.feed(chunk));
        }
        assert_eq!(single, burst);

        let mut d = MouseDecoder::new();
        let whole: Vec<_> = d.feed(&stream).collect();
        assert_eq!(single, whole);
        assert_eq!(single.len(), 3);
    }

    #[test]
    fn overflow_packet_keeps_framing() {
        let stream = [0xC8, 0x08, 0x10, 0x08, 0x01, 0x01];
        for signature in [PacketSignature::LENIENT, PacketSignature::PS2] {
            let mut d = MouseDecoder::with_signature(signature);
            let events = feed_one_by_one(&mut d, &stream);
            assert_eq!(events, [MouseEvent { dx: 1, dy: -1, buttons: MouseButtons::default() }]);
            assert_eq!(d.overflows(), 1);
            assert_eq!(d.rejected(), 0);
            assert_eq!(d.cycle(), 0);
        }
    }

    #[test]
    fn overflow_is_reported_on_third_byte() {
        let mut d = MouseDecoder::new();
        assert_eq!(d.on_byte(0x48), Ok(None));
        assert_eq!(d.on_byte(0xFF), Ok(None));
        assert_eq!(d.on_byte(0x00), Err(PacketError::Overflow { status: 0x48 }));
        assert_eq!(d.cycle(), 0);
        let events = feed_one_by_one(&mut d, &[0x00, 4, 4]);
        assert_eq!(events.len(), 1);
        assert_eq!((events[0].dx, events[0].dy), (4, -4));
    }

    #[test]
    fn ps2_signature_skips_mid_packet_bytes() {
        let mut d = MouseDecoder::with_signature(PacketSignature::PS2);
        // tail of a packet whose status byte was lost: 0x05 and 0x02 lack bit 3
        assert!(d.on_byte(0x05).is_err());
        assert!(d.on_byte(0x02).is_err());
        let events = feed_one_by_one(&mut d, &[0x09, 0x03, 0x01]);
        assert_eq!(
            events,
            [MouseEvent { dx: 3, dy: -1, buttons: MouseButtons { left: true, right: false } }]
        );
        assert_eq!(d.on_byte(0x10), Err(PacketError::Malformed { status: 0x10 }));
        assert!(d.on_byte(0x00).is_err());
        assert_eq!(d.rejected(), 4);
    }

    #[test]
    fn reset_discards_partial_packet() {
        let mut d = MouseDecoder::new();
        d.on_byte(0x01).unwrap();
        d.on_byte(9).unwrap();
        d.reset();
        let events = feed_one_by_one(&mut d, &[0x00, 1, 1]);
        assert_eq!(events.len(), 1);
        assert!(!events[0].buttons.left);
    }
}
