//! Pointer input controller: decoder, clamped cursor and button state.
//!
//! Every delivery path (interrupt queue, status polling, direct feed) ends
//! in [`InputController::on_byte`], so switching between them changes
//! nothing below this point.

use super::queue::ByteQueue;
use crate::config::InputConfig;
use crate::devices::drivers::ps2_controller::{DeviceRegisters, Ps2Controller};
use crate::devices::drivers::ps2_mouse::{MouseButtons, MouseDecoder, MouseEvent};
use crate::devices::mouse_cursor::CursorState;
use crate::error::DeviceError;

/// Bytes read per `poll` call at most (32 packets).
pub const POLL_BUDGET: usize = 96;

pub struct InputController {
    decoder: MouseDecoder,
    cursor: CursorState,
    buttons: MouseButtons,
    buttons_changed: bool,
    width: u32,
    height: u32,
    handshake_spins: u32,
    packets: u64,
}

impl InputController {
    pub fn new(width: u32, height: u32, start: (i32, i32), config: InputConfig) -> Self {
        Self {
            decoder: MouseDecoder::with_signature(config.signature),
            cursor: CursorState::new(start.0, start.1, width, height),
            buttons: MouseButtons::default(),
            buttons_changed: false,
            width,
            height,
            handshake_spins: config.handshake_spins,
            packets: 0,
        }
    }

    /// Bring up the auxiliary port and put the mouse in streaming mode.
    /// Any partial packet is discarded whether or not this succeeds.
    pub fn initialize<R: DeviceRegisters + ?Sized>(&mut self, regs: &mut R) -> Result<(), DeviceError> {
        klog_info!("mouse: initializing, {} spins per step", self.handshake_spins);
        let result = Ps2Controller::new(regs, self.handshake_spins).enable_mouse();
        self.decoder.reset();
        if let Err(err) = &result {
            klog_error!("mouse: initialization failed: {}", err);
        }
        result
    }

    /// Feed one byte. Yields the event when it completes a packet.
    pub fn on_byte(&mut self, byte: u8) -> Option<MouseEvent> {
        match self.decoder.on_byte(byte) {
            Ok(Some(event)) => {
                self.apply(event);
                Some(event)
            }
            Ok(None) => None,
            Err(err) => {
                klog_debug!("mouse: {}", err);
                None
            }
        }
    }

    fn apply(&mut self, event: MouseEvent) {
        self.packets += 1;
        self.cursor
            .apply(event.dx.into(), event.dy.into(), self.width, self.height);
        self.buttons_changed = event.buttons != self.buttons;
        self.buttons = event.buttons;
    }

    /// Read auxiliary bytes straight from the controller. Stops when no
    /// mouse byte is waiting or after `POLL_BUDGET` bytes.
    pub fn poll<R: DeviceRegisters + ?Sized>(&mut self, regs: &mut R) -> usize {
        let mut ctl = Ps2Controller::new(regs, self.handshake_spins);
        let mut read = 0;
        while read < POLL_BUDGET {
            let Some(byte) = ctl.read_pending_aux() else {
                break;
            };
            self.on_byte(byte);
            read += 1;
        }
        read
    }

    /// Consume everything currently queued by the interrupt handler.
    pub fn drain<const N: usize>(&mut self, queue: &ByteQueue<N>) -> usize {
        let mut read = 0;
        while let Some(byte) = queue.pop() {
            self.on_byte(byte);
            read += 1;
        }
        read
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn cursor_position(&self) -> (i32, i32) {
        self.cursor.position()
    }

    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Whether the most recent packet changed the button state.
    pub fn buttons_changed(&self) -> bool {
        self.buttons_changed
    }

    /// Packets decoded since construction.
    pub fn packets(&self) -> u64 {
        self.packets
    }

    /// Status bytes the decoder refused since construction.
    pub fn rejected(&self) -> u32 {
        self.decoder.rejected()
    }

    pub fn screen_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
