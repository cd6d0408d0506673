//! # Programmable Interrupt Controller (8259 PIC)
//!
//! ## Vector Remapping
//!
//! IRQ 0-15 collide with CPU exception vectors, so both chips are remapped:
//! - PIC 1: vectors 32-39 (IRQ 0-7)
//! - PIC 2: vectors 40-47 (IRQ 8-15)
//!
//! ## Interrupt Assignments
//!
//! | IRQ | Vector | Device    |
//! |-----|--------|-----------|
//! | 0   | 32     | Timer     |
//! | 2   | -      | Cascade   |
//! | 12  | 44     | Mouse     |

use pic8259::ChainedPics;
use spin::Mutex;

pub const PIC_1_OFFSET: u8 = 32;
pub const PIC_2_OFFSET: u8 = 40;

const CASCADE_LINE: u8 = 2;
const MOUSE_LINE: u8 = 12 - 8;

pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InterruptIndex {
    Timer = PIC_1_OFFSET,     // 32 - IRQ0
    Mouse = PIC_2_OFFSET + 4, // 44 - IRQ12 (IRQ4 on PIC2)
}

impl InterruptIndex {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_usize(self) -> usize {
        usize::from(self.as_u8())
    }
}

/// Remap both PICs, then unmask the cascade line and IRQ12.
///
/// # Safety
/// Must run once, with interrupts disabled, before any handler for the
/// remapped vectors can fire.
pub unsafe fn init_with_mouse() {
    let mut pics = PICS.lock();
    pics.initialize();
    let [primary, secondary] = pics.read_masks();
    pics.write_masks(primary & !(1 << CASCADE_LINE), secondary & !(1 << MOUSE_LINE));
}

/// # Safety
/// Only from the handler of `index`, after its device has been serviced.
pub unsafe fn end_of_interrupt(index: InterruptIndex) {
    PICS.lock().notify_end_of_interrupt(index.as_u8());
}
