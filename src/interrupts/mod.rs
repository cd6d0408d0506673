//! # IRQ Delivery Boundary
//!
//! The host kernel owns the IDT; its IRQ12 and timer handlers call into
//! this module. The mouse handler only reads the data port and queues the
//! byte, so decoder and cursor state are touched by the main loop alone.
//!
//! ```ignore
//! extern "x86-interrupt" fn mouse_handler(_frame: InterruptStackFrame) {
//!     unsafe { deskcore::interrupts::on_mouse_irq() };
//! }
//!
//! loop {
//!     deskcore::interrupts::service_mouse(&mut desktop);
//!     desktop.render_frame(&scene);
//!     pacer.wait_next_frame();
//! }
//! ```

pub mod pic;

use crate::desktop::Desktop;
use crate::devices::drivers::ps2_controller::{DeviceRegisters, PortRegisters};
use crate::devices::input::ByteQueue;
use core::sync::atomic::{AtomicU64, Ordering};
use pic::InterruptIndex;

/// Slots in the IRQ → main loop mouse byte ring.
pub const MOUSE_QUEUE_SLOTS: usize = 256;

pub static MOUSE_BYTES: ByteQueue<MOUSE_QUEUE_SLOTS> = ByteQueue::new();

/// Incremented by the timer IRQ; drives `pacing::TickPacer`.
pub static TIMER_TICKS: AtomicU64 = AtomicU64::new(0);

/// Body of the IRQ12 handler.
///
/// # Safety
/// Call only from the mouse interrupt handler, once per interrupt.
pub unsafe fn on_mouse_irq() {
    let mut regs = PortRegisters::new();
    MOUSE_BYTES.push(regs.read_data());
    pic::end_of_interrupt(InterruptIndex::Mouse);
}

/// Body of the timer IRQ handler.
///
/// # Safety
/// Call only from the timer interrupt handler, once per interrupt.
pub unsafe fn on_timer_irq() {
    TIMER_TICKS.fetch_add(1, Ordering::Relaxed);
    pic::end_of_interrupt(InterruptIndex::Timer);
}

/// Run `f` with maskable interrupts disabled, restoring the previous state.
#[cfg(not(test))]
pub fn exclusive<R>(f: impl FnOnce() -> R) -> R {
    x86_64::instructions::interrupts::without_interrupts(f)
}

/// Host tests run in user mode, where `cli` faults.
#[cfg(test)]
pub fn exclusive<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Feed every byte the mouse IRQ has queued into `desktop`.
pub fn service_mouse(desktop: &mut Desktop<'_, '_>) -> usize {
    service_queue(desktop, &MOUSE_BYTES)
}

fn service_queue<const N: usize>(desktop: &mut Desktop<'_, '_>, queue: &ByteQueue<N>) -> usize {
    let dropped = queue.take_dropped();
    if dropped > 0 {
        klog_warn!("mouse: {} bytes lost to a full queue", dropped);
    }
    exclusive(|| desktop.drain_input(queue))
}
