//! Frame pacing owned by the outer loop.
//!
//! The compositor never sleeps; the loop calls `wait_next_frame` between
//! frames and the pacer decides how long that takes.

use core::sync::atomic::{AtomicU64, Ordering};

pub trait FramePacer {
    fn wait_next_frame(&mut self);
}

/// Returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl FramePacer for Unpaced {
    fn wait_next_frame(&mut self) {}
}

/// One frame every `interval` ticks of a counter advanced elsewhere,
/// normally `interrupts::TIMER_TICKS`.
pub struct TickPacer<'a, W: FnMut() = fn()> {
    ticks: &'a AtomicU64,
    interval: u64,
    deadline: u64,
    overruns: u64,
    idle: W,
}

impl<'a> TickPacer<'a, fn()> {
    pub fn new(ticks: &'a AtomicU64, interval: u64) -> Self {
        Self::with_idle(ticks, interval, core::hint::spin_loop as fn())
    }
}

impl<'a, W: FnMut()> TickPacer<'a, W> {
    /// `idle` runs between counter checks; `x86_64::instructions::hlt` on
    /// hardware.
    pub fn with_idle(ticks: &'a AtomicU64, interval: u64, idle: W) -> Self {
        let interval = interval.max(1);
        Self {
            ticks,
            interval,
            deadline: ticks.load(Ordering::Acquire) + interval,
            overruns: 0,
            idle,
        }
    }

    /// Frames that missed their deadline.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    pub fn deadline(&self) -> u64 {
        self.deadline
    }
}

impl<W: FnMut()> FramePacer for TickPacer<'_, W> {
    fn wait_next_frame(&mut self) {
        let now = self.ticks.load(Ordering::Acquire);
        if now > self.deadline {
            self.overruns += 1;
            klog_debug!("pacing: frame late by {} ticks", now - self.deadline);
            self.deadline = now + self.interval;
            return;
        }
        while self.ticks.load(Ordering::Acquire) < self.deadline {
            (self.idle)();
        }
        self.deadline += self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_until_deadline_tick() {
        let ticks = AtomicU64::new(10);
        let mut idles = 0;
        let mut pacer = TickPacer::with_idle(&ticks, 3, || {
            idles += 1;
            ticks.fetch_add(1, Ordering::AcqRel);
        });
        pacer.wait_next_frame();
        assert_eq!(ticks.load(Ordering::Acquire), 13);
        pacer.wait_next_frame();
        assert_eq!(ticks.load(Ordering::Acquire), 16);
        assert_eq!(pacer.overruns(), 0);
        assert_eq!(idles, 6);
    }

    #[test]
    fn late_frame_counts_overrun_and_rebases() {
        let ticks = AtomicU64::new(0);
        let mut pacer = TickPacer::new(&ticks, 2);
        ticks.store(9, Ordering::Release);
        pacer.wait_next_frame();
        assert_eq!(pacer.overruns(), 1);
        assert_eq!(pacer.deadline(), 11);
    }

    #[test]
    fn on_time_frame_returns_at_deadline() {
        let ticks = AtomicU64::new(0);
        let mut pacer = TickPacer::new(&ticks, 4);
        ticks.store(4, Ordering::Release);
        pacer.wait_next_frame();
        assert_eq!(pacer.overruns(), 0);
        assert_eq!(pacer.deadline(), 8);
        Unpaced.wait_next_frame();
    }
}
