//! Single-producer single-consumer byte ring.
//!
//! The interrupt handler is the only producer and the main loop the only
//! consumer. One slot is kept free to tell full from empty, so a queue of
//! `N` slots holds `N - 1` bytes. Bytes pushed while full are counted and
//! dropped; the decoder resynchronizes on the gap.

use core::sync::atomic::{AtomicU32, AtomicU8, AtomicUsize, Ordering};

pub struct ByteQueue<const N: usize> {
    slots: [AtomicU8; N],
    head: AtomicUsize,
    tail: AtomicUsize,
    dropped: AtomicU32,
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteQueue<N> {
    const MIN_SLOTS: () = assert!(N >= 2, "ByteQueue needs at least two slots");

    pub const fn new() -> Self {
        let () = Self::MIN_SLOTS;
        Self {
            slots: [const { AtomicU8::new(0) }; N],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Producer side. Returns `false` if the byte was dropped.
    pub fn push(&self, byte: u8) -> bool {
        let tail = self.tail.load(Ordering::Relaxed);
        let next = (tail + 1) % N;
        if next == self.head.load(Ordering::Acquire) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        self.slots[tail].store(byte, Ordering::Relaxed);
        self.tail.store(next, Ordering::Release);
        true
    }

    /// Consumer side.
    pub fn pop(&self) -> Option<u8> {
        let head = self.head.load(Ordering::Relaxed);
        if head == self.tail.load(Ordering::Acquire) {
            return None;
        }
        let byte = self.slots[head].load(Ordering::Relaxed);
        self.head.store((head + 1) % N, Ordering::Release);
        Some(byte)
    }

    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        (tail + N - head) % N
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes lost to a full queue since the last `take_dropped`.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Read and clear the drop counter.
    pub fn take_dropped(&self) -> u32 {
        self.dropped.swap(0, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order_across_wraparound() {
        let q: ByteQueue<4> = ByteQueue::new();
        for round in 0..5u8 {
            assert!(q.push(round));
            assert!(q.push(round + 100));
            assert_eq!(q.len(), 2);
            assert_eq!(q.pop(), Some(round));
            assert_eq!(q.pop(), Some(round + 100));
            assert!(q.is_empty());
        }
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn full_queue_drops_and_counts() {
        let q: ByteQueue<4> = ByteQueue::new();
        assert_eq!(q.capacity(), 3);
        assert!(q.push(1) && q.push(2) && q.push(3));
        assert!(!q.push(4));
        assert_eq!(q.dropped(), 1);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(1));
        assert!(q.push(5));
        let drained: Vec<u8> = core::iter::from_fn(|| q.pop()).collect();
        assert_eq!(drained, [2, 3, 5]);
    }

    #[test]
    fn take_dropped_reports_each_loss_once() {
        let q: ByteQueue<2> = ByteQueue::new();
        assert!(q.push(1));
        assert!(!q.push(2));
        assert!(!q.push(3));
        assert_eq!(q.take_dropped(), 2);
        assert_eq!(q.take_dropped(), 0);
        assert!(!q.push(4));
        assert_eq!(q.take_dropped(), 1);
        assert_eq!(q.dropped(), 0);
    }
}
