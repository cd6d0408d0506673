//! Dirty bounding box for partial presentation.
//!
//! Grows to cover every pixel whose value changed since the last `take`.
//! A fresh tracker starts fully damaged so the first present copies all.

use super::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageBounds {
    /// Inclusive corners, `None` when clean.
    bounds: Option<(usize, usize, usize, usize)>,
    full: bool,
}

impl Default for DamageBounds {
    fn default() -> Self {
        Self::full()
    }
}

impl DamageBounds {
    pub const fn clean() -> Self {
        Self { bounds: None, full: false }
    }

    pub const fn full() -> Self {
        Self { bounds: None, full: true }
    }

    pub fn is_clean(&self) -> bool {
        !self.full && self.bounds.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn mark_full(&mut self) {
        self.full = true;
        self.bounds = None;
    }

    #[inline]
    pub fn add_point(&mut self, x: usize, y: usize) {
        self.add_span(y, x, x);
    }

    /// Add row `y`, columns `x0..=x1`.
    #[inline]
    pub fn add_span(&mut self, y: usize, x0: usize, x1: usize) {
        if self.full {
            return;
        }
        self.bounds = Some(match self.bounds {
            None => (x0, y, x1, y),
            Some((bx0, by0, bx1, by1)) => (bx0.min(x0), by0.min(y), bx1.max(x1), by1.max(y)),
        });
    }

    /// Region to copy, clamped to a `width x height` surface, then reset to clean.
    pub fn take(&mut self, width: u32, height: u32) -> Option<Rect> {
        let region = if self.full {
            Some(Rect::new(0, 0, width as i32, height as i32))
        } else {
            self.bounds.map(|(x0, y0, x1, y1)| {
                Rect::new(x0 as i32, y0 as i32, (x1 - x0 + 1) as i32, (y1 - y0 + 1) as i32)
            })
        };
        *self = Self::clean();
        region.filter(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_full_then_clean() {
        let mut d = DamageBounds::default();
        assert!(d.is_full());
        assert_eq!(d.take(8, 4), Some(Rect::new(0, 0, 8, 4)));
        assert!(d.is_clean());
        assert_eq!(d.take(8, 4), None);
    }

    #[test]
    fn grows_to_cover_points() {
        let mut d = DamageBounds::clean();
        d.add_point(3, 1);
        d.add_span(5, 1, 2);
        assert_eq!(d.take(8, 8), Some(Rect::new(1, 1, 3, 5)));
    }
}
