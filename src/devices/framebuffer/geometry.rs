//! Surface-local integer rectangles and clipping.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Rectangle in surface coordinates. May lie partly or wholly off-surface;
/// a non-positive width or height is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Half-open pixel span `[x0, x1) x [y0, y1)` already inside a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clipped {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Clipped {
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Exclusive right edge, widened so it cannot overflow.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w.max(0) as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h.max(0) as i64
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty()
            && x >= self.x
            && y >= self.y
            && (x as i64) < self.right()
            && (y as i64) < self.bottom()
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = (self.x as i64).max(other.x as i64);
        let y0 = (self.y as i64).max(other.y as i64);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if self.is_empty() || other.is_empty() || x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Rect::new(x0 as i32, y0 as i32, (x1 - x0) as i32, (y1 - y0) as i32))
    }

    /// Smallest rectangle covering both; empty operands are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::new(
            x0,
            y0,
            (x1 - x0 as i64).min(i32::MAX as i64) as i32,
            (y1 - y0 as i64).min(i32::MAX as i64) as i32,
        )
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.w, self.h)
    }

    /// Shrink by `n` on every side.
    pub fn inset(&self, n: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(n),
            self.y.saturating_add(n),
            self.w.saturating_sub(n.saturating_mul(2)),
            self.h.saturating_sub(n.saturating_mul(2)),
        )
    }

    /// Intersect with `[0, width) x [0, height)`.
    pub fn clip(&self, width: u32, height: u32) -> Option<Clipped> {
        let bounds = Rect::new(0, 0, width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32);
        self.intersection(&bounds).map(|r| Clipped {
            x0: r.x as usize,
            y0: r.y as usize,
            x1: r.right() as usize,
            y1: r.bottom() as usize,
        })
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x, self.y),
            Size::new(self.w.max(0) as u32, self.h.max(0) as u32),
        )
    }
}

impl From<Rectangle> for Rect {
    fn from(r: Rectangle) -> Self {
        Rect::new(
            r.top_left.x,
            r.top_left.y,
            r.size.width.min(i32::MAX as u32) as i32,
            r.size.height.min(i32::MAX as u32) as i32,
        )
    }
}
