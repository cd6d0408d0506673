//! # Mouse Cursor
//!
//! Absolute cursor position accumulated from relative motion, plus the
//! sprite the compositor paints last on every frame.
//!
//! The position is always inside `[0, width-1] x [0, height-1]` of the
//! surface it was last clamped against. The sprite's top-left corner sits on
//! the cursor position; parts hanging past the right or bottom edge are
//! clipped by the surface.

use crate::devices::framebuffer::{primitives, Color, PixelSurface, Rect};

/// Edge length of the block cursor.
pub const BLOCK_SIZE: i32 = 8;

/// `#` outline, `.` fill, anything else transparent.
#[rustfmt::skip]
const ARROW: [&[u8; 8]; 12] = [
    b"#       ",
    b"##      ",
    b"#.#     ",
    b"#..#    ",
    b"#...#   ",
    b"#....#  ",
    b"#.....# ",
    b"#......#",
    b"#...####",
    b"#.##.#  ",
    b"##  #.# ",
    b"     ## ",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    x: i32,
    y: i32,
}

impl CursorState {
    /// Cursor at `(x, y)`, clamped to a `width x height` surface.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        let mut cursor = Self { x, y };
        cursor.clamp_to(width, height);
        cursor
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn clamp_to(&mut self, width: u32, height: u32) {
        self.x = self.x.clamp(0, max_coord(width));
        self.y = self.y.clamp(0, max_coord(height));
    }

    /// Add a motion delta and clamp. Returns whether the position changed.
    pub fn apply(&mut self, dx: i32, dy: i32, width: u32, height: u32) -> bool {
        let before = *self;
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        self.clamp_to(width, height);
        *self != before
    }
}

fn max_coord(extent: u32) -> i32 {
    extent.saturating_sub(1).min(i32::MAX as u32) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// Solid square, `BLOCK_SIZE` on a side.
    Block,
    /// Outlined arrow pointing up-left.
    Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorStyle {
    pub shape: CursorShape,
    pub fill: Color,
    pub outline: Color,
}

impl CursorStyle {
    /// Bounding box of the sprite when drawn at `cursor`.
    pub fn footprint(&self, cursor: CursorState) -> Rect {
        let (w, h) = match self.shape {
            CursorShape::Block => (BLOCK_SIZE, BLOCK_SIZE),
            CursorShape::Arrow => (ARROW[0].len() as i32, ARROW.len() as i32),
        };
        Rect::new(cursor.x, cursor.y, w, h)
    }
}

pub fn draw_cursor(surface: &mut PixelSurface<'_>, cursor: CursorState, style: &CursorStyle) {
    match style.shape {
        CursorShape::Block => primitives::fill_rect(surface, style.footprint(cursor), style.fill),
        CursorShape::Arrow => {
            for (row, line) in ARROW.iter().enumerate() {
                for (col, &cell) in line.iter().enumerate() {
                    let color = match cell {
                        b'#' => style.outline,
                        b'.' => style.fill,
                        _ => continue,
                    };
                    surface.write_pixel(cursor.x + col as i32, cursor.y + row as i32, color);
                }
            }
        }
    }
}
