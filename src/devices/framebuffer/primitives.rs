//! Primitive renderer: rectangles, borders, glyphs and strings.
//!
//! Every operation clips against the target surface and is a silent no-op
//! where nothing is visible.

use super::{
    color::Color,
    font::{self, GLYPH_HEIGHT, GLYPH_WIDTH},
    geometry::Rect,
    surface::PixelSurface,
};

pub fn fill_rect(surface: &mut PixelSurface<'_>, rect: Rect, color: Color) {
    if let Some(region) = rect.clip(surface.width(), surface.height()) {
        surface.fill_clipped(region, color);
    }
}

/// Four strips of `thickness` along the edges of `rect`.
pub fn draw_border(surface: &mut PixelSurface<'_>, rect: Rect, color: Color, thickness: i32) {
    if thickness <= 0 || rect.is_empty() {
        return;
    }
    let Rect { x, y, w, h } = rect;
    let tv = thickness.min(h);
    let th = thickness.min(w);
    fill_rect(surface, Rect::new(x, y, w, tv), color);
    fill_rect(surface, Rect::new(x, y.saturating_add(h - tv), w, tv), color);
    fill_rect(surface, Rect::new(x, y, th, h), color);
    fill_rect(surface, Rect::new(x.saturating_add(w - th), y, th, h), color);
}

/// Raised 1px bevel: a `light` border, then `dark` over the bottom and right edges.
pub fn draw_bevel(surface: &mut PixelSurface<'_>, rect: Rect, light: Color, dark: Color) {
    if rect.is_empty() {
        return;
    }
    draw_border(surface, rect, light, 1);
    let Rect { x, y, w, h } = rect;
    fill_rect(surface, Rect::new(x, y.saturating_add(h - 1), w, 1), dark);
    fill_rect(surface, Rect::new(x.saturating_add(w - 1), y, 1, h), dark);
}

/// Draw `ch` with its top-left at `(x, y)`. Undefined characters draw nothing.
pub fn draw_glyph(surface: &mut PixelSurface<'_>, x: i32, y: i32, ch: char, color: Color) {
    let Some(glyph) = font::glyph(ch) else {
        return;
    };
    for (row, &bits) in glyph.iter().enumerate() {
        if bits == 0 {
            continue;
        }
        for col in 0..GLYPH_WIDTH {
            if bits & (0x80 >> col) != 0 {
                surface.write_pixel(x.saturating_add(col), y.saturating_add(row as i32), color);
            }
        }
    }
}

/// One line of text, 8px per character. No wrapping.
pub fn draw_string(surface: &mut PixelSurface<'_>, x: i32, y: i32, text: &str, color: Color) {
    let mut cx = x;
    for ch in text.chars() {
        if cx >= surface.width() as i32 {
            break;
        }
        draw_glyph(surface, cx, y, ch, color);
        cx = cx.saturating_add(GLYPH_WIDTH);
    }
}

/// Like [`draw_string`] but stops before the first glyph that would cross
/// the right edge of `area`, and skips the line if it does not fit vertically.
pub fn draw_string_clipped(
    surface: &mut PixelSurface<'_>,
    area: Rect,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
) {
    if (y as i64) < area.y as i64 || y as i64 + GLYPH_HEIGHT as i64 > area.bottom() {
        return;
    }
    let mut cx = x;
    for ch in text.chars() {
        if cx as i64 + GLYPH_WIDTH as i64 > area.right() {
            break;
        }
        if cx >= area.x {
            draw_glyph(surface, cx, y, ch, color);
        }
        cx = cx.saturating_add(GLYPH_WIDTH);
    }
}
