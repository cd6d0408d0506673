//! Pixel surface over a caller-owned linear buffer.
//!
//! The same type backs the front buffer (aliasing video memory) and the back
//! buffer (an arena slice handed in by the memory manager). Neither is ever
//! resized after construction.

use super::{
    color::Color,
    damage::DamageBounds,
    geometry::{Clipped, Rect},
};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb888,
    primitives::Rectangle,
    Pixel,
};

pub struct PixelSurface<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
    stride: u32,
    damage: DamageBounds,
}

impl<'a> PixelSurface<'a> {
    /// Wrap `pixels` as a `width x height` surface whose rows start every
    /// `stride` words. Returns `None` if the geometry does not fit the slice.
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32, stride: u32) -> Option<Self> {
        if width == 0 || height == 0 || stride < width {
            return None;
        }
        let required = (stride as usize)
            .checked_mul(height as usize - 1)?
            .checked_add(width as usize)?;
        if pixels.len() < required {
            return None;
        }

        Some(Self {
            pixels,
            width,
            height,
            stride,
            damage: DamageBounds::full(),
        })
    }

    /// Surface with `stride == width`.
    pub fn packed(pixels: &'a mut [u32], width: u32, height: u32) -> Option<Self> {
        Self::new(pixels, width, height, width)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Address of the first pixel; identifies the backing buffer.
    pub(crate) fn base_addr(&self) -> usize {
        self.pixels.as_ptr() as usize
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.stride as usize + x
    }

    /// Opaque write. Out-of-range coordinates are dropped.
    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let idx = self.index(x, y);
        let value = color.to_u32();
        if self.pixels[idx] != value {
            self.pixels[idx] = value;
            self.damage.add_point(x, y);
        }
    }

    pub fn read_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(Color::from_u32(self.pixels[self.index(x as usize, y as usize)]))
    }

    /// Visible words of row `y` (stride padding excluded).
    pub fn row(&self, y: u32) -> &[u32] {
        if y >= self.height {
            return &[];
        }
        let start = self.index(0, y as usize);
        &self.pixels[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Same geometry and identical visible pixels.
    pub fn same_pixels(&self, other: &PixelSurface<'_>) -> bool {
        self.size() == other.size() && self.rows().eq(other.rows())
    }

    /// Fill every visible pixel.
    pub fn fill(&mut self, color: Color) {
        let all = Clipped {
            x0: 0,
            y0: 0,
            x1: self.width as usize,
            y1: self.height as usize,
        };
        self.fill_clipped(all, color);
    }

    /// Fill an already-clipped region, recording only spans that changed.
    pub(crate) fn fill_clipped(&mut self, region: Clipped, color: Color) {
        let value = color.to_u32();
        for y in region.y0..region.y1 {
            let start = self.index(region.x0, y);
            let span = &mut self.pixels[start..start + region.width()];
            let first = span.iter().position(|&p| p != value);
            if let Some(first) = first {
                let last = span.iter().rposition(|&p| p != value).unwrap_or(first);
                span.fill(value);
                self.damage.add_span(y, region.x0 + first, region.x0 + last);
            }
        }
    }

    /// Copy `region` of `src` into the same place on this surface.
    pub(crate) fn copy_region_from(&mut self, src: &PixelSurface<'_>, region: Clipped) {
        for y in region.y0..region.y1 {
            let from = src.index(region.x0, y);
            let to = self.index(region.x0, y);
            let len = region.width();
            self.pixels[to..to + len].copy_from_slice(&src.pixels[from..from + len]);
            self.damage.add_span(y, region.x0, region.x1 - 1);
        }
    }

    pub fn damage(&self) -> &DamageBounds {
        &self.damage
    }

    /// Dirty region since the previous call; resets tracking.
    pub fn take_damage(&mut self) -> Option<Rect> {
        self.damage.take(self.width, self.height)
    }

    pub fn mark_all_dirty(&mut self) {
        self.damage.mark_full();
    }
}

impl DrawTarget for PixelSurface<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.write_pixel(x, y, Color::from(color));
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        if let Some(region) = Rect::from(*area).clip(self.width, self.height) {
            self.fill_clipped(region, Color::from(color));
        }
        Ok(())
    }
}

impl OriginDimensions for PixelSurface<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
