//! Color representation and manipulation
//!
//! Pixels are stored packed as `0x00RRGGBB`; the high byte is ignored and
//! every draw is an opaque overwrite.
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const NAVY: Color = Color::new(0, 0, 128);
    pub const TEAL: Color = Color::new(0, 128, 128);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const DARK_GRAY: Color = Color::new(64, 64, 64);
    pub const LIGHT_GRAY: Color = Color::new(192, 192, 192);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from `0xRRGGBB`; bits above 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Packed framebuffer word.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_u32(raw: u32) -> Self {
        Self::from_hex(raw)
    }

    /// Darken the color by a factor (0.0 = no change, 1.0 = black)
    pub fn darken(&self, factor: f32) -> Color {
        let factor = factor.clamp(0.0, 1.0);
        Color::new(
            (self.r as f32 * (1.0 - factor)) as u8,
            (self.g as f32 * (1.0 - factor)) as u8,
            (self.b as f32 * (1.0 - factor)) as u8,
        )
    }

    /// Lighten the color by a factor (0.0 = no change, 1.0 = white)
    pub fn lighten(&self, factor: f32) -> Color {
        let factor = factor.clamp(0.0, 1.0);
        let up = |c: u8| (c as f32 + (255 - c) as f32 * factor) as u8;
        Color::new(up(self.r), up(self.g), up(self.b))
    }

    /// Integer blend used for gradients: `step` of `steps` from self to other.
    pub fn lerp(&self, other: &Color, step: u32, steps: u32) -> Color {
        if steps == 0 {
            return *self;
        }
        let step = step.min(steps) as i32;
        let steps = steps as i32;
        let mix = |a: u8, b: u8| (a as i32 + (b as i32 - a as i32) * step / steps) as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Color::new(c.r(), c.g(), c.b())
    }
}
