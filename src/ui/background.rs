//! Desktop background painters.
//!
//! The compositor calls its painter first on every frame, over the whole
//! back buffer, so a painter must cover every pixel.

use crate::devices::framebuffer::{primitives, Color, PixelSurface, Rect};

pub trait BackgroundPainter {
    fn paint(&self, surface: &mut PixelSurface<'_>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(Color),
    /// Linear blend from `top` on the first row to `bottom` on the last.
    VerticalGradient { top: Color, bottom: Color },
}

impl BackgroundPainter for Background {
    fn paint(&self, surface: &mut PixelSurface<'_>) {
        match *self {
            Background::Solid(color) => surface.fill(color),
            Background::VerticalGradient { top, bottom } => {
                let (width, height) = surface.size();
                let steps = height.saturating_sub(1);
                for y in 0..height {
                    let color = top.lerp(&bottom, y, steps);
                    primitives::fill_rect(surface, Rect::new(0, y as i32, width as i32, 1), color);
                }
            }
        }
    }
}

impl<P: BackgroundPainter + ?Sized> BackgroundPainter for &P {
    fn paint(&self, surface: &mut PixelSurface<'_>) {
        (**self).paint(surface)
    }
}
