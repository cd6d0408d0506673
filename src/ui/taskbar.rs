//! Fixed taskbar along the bottom edge with a start button.

use crate::devices::framebuffer::{
    font::{GLYPH_HEIGHT, GLYPH_WIDTH},
    primitives::{draw_bevel, draw_string_clipped, fill_rect},
    PixelSurface, Rect,
};
use crate::ui::theme::Theme;
use embedded_graphics::{
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
};

const BUTTON_MARGIN: i32 = 4;
const BUTTON_WIDTH: i32 = 80;
const LABEL: &str = "Start";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taskbar {
    pub height: u32,
}

impl Taskbar {
    pub const fn new(height: u32) -> Self {
        Self { height }
    }

    /// Full-width strip of `height` rows ending at the bottom of the screen.
    pub fn rect(&self, screen_width: u32, screen_height: u32) -> Rect {
        let h = self.height.min(screen_height) as i32;
        Rect::new(0, screen_height as i32 - h, screen_width as i32, h)
    }

    pub fn start_button(&self, bar: Rect) -> Option<Rect> {
        let button = Rect::new(
            bar.x + BUTTON_MARGIN,
            bar.y + BUTTON_MARGIN,
            BUTTON_WIDTH.min(bar.w - 2 * BUTTON_MARGIN),
            bar.h - 2 * BUTTON_MARGIN,
        );
        (!button.is_empty()).then_some(button)
    }

    pub fn paint(&self, surface: &mut PixelSurface<'_>, theme: &Theme) {
        let (width, height) = surface.size();
        let bar = self.rect(width, height);
        if bar.is_empty() {
            return;
        }
        fill_rect(surface, bar, theme.taskbar);
        fill_rect(surface, Rect::new(bar.x, bar.y, bar.w, 1), theme.bevel_light);

        let Some(button) = self.start_button(bar) else {
            return;
        };
        fill_rect(surface, button, theme.button_face);
        draw_bevel(surface, button, theme.bevel_light, theme.bevel_dark);

        let logo = (button.h - 2 * BUTTON_MARGIN).min(GLYPH_HEIGHT);
        let mut label_x = button.x + BUTTON_MARGIN;
        if logo > 0 {
            let top = button.y + (button.h - logo) / 2;
            Circle::new(Point::new(label_x, top), logo as u32)
                .into_styled(PrimitiveStyle::with_fill(theme.accent.to_rgb888()))
                .draw(surface)
                .ok();
            label_x += logo + BUTTON_MARGIN;
        }

        let label_y = button.y + (button.h - GLYPH_HEIGHT) / 2;
        let label_w = LABEL.len() as i32 * GLYPH_WIDTH;
        if label_x + label_w <= button.x + button.w {
            draw_string_clipped(surface, button, label_x, label_y, LABEL, theme.taskbar_text);
        }
    }
}
