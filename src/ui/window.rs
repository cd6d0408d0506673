//! Static window descriptors and their painter.
//!
//! A window is `{rect, title, content}` supplied fresh by the caller each
//! frame. There is no z-order: windows are painted in slice order.
//!
//! ```text
//!  rect.x
//!  ┌──────────────────────────────────────┐ rect.y
//!  │┌──────────────────────────────┬───┐ │ +2  title bar, 28 tall
//!  ││ Title                        │ X │ │
//!  │└──────────────────────────────┴───┘ │
//!  │ ┌──────────────────────────────────┐│ +35 content, inset 5
//!  │ │ content text                     ││
//!  │ └──────────────────────────────────┘│
//!  └──────────────────────────────────────┘
//! ```

use crate::devices::framebuffer::{
    font::GLYPH_HEIGHT,
    primitives::{draw_bevel, draw_string_clipped, fill_rect},
    PixelSurface, Rect,
};
use crate::ui::theme::Theme;
use embedded_graphics::{
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};

pub const TITLE_INSET: i32 = 2;
pub const TITLE_HEIGHT: i32 = 28;
pub const CONTENT_INSET: i32 = 5;
pub const CONTENT_TOP: i32 = 35;
pub const SHADOW_OFFSET: i32 = 4;
pub const CLOSE_SIZE: i32 = 20;
const TEXT_PAD: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    pub rect: Rect,
    pub title: &'a str,
    pub content: &'a str,
}

/// Screen rectangles of each window part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub shadow: Rect,
    pub frame: Rect,
    pub title_bar: Rect,
    pub close_box: Option<Rect>,
    pub content: Rect,
}

/// The scratch-pad window of the stock desktop.
pub const fn notepad() -> Window<'static> {
    Window {
        rect: Rect::new(150, 100, 500, 350),
        title: "Notepad",
        content: "Hello MyOS! Type here...",
    }
}

impl<'a> Window<'a> {
    pub const fn new(rect: Rect, title: &'a str, content: &'a str) -> Self {
        Self { rect, title, content }
    }

    pub fn layout(&self) -> WindowLayout {
        let Rect { x, y, w, h } = self.rect;
        let title_bar = Rect::new(
            x.saturating_add(TITLE_INSET),
            y.saturating_add(TITLE_INSET),
            w.saturating_sub(2 * TITLE_INSET),
            TITLE_HEIGHT,
        );
        let close_box = (title_bar.w >= 2 * CLOSE_SIZE).then(|| {
            let margin = (TITLE_HEIGHT - CLOSE_SIZE) / 2;
            Rect::new(
                title_bar.x.saturating_add(title_bar.w - CLOSE_SIZE - margin),
                title_bar.y.saturating_add(margin),
                CLOSE_SIZE,
                CLOSE_SIZE,
            )
        });
        WindowLayout {
            shadow: self.rect.offset(SHADOW_OFFSET, SHADOW_OFFSET),
            frame: self.rect,
            title_bar,
            close_box,
            content: Rect::new(
                x.saturating_add(CONTENT_INSET),
                y.saturating_add(CONTENT_TOP),
                w.saturating_sub(2 * CONTENT_INSET),
                h.saturating_sub(CONTENT_TOP + CONTENT_INSET),
            ),
        }
    }

    /// Shadow, body, title bar, content, then the raised outer bevel and
    /// the sunken content bevel.
    pub fn paint(&self, surface: &mut PixelSurface<'_>, theme: &Theme) {
        if self.rect.is_empty() {
            return;
        }
        let layout = self.layout();

        fill_rect(surface, layout.shadow, theme.shadow);
        fill_rect(surface, layout.frame, theme.window_frame);
        fill_rect(surface, layout.title_bar, theme.title_bar);
        fill_rect(surface, layout.content, theme.content);

        draw_bevel(surface, layout.frame, theme.bevel_light, theme.bevel_dark);
        draw_bevel(surface, layout.content, theme.bevel_dark, theme.bevel_light);

        let text_area = match layout.close_box {
            Some(close) => Rect::new(
                layout.title_bar.x,
                layout.title_bar.y,
                close.x.saturating_sub(layout.title_bar.x),
                layout.title_bar.h,
            ),
            None => layout.title_bar,
        };
        draw_string_clipped(
            surface,
            text_area,
            text_area.x.saturating_add(TEXT_PAD + 2),
            text_area.y.saturating_add((TITLE_HEIGHT - GLYPH_HEIGHT) / 2),
            self.title,
            theme.title_text,
        );

        if let Some(close) = layout.close_box {
            paint_close_box(surface, close, theme);
        }

        let mut line_y = layout.content.y.saturating_add(TEXT_PAD);
        for line in self.content.split('\n') {
            draw_string_clipped(
                surface,
                layout.content,
                layout.content.x.saturating_add(TEXT_PAD),
                line_y,
                line,
                theme.content_text,
            );
            line_y = line_y.saturating_add(GLYPH_HEIGHT);
        }
    }
}

fn paint_close_box(surface: &mut PixelSurface<'_>, close: Rect, theme: &Theme) {
    if close.intersection(&surface.bounds()).is_none() {
        return;
    }
    fill_rect(surface, close, theme.button_face);
    draw_bevel(surface, close, theme.bevel_light, theme.bevel_dark);

    let cross = close.inset(5);
    let (x0, y0) = (cross.x, cross.y);
    let (x1, y1) = (x0.saturating_add(cross.w - 1), y0.saturating_add(cross.h - 1));
    let stroke = PrimitiveStyle::with_stroke(theme.title_text.to_rgb888(), 2);
    Line::new(Point::new(x0, y0), Point::new(x1, y1))
        .into_styled(stroke)
        .draw(surface)
        .ok();
    Line::new(Point::new(x0, y1), Point::new(x1, y0))
        .into_styled(stroke)
        .draw(surface)
        .ok();
}
