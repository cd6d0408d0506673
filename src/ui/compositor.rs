//! Scene compositor.
//!
//! Owns the back buffer and repaints all of it on every `compose` call in a
//! fixed order: background, taskbar, windows in slice order, cursor. The
//! result depends only on the arguments and the configuration, never on what
//! the buffer held before.

use super::{
    background::{Background, BackgroundPainter},
    taskbar::Taskbar,
    theme::Theme,
    window::Window,
};
use crate::devices::framebuffer::PixelSurface;
use crate::devices::mouse_cursor::{draw_cursor, CursorState};

pub struct Compositor<'a, P: BackgroundPainter = Background> {
    back: PixelSurface<'a>,
    theme: Theme,
    taskbar: Taskbar,
    background: P,
    frames: u64,
}

impl<'a> Compositor<'a, Background> {
    /// Compositor painting the theme's own desktop background.
    pub fn new(back: PixelSurface<'a>, theme: Theme, taskbar_height: u32) -> Self {
        let background = theme.desktop;
        Self::with_background(back, theme, taskbar_height, background)
    }
}

impl<'a, P: BackgroundPainter> Compositor<'a, P> {
    pub fn with_background(back: PixelSurface<'a>, theme: Theme, taskbar_height: u32, background: P) -> Self {
        Self {
            back,
            theme,
            taskbar: Taskbar::new(taskbar_height),
            background,
            frames: 0,
        }
    }

    pub fn compose(&mut self, windows: &[Window<'_>], cursor: CursorState) {
        self.background.paint(&mut self.back);
        self.taskbar.paint(&mut self.back, &self.theme);
        for window in windows {
            window.paint(&mut self.back, &self.theme);
        }
        draw_cursor(&mut self.back, cursor, &self.theme.cursor);
        self.frames += 1;
    }

    pub fn back(&self) -> &PixelSurface<'a> {
        &self.back
    }

    pub fn back_mut(&mut self) -> &mut PixelSurface<'a> {
        &mut self.back
    }

    pub fn size(&self) -> (u32, u32) {
        self.back.size()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn taskbar(&self) -> Taskbar {
        self.taskbar
    }

    /// Frames composed since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::{Color, Rect};
    use crate::ui::window::notepad;

    const W: u32 = 800;
    const H: u32 = 600;

    #[test]
    fn same_scene_gives_identical_buffers() {
        let scene = [notepad(), Window::new(Rect::new(40, 40, 200, 120), "Info", "one\ntwo")];
        let cursor = CursorState::new(100, 100, W, H);

        let mut a = vec![0u32; (W * H) as usize];
        let mut b = vec![0xFFFF_FFFFu32; (W * H) as usize];
        let mut ca = Compositor::new(PixelSurface::packed(&mut a, W, H).unwrap(), Theme::classic(), 40);
        let mut cb = Compositor::new(PixelSurface::packed(&mut b, W, H).unwrap(), Theme::classic(), 40);
        ca.compose(&scene, cursor);
        cb.compose(&scene, cursor);
        cb.compose(&scene, cursor);
        assert!(ca.back().same_pixels(cb.back()));
        assert_eq!(cb.frames(), 2);
    }

    #[test]
    fn repaint_leaves_no_stale_pixels() {
        let cursor = CursorState::new(10, 10, W, H);
        let mut a = vec![0u32; (W * H) as usize];
        let mut b = vec![0u32; (W * H) as usize];
        let mut ca = Compositor::new(PixelSurface::packed(&mut a, W, H).unwrap(), Theme::classic(), 40);
        let mut cb = Compositor::new(PixelSurface::packed(&mut b, W, H).unwrap(), Theme::classic(), 40);
        ca.compose(&[notepad()], CursorState::new(400, 300, W, H));
        ca.compose(&[], cursor);
        cb.compose(&[], cursor);
        assert!(ca.back().same_pixels(cb.back()));
    }

    #[test]
    fn layers_stack_in_fixed_order() {
        let theme = Theme::classic();
        let mut buf = vec![0u32; (W * H) as usize];
        let mut c = Compositor::new(PixelSurface::packed(&mut buf, W, H).unwrap(), theme, 40);
        // window overlapping the taskbar, cursor over the window
        let win = Window::new(Rect::new(300, 500, 200, 200), "", "");
        c.compose(&[win], CursorState::new(400, 580, W, H));
        let back = c.back();

        assert_eq!(back.read_pixel(5, 5), Some(Color::from_hex(0x008080)));
        assert_eq!(back.read_pixel(700, 590), Some(Color::from_hex(0x333333)));
        assert_eq!(back.read_pixel(350, 590), Some(theme.content));
        assert_eq!(back.read_pixel(403, 583), Some(Color::RED));
    }

    #[test]
    fn later_windows_paint_over_earlier_ones() {
        let theme = Theme::classic();
        let mut buf = vec![0u32; (W * H) as usize];
        let mut c = Compositor::new(PixelSurface::packed(&mut buf, W, H).unwrap(), theme, 40);
        let under = Window::new(Rect::new(100, 100, 300, 300), "", "");
        let over = Window::new(Rect::new(200, 90, 300, 300), "", "");
        c.compose(&[under, over], CursorState::new(0, 0, W, H));
        // inside `under`'s content, under `over`'s title bar
        assert_eq!(c.back().read_pixel(250, 100), Some(theme.title_bar));
    }

    #[test]
    fn custom_background_painter() {
        struct Checker;
        impl BackgroundPainter for Checker {
            fn paint(&self, surface: &mut PixelSurface<'_>) {
                let (w, h) = surface.size();
                for y in 0..h as i32 {
                    for x in 0..w as i32 {
                        let c = if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK };
                        surface.write_pixel(x, y, c);
                    }
                }
            }
        }
        let mut buf = vec![0u32; 64 * 64];
        let mut c = Compositor::with_background(
            PixelSurface::packed(&mut buf, 64, 64).unwrap(),
            Theme::classic(),
            0,
            Checker,
        );
        c.compose(&[], CursorState::new(63, 63, 64, 64));
        assert_eq!(c.back().read_pixel(0, 0), Some(Color::WHITE));
        assert_eq!(c.back().read_pixel(1, 0), Some(Color::BLACK));
        assert_eq!(c.back().read_pixel(63, 63), Some(Color::RED));
    }
}
