use crate::devices::framebuffer::color::Color;
use crate::devices::mouse_cursor::{CursorShape, CursorStyle};
use crate::ui::background::Background;

/// Desktop palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub desktop: Background,
    pub taskbar: Color,
    pub taskbar_text: Color,
    pub button_face: Color,
    pub bevel_light: Color,
    pub bevel_dark: Color,
    pub shadow: Color,
    pub window_frame: Color,
    pub title_bar: Color,
    pub title_text: Color,
    pub content: Color,
    pub content_text: Color,
    pub accent: Color,
    pub cursor: CursorStyle,
}

impl Theme {
    /// Teal desktop, grey frames, navy title bars, red block cursor
    pub fn classic() -> Self {
        Self {
            desktop: Background::Solid(Color::from_hex(0x008080)),
            taskbar: Color::from_hex(0x333333),
            taskbar_text: Color::WHITE,
            button_face: Color::from_hex(0x555555),
            bevel_light: Color::WHITE,
            bevel_dark: Color::from_hex(0x404040),
            shadow: Color::from_hex(0x202020),
            window_frame: Color::from_hex(0xCCCCCC),
            title_bar: Color::from_hex(0x000080),
            title_text: Color::WHITE,
            content: Color::WHITE,
            content_text: Color::BLACK,
            accent: Color::RED,
            cursor: CursorStyle {
                shape: CursorShape::Block,
                fill: Color::RED,
                outline: Color::BLACK,
            },
        }
    }

    /// Create a dark modern theme
    pub fn dark_modern() -> Self {
        Self {
            desktop: Background::VerticalGradient {
                top: Color::from_hex(0x1E1E1E),
                bottom: Color::from_hex(0x121212),
            },
            taskbar: Color::from_hex(0x1E1E1E),
            taskbar_text: Color::from_hex(0xB0B0B0),
            button_face: Color::from_hex(0x2D2D2D),
            bevel_light: Color::from_hex(0x3C3C3C),
            bevel_dark: Color::from_hex(0x0A0A0A),
            shadow: Color::from_hex(0x050505),
            window_frame: Color::from_hex(0x2D2D2D),
            title_bar: Color::from_hex(0x2196F3),
            title_text: Color::WHITE,
            content: Color::from_hex(0x252526),
            content_text: Color::from_hex(0xE0E0E0),
            accent: Color::from_hex(0xFF6B6B), // start logo
            cursor: CursorStyle {
                shape: CursorShape::Arrow,
                fill: Color::WHITE,
                outline: Color::BLACK,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
