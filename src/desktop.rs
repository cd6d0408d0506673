//! The surface the outer loop drives: render a scene, feed pointer bytes,
//! read the cursor back.
//!
//! `Desktop` owns the presenter (front buffer), the compositor (back
//! buffer) and the input controller. Every method takes `&mut self`, so the
//! byte path and the render path can never overlap on one desktop.

use crate::config::DesktopConfig;
use crate::devices::drivers::ps2_controller::DeviceRegisters;
use crate::devices::framebuffer::{PixelSurface, Presenter};
use crate::devices::input::{ByteQueue, InputController};
use crate::error::{BootError, DeviceError};
use crate::ui::{compositor::Compositor, theme::Theme, window::Window};

pub struct Desktop<'fb, 'bb> {
    presenter: Presenter<'fb>,
    compositor: Compositor<'bb>,
    input: InputController,
    config: DesktopConfig,
}

/// Words a back buffer needs for a `width x height` screen.
pub fn back_buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl<'fb, 'bb> Desktop<'fb, 'bb> {
    /// `back` is caller-owned memory of at least `back_buffer_len` words;
    /// it is used packed at the front buffer's size.
    pub fn new(
        front: PixelSurface<'fb>,
        back: &'bb mut [u32],
        theme: Theme,
        config: DesktopConfig,
    ) -> Result<Self, BootError> {
        let (width, height) = front.size();
        let back = PixelSurface::packed(back, width, height).ok_or(BootError::BufferTooSmall)?;
        klog_info!(
            "desktop: {}x{} (front stride {}), {:?} present",
            width,
            height,
            front.stride(),
            config.present_mode
        );
        Ok(Self {
            presenter: Presenter::new(front),
            compositor: Compositor::new(back, theme, config.taskbar_height),
            input: InputController::new(width, height, config.cursor_start, config.input),
            config,
        })
    }

    /// Repaint the back buffer from `scene` and the current cursor, then
    /// present it.
    pub fn render_frame(&mut self, scene: &[Window<'_>]) {
        self.compositor.compose(scene, self.input.cursor());
        self.presenter
            .present_with(self.config.present_mode, self.compositor.back_mut());
    }

    pub fn feed_input_byte(&mut self, byte: u8) {
        self.input.on_byte(byte);
    }

    pub fn cursor_position(&self) -> (i32, i32) {
        self.input.cursor_position()
    }

    pub fn initialize_input<R: DeviceRegisters + ?Sized>(&mut self, regs: &mut R) -> Result<(), DeviceError> {
        self.input.initialize(regs)
    }

    /// Polling delivery: read waiting mouse bytes from the controller.
    pub fn poll_input<R: DeviceRegisters + ?Sized>(&mut self, regs: &mut R) -> usize {
        self.input.poll(regs)
    }

    /// Interrupt delivery: consume bytes queued by the IRQ handler.
    pub fn drain_input<const N: usize>(&mut self, queue: &ByteQueue<N>) -> usize {
        self.input.drain(queue)
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn front(&self) -> &PixelSurface<'fb> {
        self.presenter.front()
    }

    pub fn back(&self) -> &PixelSurface<'bb> {
        self.compositor.back()
    }

    pub fn size(&self) -> (u32, u32) {
        self.presenter.size()
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn frames(&self) -> u64 {
        self.compositor.frames()
    }
}
