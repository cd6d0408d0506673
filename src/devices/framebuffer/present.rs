//! Presentation engine: back buffer → front buffer.
//!
//! The copy is the only point where the visible image changes, so a frame is
//! never shown half-drawn.

use super::{geometry::Rect, surface::PixelSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentMode {
    /// Copy every visible pixel.
    #[default]
    Full,
    /// Copy only the bounding box of pixels changed since the last present.
    Dirty,
}

pub struct Presenter<'fb> {
    front: PixelSurface<'fb>,
    /// Base address of the back buffer last presented, if any.
    last_back: Option<usize>,
}

impl<'fb> Presenter<'fb> {
    pub fn new(front: PixelSurface<'fb>) -> Self {
        Self { front, last_back: None }
    }

    pub fn front(&self) -> &PixelSurface<'fb> {
        &self.front
    }

    pub fn size(&self) -> (u32, u32) {
        self.front.size()
    }

    fn overlap(&self, back: &PixelSurface<'_>) -> Rect {
        Rect::new(
            0,
            0,
            self.front.width().min(back.width()) as i32,
            self.front.height().min(back.height()) as i32,
        )
    }

    /// Copy all of `back` onto the front buffer. Afterwards the two are
    /// pixel-for-pixel equal over their common area.
    pub fn present(&mut self, back: &mut PixelSurface<'_>) {
        let region = self.overlap(back);
        if let Some(clipped) = region.clip(self.front.width(), self.front.height()) {
            self.front.copy_region_from(back, clipped);
        }
        back.take_damage();
        self.last_back = Some(back.base_addr());
    }

    /// Copy only what changed in `back` since it was last presented.
    ///
    /// Falls back to a full copy when `back` is not the buffer presented last
    /// time. Returns the region copied.
    pub fn present_dirty(&mut self, back: &mut PixelSurface<'_>) -> Option<Rect> {
        if self.last_back != Some(back.base_addr()) {
            klog_debug!("present: new back buffer, copying full frame");
            self.present(back);
            return Some(self.overlap(back));
        }
        let dirty = back.take_damage()?;
        let region = dirty.intersection(&self.overlap(back))?;
        let clipped = region.clip(self.front.width(), self.front.height())?;
        self.front.copy_region_from(back, clipped);
        Some(region)
    }

    pub fn present_with(&mut self, mode: PresentMode, back: &mut PixelSurface<'_>) -> Option<Rect> {
        match mode {
            PresentMode::Full => {
                self.present(back);
                Some(self.overlap(back))
            }
            PresentMode::Dirty => self.present_dirty(back),
        }
    }
}
