//! Boot handshake: the framebuffer descriptor handed over by the loader.
//!
//! The descriptor is validated once, then turned into the front
//! [`PixelSurface`] aliasing video memory. Rendering never starts over an
//! unvalidated descriptor.

use crate::devices::framebuffer::PixelSurface;
use crate::error::BootError;
use bootloader_api::info::{FrameBuffer, PixelFormat};
use bootloader_api::BootInfo;
use x86_64::VirtAddr;

const BYTES_PER_PIXEL: u32 = 4;

/// Loader byte depth in bits, saturated so an absurd value stays visible
/// in `BootError::UnsupportedDepth`.
fn depth_bits(bytes_per_pixel: usize) -> u8 {
    u8::try_from(bytes_per_pixel.saturating_mul(8)).unwrap_or(u8::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferDescriptor {
    pub framebuffer_address: u64,
    /// Bytes per scanline.
    pub pitch: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u8,
    /// Loader reported a linear RGB framebuffer rather than text mode.
    pub graphics_mode: bool,
}

/// Geometry of a validated descriptor, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
}

impl FrameGeometry {
    /// Words spanned by the visible area, stride padding included.
    pub fn len(&self) -> usize {
        self.stride as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FramebufferDescriptor {
    pub fn validate(&self) -> Result<FrameGeometry, BootError> {
        if !self.graphics_mode {
            return Err(BootError::NotGraphicsMode);
        }
        if self.framebuffer_address == 0 {
            return Err(BootError::NullAddress);
        }
        if VirtAddr::try_new(self.framebuffer_address).is_err() {
            return Err(BootError::NonCanonicalAddress);
        }
        if self.width == 0 || self.height == 0 {
            return Err(BootError::ZeroSized);
        }
        if u32::from(self.bits_per_pixel) != BYTES_PER_PIXEL * 8 {
            return Err(BootError::UnsupportedDepth(self.bits_per_pixel));
        }
        if self.pitch % BYTES_PER_PIXEL != 0 {
            return Err(BootError::MisalignedPitch);
        }
        let stride = self.pitch / BYTES_PER_PIXEL;
        if stride < self.width {
            return Err(BootError::PitchTooSmall);
        }
        Ok(FrameGeometry {
            width: self.width,
            height: self.height,
            stride,
        })
    }

    /// Front surface over the described video memory.
    ///
    /// # Safety
    /// The address must map `pitch * height` writable bytes for `'fb`, and
    /// nothing else may access them while the surface lives.
    pub unsafe fn into_front_surface<'fb>(self) -> Result<PixelSurface<'fb>, BootError> {
        let geometry = self.validate()?;
        let pixels = core::slice::from_raw_parts_mut(self.framebuffer_address as *mut u32, geometry.len());
        PixelSurface::new(pixels, geometry.width, geometry.height, geometry.stride).ok_or(BootError::BufferTooSmall)
    }

    /// Descriptor for a `bootloader_api` framebuffer. Only 32-bit BGR
    /// layouts match the `0x00RRGGBB` pixel word.
    pub fn from_bootloader(fb: &mut FrameBuffer) -> Result<Self, BootError> {
        let info = fb.info();
        match info.pixel_format {
            PixelFormat::Bgr => {}
            _ => return Err(BootError::UnsupportedPixelFormat),
        }
        let bits_per_pixel = depth_bits(info.bytes_per_pixel);
        let to_u32 = |v: usize| u32::try_from(v).map_err(|_| BootError::BufferTooSmall);
        let descriptor = Self {
            framebuffer_address: fb.buffer_mut().as_mut_ptr() as u64,
            pitch: to_u32(info.stride * info.bytes_per_pixel)?,
            width: to_u32(info.width)?,
            height: to_u32(info.height)?,
            bits_per_pixel,
            graphics_mode: true,
        };
        let geometry = descriptor.validate()?;
        if geometry.len() * BYTES_PER_PIXEL as usize > info.byte_len {
            return Err(BootError::BufferTooSmall);
        }
        Ok(descriptor)
    }

    pub fn from_boot_info(boot_info: &mut BootInfo) -> Result<Self, BootError> {
        let fb = boot_info.framebuffer.as_mut().ok_or(BootError::NotGraphicsMode)?;
        Self::from_bootloader(fb)
    }
}
