//! # deskcore
//!
//! Rendering and input core of a minimal bare-metal desktop.
//!
//! ## Layout
//!
//! - `devices`: framebuffer surfaces and primitives, PS/2 drivers, input
//!   controller and mouse cursor
//! - `ui`: theme, background painters, windows, taskbar and the compositor
//! - `desktop`: the `Desktop` facade driven by the outer loop
//! - `boot`: boot handshake descriptor validation
//! - `interrupts`: IRQ12 delivery boundary
//! - `pacing`: frame pacing capability owned by the outer loop
//!
//! ## Frame Flow
//!
//! ```text
//! PS/2 bytes ──▶ InputController ──▶ CursorState
//!                                        │
//! scene ──▶ Compositor (back buffer) ◀───┘
//!                 │
//!                 ▼
//!            Presenter ──▶ front buffer (video memory)
//! ```
//!
//! The crate is `no_std`; the host test harness links `std`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
pub mod logging;

pub mod boot;
pub mod config;
pub mod desktop;
pub mod devices;
pub mod error;
pub mod interrupts;
pub mod pacing;
pub mod ui;

pub use config::{DesktopConfig, InputConfig};
pub use desktop::Desktop;
pub use devices::framebuffer::{Color, PixelSurface, Rect};
pub use error::{BootError, DeviceError, PacketError};
pub use ui::window::Window;
