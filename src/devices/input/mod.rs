//! # Input Device Module
//!
//! Pointer input from the PS/2 auxiliary port.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  IRQ12 ISR   │   │ status poll  │   │  test feed   │
//! │ (ByteQueue)  │   │ (bit0+bit5)  │   │              │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        └──────────────────┼──────────────────┘
//!                           ▼
//!              ┌──────────────────────────┐
//!              │ InputController::on_byte │
//!              │   MouseDecoder → clamp   │
//!              └──────────────────────────┘
//! ```

pub mod controller;
pub mod queue;

pub use controller::InputController;
pub use queue::ByteQueue;
