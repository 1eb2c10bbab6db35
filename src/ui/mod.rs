//! User interface subsystem - splash screen and start menu.
//!
//! Rendering is written against embedded-graphics traits so the layout
//! and drawing code run unchanged on the host in tests.
//!
//! ## Components
//!
//! - **Layout**: tile grid and text cursor geometry
//! - **Menu**: the eight fixed menu entries
//! - **Screens**: splash and menu draw routines
//! - **Display**: SSD1306 128×64 OLED via I²C (embedded only)

#[cfg(feature = "embedded")]
pub mod display;
pub mod layout;
pub mod menu;
pub mod screens;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions};

/// A draw target backed by a frame buffer that must be pushed to the panel.
pub trait BufferedDisplay: DrawTarget<Color = BinaryColor> + OriginDimensions {
    /// Send the frame buffer to the panel.
    fn present(&mut self) -> Result<(), Self::Error>;
}
