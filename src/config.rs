//! Application-wide constants and compile-time configuration.
//!
//! Screen text, fonts, colours and timing live here so they can be
//! tuned in one place.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::BinaryColor;

// Colours

/// Colour the screen is cleared to.
pub const BACKGROUND: BinaryColor = BinaryColor::Off;

/// Colour used for tile borders and text.
pub const INK: BinaryColor = BinaryColor::On;

// Splash screen

/// Title shown on the splash screen.
pub const SPLASH_TITLE: &str = "M5Reader";

/// Large title font.
pub const SPLASH_FONT: &MonoFont<'static> = &FONT_10X20;

/// How long the splash stays up before the menu is drawn (ms).
pub const SPLASH_HOLD_MS: u32 = 2000;

/// Title cursor offset from the display centre, in pixels.
/// Half of the rendered title size in `SPLASH_FONT` (8 glyphs × 10 px, 20 px tall).
pub const SPLASH_TITLE_DX: i32 = 40;
pub const SPLASH_TITLE_DY: i32 = 10;

// Menu screen

/// Tile grid shape.
pub const MENU_COLUMNS: u32 = 2;
pub const MENU_ROWS: u32 = 4;

/// Number of tiles on the menu screen.
pub const MENU_TILE_COUNT: usize = (MENU_COLUMNS * MENU_ROWS) as usize;

/// Label font.
pub const MENU_FONT: &MonoFont<'static> = &FONT_6X10;

/// Vertical label offset from the tile centre (half the `MENU_FONT` height).
pub const MENU_LABEL_DY: i32 = 5;

/// Tile border thickness (px).
pub const MENU_BORDER_WIDTH: u32 = 1;

// Hardware (nRF52840-DK defaults)
//
// Pin choices are made in `main.rs`; adjust for your custom PCB.
//
//   I²C SDA  → P0.26
//   I²C SCL  → P0.27
//
// The panel is an SSD1306 128×64 at the default 0x3C address.
