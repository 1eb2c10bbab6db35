//! Splash and menu screen rendering.
//!
//! The `draw_*` functions only touch the frame buffer. The `show_*`
//! functions also push the frame to the panel, and for the splash,
//! hold it on screen for `SPLASH_HOLD_MS`.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::delay::DelayNs;

use crate::config::{
    BACKGROUND, INK, MENU_BORDER_WIDTH, MENU_FONT, SPLASH_FONT, SPLASH_HOLD_MS, SPLASH_TITLE,
};
use crate::error::Error;
use crate::ui::layout::{self, MenuGrid};
use crate::ui::menu::MenuEntry;
use crate::ui::BufferedDisplay;

type Label = Text<'static, MonoTextStyle<'static, BinaryColor>>;

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(INK)
        .background_color(BACKGROUND)
        .build()
}

fn border_style() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyleBuilder::new()
        .stroke_color(INK)
        .stroke_width(MENU_BORDER_WIDTH)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

/// The splash title, positioned for a display of the given size.
pub fn title_text(display: Size) -> Label {
    Text::with_baseline(
        SPLASH_TITLE,
        layout::title_position(display),
        text_style(SPLASH_FONT),
        Baseline::Top,
    )
}

/// An entry's label, positioned inside its tile.
pub fn label_text(grid: &MenuGrid, entry: MenuEntry) -> Label {
    Text::with_baseline(
        entry.label(),
        grid.label_position(entry),
        text_style(MENU_FONT),
        Baseline::Top,
    )
}

/// Render the splash screen into the frame buffer.
pub fn draw_splash<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    display.clear(BACKGROUND)?;
    title_text(display.size()).draw(display)?;
    Ok(())
}

/// Render the 2×4 menu into the frame buffer.
pub fn draw_menu<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    display.clear(BACKGROUND)?;

    let grid = MenuGrid::for_display(display.size());
    for (entry, tile) in MenuEntry::ALL.into_iter().zip(grid.tiles()) {
        tile.into_styled(border_style()).draw(display)?;
        label_text(&grid, entry).draw(display)?;
    }

    Ok(())
}

/// Draw and present the splash, then block for `SPLASH_HOLD_MS`.
pub fn show_splash<D, T>(display: &mut D, delay: &mut T) -> Result<(), Error>
where
    D: BufferedDisplay,
    T: DelayNs,
{
    draw_splash(display).map_err(|_| Error::Draw)?;
    display.present().map_err(|_| Error::Flush)?;
    delay.delay_ms(SPLASH_HOLD_MS);
    Ok(())
}

/// Draw and present the menu.
pub fn show_menu<D>(display: &mut D) -> Result<(), Error>
where
    D: BufferedDisplay,
{
    draw_menu(display).map_err(|_| Error::Draw)?;
    display.present().map_err(|_| Error::Flush)
}
