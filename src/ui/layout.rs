//! Screen geometry.
//!
//! Everything here is derived from the size the display reports, so the
//! same code lays out a 128×64 OLED or a larger panel.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{MENU_COLUMNS, MENU_ROWS, MENU_TILE_COUNT, SPLASH_TITLE_DX, SPLASH_TITLE_DY};
use crate::ui::menu::MenuEntry;

/// The 2×4 tile grid of the menu screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuGrid {
    tile: Size,
}

impl MenuGrid {
    /// Split a display of the given size into equal tiles.
    ///
    /// Any remainder of the integer division is left undrawn at the
    /// right/bottom edge.
    pub fn for_display(display: Size) -> Self {
        Self {
            tile: Size::new(display.width / MENU_COLUMNS, display.height / MENU_ROWS),
        }
    }

    pub fn tile_size(&self) -> Size {
        self.tile
    }

    /// Rectangle of the tile at `index` (row-major), or `None` past the last tile.
    pub fn tile(&self, index: usize) -> Option<Rectangle> {
        if index < MENU_TILE_COUNT {
            Some(self.tile_at(index))
        } else {
            None
        }
    }

    /// All tiles in entry order.
    pub fn tiles(&self) -> impl Iterator<Item = Rectangle> {
        let grid = *self;
        (0..MENU_TILE_COUNT).map(move |index| grid.tile_at(index))
    }

    /// Top-left text cursor for an entry's label.
    ///
    /// Tile centre minus the entry's hand-tuned offset, kept inside the tile.
    pub fn label_position(&self, entry: MenuEntry) -> Point {
        let tile = self.tile_at(entry.index());
        let offset = entry.label_offset();
        let centre = half(self.tile);
        let cursor = Point::new(
            tile.top_left.x.saturating_add(centre.x).saturating_sub(offset.dx),
            tile.top_left.y.saturating_add(centre.y).saturating_sub(offset.dy),
        );
        clamp_into(&tile, cursor)
    }

    fn tile_at(&self, index: usize) -> Rectangle {
        let col = index as u32 % MENU_COLUMNS;
        let row = index as u32 / MENU_COLUMNS;
        let top_left = Point::new(
            coord(col.saturating_mul(self.tile.width)),
            coord(row.saturating_mul(self.tile.height)),
        );
        Rectangle::new(top_left, self.tile)
    }
}

/// Top-left text cursor for the splash title on a display of the given size.
pub fn title_position(display: Size) -> Point {
    let area = Rectangle::new(Point::zero(), display);
    clamp_into(
        &area,
        half(display) - Point::new(SPLASH_TITLE_DX, SPLASH_TITLE_DY),
    )
}

fn half(size: Size) -> Point {
    Point::new(coord(size.width / 2), coord(size.height / 2))
}

/// Pixel extent as a coordinate, saturating at `i32::MAX`.
fn coord(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

/// Pull `point` onto the nearest pixel of `area`.
///
/// An empty area collapses to its top-left corner.
fn clamp_into(area: &Rectangle, point: Point) -> Point {
    let min = area.top_left;
    let max_x = min.x.saturating_add(coord(area.size.width.saturating_sub(1)));
    let max_y = min.y.saturating_add(coord(area.size.height.saturating_sub(1)));
    Point::new(point.x.clamp(min.x, max_x), point.y.clamp(min.y, max_y))
}
