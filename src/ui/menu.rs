//! The fixed set of start-menu tiles.

use crate::config::{MENU_LABEL_DY, MENU_TILE_COUNT};

/// Cursor offset of a label, measured back from its tile centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelOffset {
    pub dx: i32,
    pub dy: i32,
}

impl LabelOffset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// One tile of the start menu.
///
/// Variants are listed in row-major tile order: two per row, four rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEntry {
    Books,
    Settings,
    Recent,
    Search,
    Bookmarks,
    Calibrate,
    About,
    Help,
}

impl MenuEntry {
    /// All entries in tile order.
    pub const ALL: [MenuEntry; MENU_TILE_COUNT] = [
        MenuEntry::Books,
        MenuEntry::Settings,
        MenuEntry::Recent,
        MenuEntry::Search,
        MenuEntry::Bookmarks,
        MenuEntry::Calibrate,
        MenuEntry::About,
        MenuEntry::Help,
    ];

    /// Position of this entry in the grid (row-major).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            MenuEntry::Books => "Books",
            MenuEntry::Settings => "Settings",
            MenuEntry::Recent => "Recent",
            MenuEntry::Search => "Search",
            MenuEntry::Bookmarks => "Bookmarks",
            MenuEntry::Calibrate => "Calibrate",
            MenuEntry::About => "About",
            MenuEntry::Help => "Help",
        }
    }

    /// Hand-tuned offset that roughly centres the label in its tile.
    ///
    /// Tuned for `MENU_FONT` (6 px glyphs).
    pub const fn label_offset(self) -> LabelOffset {
        let dx = match self {
            MenuEntry::Books => 15,
            MenuEntry::Settings => 24,
            MenuEntry::Recent => 18,
            MenuEntry::Search => 18,
            MenuEntry::Bookmarks => 27,
            MenuEntry::Calibrate => 27,
            MenuEntry::About => 15,
            MenuEntry::Help => 12,
        };
        LabelOffset::new(dx, MENU_LABEL_DY)
    }
}
