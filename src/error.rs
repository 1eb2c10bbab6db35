//! Unified error type for the firmware.
//!
//! Driver errors are collapsed into fixed variants so the enum stays
//! `Copy` and cheap to log with defmt.

/// Top-level error type used by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The display did not accept its init sequence.
    DisplayInit,

    /// Drawing into the frame buffer failed.
    Draw,

    /// Sending the frame buffer to the panel failed.
    Flush,
}
