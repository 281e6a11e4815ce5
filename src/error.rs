//! Unified error type for the station.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.

use crate::sensors::Quantity;

/// Top-level error reported by the station loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The sensor did not answer a read for the given quantity.
    Sensor(Quantity),

    /// A draw or flush on the display bus failed.
    Display,

    /// A glyph was placed outside the panel.
    OutOfBounds,
}
