use core::fmt::Write;
use heapless::String;

/// A formatted reading, e.g. `"72.5 F"`.
pub type Reading = String<16>;

/// Maps a raw fixed-point sample onto a display unit:
/// `raw * multiplier / divisor + offset`, evaluated in `f64` in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub multiplier: f64,
    pub divisor: f64,
    pub offset: f64,
    pub suffix: &'static str,
}

/// Milli-degrees Celsius to Fahrenheit: `raw * 1.8 / 1000 + 32`.
pub const FAHRENHEIT: Conversion = Conversion {
    multiplier: 1.8,
    divisor: 1_000.0,
    offset: 32.0,
    suffix: " F",
};

/// Centi-percent to percent: `raw / 100`.
pub const PERCENT: Conversion = Conversion {
    multiplier: 1.0,
    divisor: 100.0,
    offset: 0.0,
    suffix: "%",
};

/// Milli-pascals to hectopascals: `raw / 100000`.
pub const HECTOPASCAL: Conversion = Conversion {
    multiplier: 1.0,
    divisor: 100_000.0,
    offset: 0.0,
    suffix: " hPa",
};

impl Conversion {
    /// Converts `raw` into the target unit.
    pub fn apply(&self, raw: i32) -> f64 {
        raw as f64 * self.multiplier / self.divisor + self.offset
    }
}

/// Formats a raw sample with one fractional digit followed by the unit suffix.
///
/// The digit is rounded from the stored binary value, so `0.45` (held as
/// `0.4500000000000000111`) shows as `0.5` while an exact `1013.25` goes to
/// the even neighbour `1013.2`. Small negatives keep their sign (`-0.0`).
pub fn format_reading(raw: i32, conversion: &Conversion) -> Reading {
    let mut out = Reading::new();
    // The widest i32 input needs 12 bytes ("-3865438.6 F"), so this cannot overflow.
    let _ = write!(out, "{:.1}{}", conversion.apply(raw), conversion.suffix);
    out
}
