//! Hand-drawn 12x12 icons, one per measurement.
//!
//! Each row is stored as a bit mask; bit 11 is the leftmost column.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 12;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 12;

/// A fixed bitmap icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u16; GLYPH_HEIGHT as usize],
}

impl Glyph {
    /// Builds a glyph from row masks. Bits above column 11 are dropped.
    pub const fn new(rows: [u16; GLYPH_HEIGHT as usize]) -> Self {
        let mut masked = rows;
        let mut i = 0;
        while i < masked.len() {
            masked[i] &= (1 << GLYPH_WIDTH) - 1;
            i += 1;
        }
        Glyph { rows: masked }
    }

    /// Whether the cell at `col`, `row` is lit. Cells outside the grid are off.
    pub fn is_lit(&self, col: u32, row: u32) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.rows[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Iterates the lit cells as `(col, row)` offsets, row by row.
    pub fn lit_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            (0..GLYPH_WIDTH)
                .filter(move |&col| self.is_lit(col, row))
                .map(move |col| (col, row))
        })
    }
}

/// Thermometer.
pub const TEMPERATURE: Glyph = Glyph::new([
    0b0000_0110_0000,
    0b0000_1001_0000,
    0b0000_1001_0000,
    0b0000_1011_0000,
    0b0000_1001_0000,
    0b0000_1011_0000,
    0b0000_1111_0000,
    0b0001_1111_1000,
    0b0011_1111_1100,
    0b0011_1111_1100,
    0b0001_1111_1000,
    0b0000_1111_0000,
]);

/// Water droplet.
pub const HUMIDITY: Glyph = Glyph::new([
    0b0000_0110_0000,
    0b0000_0110_0000,
    0b0000_1111_0000,
    0b0000_1111_0000,
    0b0001_1111_1000,
    0b0011_1111_1100,
    0b0011_0111_1100,
    0b0110_1111_1110,
    0b0110_1111_1110,
    0b0011_0111_1100,
    0b0001_1111_1000,
    0b0000_1111_0000,
]);

/// Barometer dial with needle.
pub const PRESSURE: Glyph = Glyph::new([
    0b0000_1111_0000,
    0b0011_0000_1100,
    0b0100_0000_0010,
    0b0100_0000_1010,
    0b1000_0001_0001,
    0b1000_0010_0001,
    0b1000_0110_0001,
    0b1000_0110_0001,
    0b0100_0000_0010,
    0b0100_0000_0010,
    0b0011_0000_1100,
    0b0000_1111_0000,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_cells_match_lit_count() {
        for glyph in [TEMPERATURE, HUMIDITY, PRESSURE] {
            assert_eq!(glyph.lit_cells().count() as u32, glyph.lit_count());
            assert!(glyph.lit_count() > 0);
        }
    }

    #[test]
    fn leftmost_bit_is_column_zero() {
        let mut rows = [0u16; GLYPH_HEIGHT as usize];
        rows[3] = 0b1000_0000_0001;
        let glyph = Glyph::new(rows);
        assert!(glyph.is_lit(0, 3));
        assert!(glyph.is_lit(11, 3));
        assert!(!glyph.is_lit(1, 3));
        assert_eq!(glyph.lit_cells().collect::<Vec<_>>(), [(0, 3), (11, 3)]);
    }

    #[test]
    fn bits_beyond_width_are_dropped() {
        let mut rows = [0u16; GLYPH_HEIGHT as usize];
        rows[0] = 0b1111_0000_0000_0001;
        let glyph = Glyph::new(rows);
        assert_eq!(glyph.lit_count(), 1);
        assert!(!glyph.is_lit(GLYPH_WIDTH, 0));
        assert!(!glyph.is_lit(0, GLYPH_HEIGHT));
    }

    #[test]
    fn glyphs_are_distinct() {
        assert_ne!(TEMPERATURE, HUMIDITY);
        assert_ne!(HUMIDITY, PRESSURE);
        assert_ne!(TEMPERATURE, PRESSURE);
    }
}
