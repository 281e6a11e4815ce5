use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::glyphs::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Why a draw did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// Part of the glyph would land outside the target.
    OutOfBounds,
    /// The draw target itself failed.
    Draw(E),
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// The area a glyph covers when drawn at `origin`.
pub fn glyph_area(origin: Point) -> Rectangle {
    Rectangle::new(origin, Size::new(GLYPH_WIDTH, GLYPH_HEIGHT))
}

/// Sets every lit cell of `glyph` at `origin` + cell offset.
/// Unlit cells are left as they are and nothing is flushed.
/// param origin: top-left corner of the glyph
/// returns OutOfBounds, without drawing, if any cell would fall off the target
pub fn draw_glyph<D>(target: &mut D, origin: Point, glyph: &Glyph) -> Result<(), RenderError<D::Error>>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let bounds = target.bounding_box();
    let area = glyph_area(origin);
    let inside = match area.bottom_right() {
        Some(bottom_right) => bounds.contains(area.top_left) && bounds.contains(bottom_right),
        None => false,
    };
    if !inside {
        return Err(RenderError::OutOfBounds);
    }

    let pixels = glyph.lit_cells().map(|(col, row)| {
        Pixel(origin + Point::new(col as i32, row as i32), BinaryColor::On)
    });
    target.draw_iter(pixels).map_err(RenderError::Draw)
}

/// Writes `text` with its top-left corner at `origin`, like a text cursor.
pub fn draw_text<D>(target: &mut D, origin: Point, text: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, origin, text_style(), Baseline::Top).draw(target)?;
    Ok(())
}

/// Blanks a rectangle so shorter text does not leave old digits behind.
pub fn clear_region<D>(target: &mut D, area: &Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.fill_solid(area, BinaryColor::Off)
}
