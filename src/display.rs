//! SSD1306 OLED panel behind a small capability trait.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::DISPLAY_ADDRESS;

/// A buffered monochrome panel: draw into the framebuffer, then flush it.
pub trait Panel: DrawTarget<Color = BinaryColor> {
    /// Blanks the framebuffer without touching the glass.
    fn clear_buffer(&mut self);

    /// Pushes the framebuffer to the glass.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Blanks both the framebuffer and the glass.
    fn clear_display(&mut self) -> Result<(), Self::Error> {
        self.clear_buffer();
        self.flush()
    }
}

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Create the SSD1306 driver and run its init sequence.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, <Display<I2C> as DrawTarget>::Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init()?;
    Ok(display)
}

impl<I2C> Panel for Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear_buffer(&mut self) {
        Ssd1306::clear_buffer(self);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ssd1306::flush(self)
    }
}
