//! Compile-time configuration.
//!
//! Pin assignments, bus parameters, timing and screen layout live here so
//! they can be tuned in one place.

// GPIO pin assignments (Raspberry Pi Pico)
//
// The concrete `rp_pico::Pins` fields are picked in `main.rs`; adjust both
// together when rewiring.
//
//   BME280  SDA   → GPIO0 (I2C0)
//   BME280  SCL   → GPIO1 (I2C0)
//   SSD1306 SDA   → GPIO6 (I2C1)
//   SSD1306 SCL   → GPIO7 (I2C1)
//   Power LED     → GPIO15

/// Clock rate for both I²C buses (kHz).
pub const I2C_FREQUENCY_KHZ: u32 = 400;

/// SSD1306 I²C address.
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// Panel resolution.
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Time between two sensor polls (ms).
pub const POLL_INTERVAL_MS: u32 = 10_000;

/// Sea-level reference pressure used for the altitude estimate (Pa).
pub const SEA_LEVEL_PRESSURE_PA: f32 = 101_325.0;

/// Static header drawn once at start-up.
pub const TITLE: &str = "Weather Station";
pub const TITLE_X: i32 = 0;
pub const TITLE_Y: i32 = 0;

/// Shown in place of a reading until the sensor has delivered one.
pub const PLACEHOLDER: &str = "--";

/// Readings are printed this far right of the left edge, next to the glyph.
pub const READING_X: i32 = 14;

/// Each measurement owns a horizontal band of the screen.
pub const ROW_HEIGHT: u32 = 16;

/// Top edge of the glyph for each row: temperature, humidity, pressure.
pub const TEMPERATURE_ROW_Y: i32 = 16;
pub const HUMIDITY_ROW_Y: i32 = 32;
pub const PRESSURE_ROW_Y: i32 = 48;

/// Text is nudged down inside its row to line up with the glyph.
pub const TEMPERATURE_TEXT_Y: i32 = 18;
pub const HUMIDITY_TEXT_Y: i32 = 34;
pub const PRESSURE_TEXT_Y: i32 = 51;
