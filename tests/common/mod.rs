//! Fakes for driving the station on the host.

#![allow(dead_code)]

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use weather_station::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use weather_station::display::Panel;
use weather_station::sensors::EnvironmentSensor;

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

/// Sensor returning canned values; `None` makes that read fail.
#[derive(Debug, Clone)]
pub struct FakeSensor {
    pub connected: bool,
    /// Number of samples taken.
    pub refreshes: usize,
    pub refresh_fails: bool,
    pub temperature: Option<i32>,
    pub humidity: Option<i32>,
    pub pressure: Option<i32>,
    pub altitude: Option<f32>,
}

impl FakeSensor {
    pub fn new(temperature: i32, humidity: i32, pressure: i32) -> Self {
        Self {
            connected: true,
            refreshes: 0,
            refresh_fails: false,
            temperature: Some(temperature),
            humidity: Some(humidity),
            pressure: Some(pressure),
            altitude: Some(12.5),
        }
    }

    pub fn dead() -> Self {
        Self {
            connected: false,
            refreshes: 0,
            refresh_fails: false,
            temperature: None,
            humidity: None,
            pressure: None,
            altitude: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

impl EnvironmentSensor for FakeSensor {
    type Error = BusFault;

    fn connected(&self) -> bool {
        self.connected
    }

    fn refresh(&mut self) -> Result<(), BusFault> {
        self.refreshes += 1;
        if self.refresh_fails {
            return Err(BusFault);
        }
        Ok(())
    }

    fn read_temperature(&mut self) -> Result<i32, BusFault> {
        self.temperature.ok_or(BusFault)
    }

    fn read_humidity(&mut self) -> Result<i32, BusFault> {
        self.humidity.ok_or(BusFault)
    }

    fn read_pressure(&mut self) -> Result<i32, BusFault> {
        self.pressure.ok_or(BusFault)
    }

    fn read_altitude(&mut self) -> Result<f32, BusFault> {
        self.altitude.ok_or(BusFault)
    }
}

/// 128x64 in-memory panel that counts flushes.
pub struct FakePanel {
    pub buffer: [[bool; W]; H],
    pub glass: [[bool; W]; H],
    pub flushes: usize,
    pub fail_draws: bool,
}

impl FakePanel {
    pub fn new() -> Self {
        Self {
            buffer: [[false; W]; H],
            glass: [[false; W]; H],
            flushes: 0,
            fail_draws: false,
        }
    }

    pub fn lit_in(&self, x: core::ops::Range<usize>, y: core::ops::Range<usize>) -> usize {
        self.buffer[y]
            .iter()
            .map(|row| row[x.clone()].iter().filter(|&&on| on).count())
            .sum()
    }

    pub fn lit(&self) -> usize {
        self.lit_in(0..W, 0..H)
    }
}

impl OriginDimensions for FakePanel {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for FakePanel {
    type Color = BinaryColor;
    type Error = BusFault;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), BusFault>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        if self.fail_draws {
            return Err(BusFault);
        }
        for Pixel(p, color) in pixels {
            if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                self.buffer[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Panel for FakePanel {
    fn clear_buffer(&mut self) {
        self.buffer = [[false; W]; H];
    }

    fn flush(&mut self) -> Result<(), BusFault> {
        if self.fail_draws {
            return Err(BusFault);
        }
        self.glass = self.buffer;
        self.flushes += 1;
        Ok(())
    }
}

/// Delay that only records how long it was asked to sleep.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}
