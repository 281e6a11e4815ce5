//! The polling loop: sensor → formatter → glyphs and text → panel.
//!
//! `Station` owns the sensor, the panel and the delay provider, so there
//! are no global device handles. The sleep goes through `DelayNs`, which
//! lets tests drive cycles with a fake clock.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;

use crate::config::{
    HUMIDITY_ROW_Y, HUMIDITY_TEXT_Y, PLACEHOLDER, POLL_INTERVAL_MS, PRESSURE_ROW_Y, PRESSURE_TEXT_Y,
    READING_X, ROW_HEIGHT, TEMPERATURE_ROW_Y, TEMPERATURE_TEXT_Y, TITLE, TITLE_X, TITLE_Y,
};
use crate::display::Panel;
use crate::error::Error;
use crate::glyphs::{self, Glyph};
use crate::rendering::{clear_region, draw_glyph, draw_text, RenderError};
use crate::sensors::{EnvironmentSensor, Quantity};
use crate::units::{format_reading, Conversion, Reading, FAHRENHEIT, HECTOPASCAL, PERCENT};

/// Start-up progress. `Polling` is terminal.
///
/// Bus bring-up happens before a `Station` exists, so the first state a
/// station can be in is `BusesConfigured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StationState {
    BusesConfigured,
    SensorReady,
    DisplayReady,
    Polling,
}

/// Where and how a quantity is shown.
pub struct Row {
    pub glyph: Glyph,
    pub glyph_origin: Point,
    pub text_origin: Point,
    pub conversion: Conversion,
}

impl Quantity {
    pub fn row(self) -> Row {
        match self {
            Quantity::Temperature => Row {
                glyph: glyphs::TEMPERATURE,
                glyph_origin: Point::new(0, TEMPERATURE_ROW_Y),
                text_origin: Point::new(READING_X, TEMPERATURE_TEXT_Y),
                conversion: FAHRENHEIT,
            },
            Quantity::Humidity => Row {
                glyph: glyphs::HUMIDITY,
                glyph_origin: Point::new(0, HUMIDITY_ROW_Y),
                text_origin: Point::new(READING_X, HUMIDITY_TEXT_Y),
                conversion: PERCENT,
            },
            Quantity::Pressure => Row {
                glyph: glyphs::PRESSURE,
                glyph_origin: Point::new(0, PRESSURE_ROW_Y),
                text_origin: Point::new(READING_X, PRESSURE_TEXT_Y),
                conversion: HECTOPASCAL,
            },
        }
    }

    fn index(self) -> usize {
        match self {
            Quantity::Temperature => 0,
            Quantity::Humidity => 1,
            Quantity::Pressure => 2,
        }
    }
}

impl Row {
    /// Full-width band owned by this row, blanked before each redraw.
    pub fn band(&self, width: u32) -> Rectangle {
        Rectangle::new(
            Point::new(0, self.glyph_origin.y),
            Size::new(width, ROW_HEIGHT),
        )
    }
}

/// What one polling cycle saw and drew.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// Text drawn per row, in `Quantity::ALL` order.
    pub readings: [Reading; 3],
    /// Quantities whose read failed this cycle.
    pub failed: heapless::Vec<Quantity, 3>,
    /// `None` when the altitude read failed.
    pub altitude: Option<f32>,
    /// Outcome of drawing and flushing the frame.
    pub render: Result<(), Error>,
}

impl CycleReport {
    pub fn reading(&self, quantity: Quantity) -> &str {
        self.readings[quantity.index()].as_str()
    }
}

/// The weather station: one sensor, one panel, one clock.
pub struct Station<S, P, D> {
    sensor: S,
    panel: P,
    delay: D,
    state: StationState,
    last_good: [Option<i32>; 3],
}

impl<S, P, D> Station<S, P, D>
where
    S: EnvironmentSensor,
    P: Panel,
    D: DelayNs,
{
    /// Takes ownership of already configured bus devices.
    pub fn new(sensor: S, panel: P, delay: D) -> Self {
        Self {
            sensor,
            panel,
            delay,
            state: StationState::BusesConfigured,
            last_good: [None; 3],
        }
    }

    pub fn state(&self) -> StationState {
        self.state
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Checks whether the sensor answered. A missing sensor is not fatal:
    /// the station moves on either way and the caller decides what to log.
    /// returns whether the sensor is connected
    pub fn setup_sensor(&mut self) -> bool {
        let connected = self.sensor.connected();
        self.state = StationState::SensorReady;
        connected
    }

    /// Clears the panel and draws the title.
    pub fn setup_display(&mut self) -> Result<(), Error> {
        self.panel.clear_display().map_err(|_| Error::Display)?;
        draw_text(&mut self.panel, Point::new(TITLE_X, TITLE_Y), TITLE)
            .map_err(|_| Error::Display)?;
        self.panel.flush().map_err(|_| Error::Display)?;
        self.state = StationState::DisplayReady;
        Ok(())
    }

    /// Samples the sensor, reads all three quantities and the altitude, then
    /// draws and flushes.
    ///
    /// A failed read keeps the last good value on screen; before the first
    /// good value the row shows a placeholder. Every read happens before the
    /// first draw, so a display failure only shows up in `render`.
    pub fn poll_once(&mut self) -> CycleReport {
        self.state = StationState::Polling;

        let sampled = self.sensor.refresh().is_ok();
        let mut failed = heapless::Vec::new();
        for quantity in Quantity::ALL {
            let raw = if sampled { self.sensor.read(quantity).ok() } else { None };
            match raw {
                Some(raw) => self.last_good[quantity.index()] = Some(raw),
                None => {
                    // Capacity matches Quantity::ALL.
                    let _ = failed.push(quantity);
                }
            }
        }
        let altitude = if sampled { self.sensor.read_altitude().ok() } else { None };

        let readings = Quantity::ALL.map(|quantity| self.reading_text(quantity));
        let render = self.render(&readings);

        CycleReport {
            readings,
            failed,
            altitude,
            render,
        }
    }

    fn reading_text(&self, quantity: Quantity) -> Reading {
        match self.last_good[quantity.index()] {
            Some(raw) => format_reading(raw, &quantity.row().conversion),
            None => {
                let mut placeholder = Reading::new();
                let _ = placeholder.push_str(PLACEHOLDER);
                placeholder
            }
        }
    }

    fn render(&mut self, readings: &[Reading; 3]) -> Result<(), Error> {
        let width = self.panel.bounding_box().size.width;
        for (quantity, text) in Quantity::ALL.into_iter().zip(readings) {
            let row = quantity.row();
            clear_region(&mut self.panel, &row.band(width)).map_err(|_| Error::Display)?;
            draw_glyph(&mut self.panel, row.glyph_origin, &row.glyph).map_err(|e| match e {
                RenderError::OutOfBounds => Error::OutOfBounds,
                RenderError::Draw(_) => Error::Display,
            })?;
            draw_text(&mut self.panel, row.text_origin, text).map_err(|_| Error::Display)?;
        }
        self.panel.flush().map_err(|_| Error::Display)
    }

    /// One loop iteration: poll, then sleep for the poll interval.
    pub fn tick(&mut self) -> CycleReport {
        let report = self.poll_once();
        self.delay.delay_ms(POLL_INTERVAL_MS);
        report
    }

    /// Runs the polling loop forever, handing each cycle's outcome to `on_cycle`.
    pub fn run<F>(&mut self, mut on_cycle: F) -> !
    where
        F: FnMut(CycleReport),
    {
        loop {
            let report = self.tick();
            on_cycle(report);
        }
    }
}
