use bme280::i2c::BME280;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::SEA_LEVEL_PRESSURE_PA;

/// The three quantities shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    Temperature,
    Humidity,
    Pressure,
}

impl Quantity {
    /// Screen order, top to bottom.
    pub const ALL: [Quantity; 3] = [Quantity::Temperature, Quantity::Humidity, Quantity::Pressure];
}

/// Read capability of an environmental sensor.
///
/// Values are fixed point:
/// - temperature in milli-degrees Celsius
/// - humidity in centi-percent
/// - pressure in milli-pascals (`raw / 100_000` is hPa)
pub trait EnvironmentSensor {
    type Error;

    /// Whether the chip answered during start-up.
    fn connected(&self) -> bool;

    /// Takes a new sample. The reads below return values from the latest
    /// sample, so one cycle sees one consistent set of readings.
    fn refresh(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read_temperature(&mut self) -> Result<i32, Self::Error>;

    fn read_humidity(&mut self) -> Result<i32, Self::Error>;

    fn read_pressure(&mut self) -> Result<i32, Self::Error>;

    /// Altitude above sea level in metres.
    fn read_altitude(&mut self) -> Result<f32, Self::Error>;

    /// Reads one of the displayed quantities.
    fn read(&mut self, quantity: Quantity) -> Result<i32, Self::Error> {
        match quantity {
            Quantity::Temperature => self.read_temperature(),
            Quantity::Humidity => self.read_humidity(),
            Quantity::Pressure => self.read_pressure(),
        }
    }
}

/// Estimates altitude from pressure with the international barometric formula.
/// param pressure_pa: absolute pressure in pascals
/// returns metres above the sea-level reference
pub fn altitude_from_pressure(pressure_pa: f32) -> f32 {
    44_330.0 * (1.0 - libm::powf(pressure_pa / SEA_LEVEL_PRESSURE_PA, 1.0 / 5.255))
}

#[derive(Debug)]
pub enum SensorError<E> {
    /// The driver failed to take or compensate a measurement.
    Bus(bme280::Error<E>),
    /// No successful `refresh` since start-up or since the last failed one.
    NoSample,
}

impl<E> From<bme280::Error<E>> for SensorError<E> {
    fn from(e: bme280::Error<E>) -> Self {
        SensorError::Bus(e)
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    celsius: f32,
    humidity: f32,
    pascals: f32,
}

/// BME280 on an I²C bus.
///
/// The chip is put through its init sequence once in `new`. Each `refresh`
/// runs one forced measurement; reads are served from it without bus traffic.
pub struct Bme280Sensor<I2C, D> {
    bme: BME280<I2C>,
    delay: D,
    connected: bool,
    latest: Option<Sample>,
}

impl<I2C, D> Bme280Sensor<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Sets up a BME280 at the primary address (0x76).
    /// A failed init is recorded, not returned: the station keeps running.
    pub fn new(i2c: I2C, mut delay: D) -> Self {
        let mut bme = BME280::new_primary(i2c);
        let connected = bme.init(&mut delay).is_ok();
        Self {
            bme,
            delay,
            connected,
            latest: None,
        }
    }

    fn sample(&self) -> Result<Sample, SensorError<I2C::Error>> {
        self.latest.ok_or(SensorError::NoSample)
    }
}

impl<I2C, D> EnvironmentSensor for Bme280Sensor<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = SensorError<I2C::Error>;

    fn connected(&self) -> bool {
        self.connected
    }

    fn refresh(&mut self) -> Result<(), Self::Error> {
        // A stale sample must not outlive a failed measurement.
        self.latest = None;
        let m = self.bme.measure(&mut self.delay)?;
        self.latest = Some(Sample {
            celsius: m.temperature,
            humidity: m.humidity,
            pascals: m.pressure,
        });
        Ok(())
    }

    fn read_temperature(&mut self) -> Result<i32, Self::Error> {
        Ok(libm::roundf(self.sample()?.celsius * 1_000.0) as i32)
    }

    fn read_humidity(&mut self) -> Result<i32, Self::Error> {
        Ok(libm::roundf(self.sample()?.humidity * 100.0) as i32)
    }

    fn read_pressure(&mut self) -> Result<i32, Self::Error> {
        Ok(libm::roundf(self.sample()?.pascals * 1_000.0) as i32)
    }

    fn read_altitude(&mut self) -> Result<f32, Self::Error> {
        Ok(altitude_from_pressure(self.sample()?.pascals))
    }
}
