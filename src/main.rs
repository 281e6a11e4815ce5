#![no_std]
#![no_main]

use bsp::entry;
use defmt::*;
use defmt_rtt as _;
use embedded_hal::digital::OutputPin;
use panic_probe as _;
use rp_pico::hal::Timer;

// Provide an alias for our BSP so we can switch targets quickly.
use rp_pico as bsp;

use bsp::hal::{
    clocks::{init_clocks_and_plls, Clock},
    pac,
    watchdog::Watchdog,
};
use rp_pico::hal;
use rp_pico::hal::fugit::RateExtU32;
use rp_pico::hal::gpio::{FunctionI2C, Pin, PullUp};
use weather_station::config::I2C_FREQUENCY_KHZ;
use weather_station::display;
use weather_station::error::Error;
use weather_station::sensors::Bme280Sensor;
use weather_station::station::Station;

#[entry]
fn main() -> ! {
    info!("Weather Station Starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Power light
    let mut power_led = pins.gpio15.into_push_pull_output();
    let _ = power_led.set_high();

    // Sensor bus: I2C0 on GPIO0 (SDA) / GPIO1 (SCL)
    let sensor_sda: Pin<_, FunctionI2C, PullUp> = pins.gpio0.reconfigure();
    let sensor_scl: Pin<_, FunctionI2C, PullUp> = pins.gpio1.reconfigure();
    let sensor_i2c = hal::I2C::i2c0(
        pac.I2C0,
        sensor_sda,
        sensor_scl,
        I2C_FREQUENCY_KHZ.kHz(),
        &mut pac.RESETS,
        clocks.system_clock.freq(),
    );

    // Display bus: I2C1 on GPIO6 (SDA) / GPIO7 (SCL)
    let display_sda: Pin<_, FunctionI2C, PullUp> = pins.gpio6.reconfigure();
    let display_scl: Pin<_, FunctionI2C, PullUp> = pins.gpio7.reconfigure();
    let display_i2c = hal::I2C::i2c1(
        pac.I2C1,
        display_sda,
        display_scl,
        I2C_FREQUENCY_KHZ.kHz(),
        &mut pac.RESETS,
        clocks.system_clock.freq(),
    );

    let sensor = Bme280Sensor::new(sensor_i2c, timer);
    let panel = match display::init(display_i2c) {
        Ok(panel) => panel,
        Err(_) => {
            // Nothing to show the error on; park with the power LED lit.
            error!("SSD1306 init failed");
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    let mut station = Station::new(sensor, panel, timer);

    if station.setup_sensor() {
        info!("BME280 detected");
    } else {
        warn!("BME280 not detected");
    }

    if let Err(e) = station.setup_display() {
        warn!("display setup failed: {}", e);
    }

    info!("Weather Station Ready");

    station.run(|report| {
        for quantity in report.failed.iter() {
            warn!("read failed: {}", Error::Sensor(*quantity));
        }
        debug!(
            "{} | {} | {}",
            report.readings[0].as_str(),
            report.readings[1].as_str(),
            report.readings[2].as_str()
        );
        match report.altitude {
            Some(altitude) => info!("Altitude: {} m", altitude),
            None => warn!("altitude read failed"),
        }
        if let Err(e) = report.render {
            warn!("frame not shown: {}", e);
        }
    })
}
