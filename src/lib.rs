#![cfg_attr(not(test), no_std)]

//! # weather-station
//! ## A Pico weather station in Rust
//!
//! Features:
//! - BME280 temperature, humidity and pressure readings
//! - 128x64 SSD1306 OLED with one icon and one reading per measurement
//! - Altitude estimate on the debug log
//! - Fixed ten second polling interval
//!
//! The firmware entry point lives in `main.rs` (feature `embedded`); this
//! library holds everything that can be tested on the host.

pub mod config;
pub mod display;
pub mod error;
pub mod glyphs;
pub mod rendering;
pub mod sensors;
pub mod station;
pub mod units;
