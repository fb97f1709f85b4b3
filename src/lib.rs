//! HDC20xx Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the Texas Instruments
//! HDC20xx (HDC2010, HDC2080) temperature and humidity sensor, built on top of
//! the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Temperature/humidity readings, resolution, measurement mode and rate
//! - Threshold and data-ready interrupts, peak (max) registers, offset adjustment
//! - Optional logging support via `defmt`
//!
//! Every call goes to the device; no register content is cached in the driver.
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for bus access
//! - [`DelayNs`] for the soft reset settle time
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and traces register access
//!
//! # Example
//!
//! ```no_run
//! # use embedded_hal::{delay::DelayNs, i2c::I2c};
//! use hdc20xx_sensor::{Hdc20xx, OutputRate, Resolution, DEFAULT_ADDRESS};
//!
//! # fn demo<I: I2c, D: DelayNs>(i2c: I, delay: D) -> Result<(), hdc20xx_sensor::HdcError<I::Error>> {
//! let mut sensor = Hdc20xx::new(i2c, delay, DEFAULT_ADDRESS);
//! sensor.begin()?;
//! sensor.reset()?;
//! sensor.set_temperature_resolution(Resolution::FourteenBit)?;
//! sensor.set_rate(OutputRate::OneHz)?;
//! let reading = sensor.read()?;
//! # let _ = reading;
//! # Ok(())
//! # }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod convert;
pub mod error;
pub mod hdc20xx;
pub mod register;

pub use error::HdcError;
pub use hdc20xx::{
    ALTERNATE_ADDRESS, DEFAULT_ADDRESS, DEVICE_ID, Hdc20xx, MANUFACTURER_ID, RESET_SETTLE_MS,
    Reading,
};
pub use register::{
    InterruptMode, InterruptPolarity, InterruptStatus, MeasurementMode, OutputRate, Resolution,
};
