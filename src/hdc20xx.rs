use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::convert;
use crate::error::HdcError;
use crate::register::{
    DRDY_INTERRUPT, Field, FieldValue, HEATER, HumidityResolution, INTERRUPT_ENABLE,
    InterruptMode, InterruptPolarity, InterruptStatus, MEASUREMENT_TRIGGER, MeasurementMode,
    OutputRate, Register, Resolution, SOFT_RESET, THRESHOLD_INTERRUPTS, TemperatureResolution,
};

/// I2C address with the ADDR pin tied to GND.
pub const DEFAULT_ADDRESS: u8 = 0x40;
/// I2C address with the ADDR pin tied to VDD.
pub const ALTERNATE_ADDRESS: u8 = 0x41;

/// Texas Instruments manufacturer ID ("TI").
pub const MANUFACTURER_ID: u16 = 0x5449;
/// Device ID shared by the HDC2010 and HDC2080.
pub const DEVICE_ID: u16 = 0x07D0;

/// Time (in milliseconds) the device needs after a soft reset before it accepts commands.
pub const RESET_SETTLE_MS: u32 = 50;

/// Driver for the HDC20xx temperature and humidity sensor.
pub struct Hdc20xx<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

/// Reading returned by the HDC20xx sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl<I2C, DELAY, E> Hdc20xx<I2C, DELAY>
where
    I2C: I2c<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the HDC20xx driver.
    ///
    /// No bus traffic happens here; call [`Hdc20xx::begin`] to check that the
    /// device is present.
    ///
    /// # Arguments
    ///
    /// * `i2c` - An initialized I2C bus implementing the `I2c` trait.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `address` - 7-bit bus address, usually [`DEFAULT_ADDRESS`] or [`ALTERNATE_ADDRESS`].
    pub fn new(i2c: I2C, delay: DELAY, address: u8) -> Self {
        Hdc20xx {
            i2c,
            delay,
            address,
        }
    }

    /// The 7-bit bus address this handle talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Destroys the driver and returns the bus and the delay provider.
    pub fn release(self) -> (I2C, DELAY) {
        (self.i2c, self.delay)
    }

    /// Checks that an HDC20xx answers at the configured address.
    ///
    /// Only reads the ID registers, so it can be called any number of times.
    pub fn begin(&mut self) -> Result<(), HdcError<E>> {
        self.check_identity()
    }

    /// Reads temperature and humidity from the last completed measurement.
    pub fn read(&mut self) -> Result<Reading, HdcError<E>> {
        Ok(Reading {
            temperature: self.read_temperature()?,
            relative_humidity: self.read_humidity()?,
        })
    }

    /// Reads the temperature in degrees Celsius.
    ///
    /// The two lowest bits of the low byte are reserved and ignored.
    pub fn read_temperature(&mut self) -> Result<f32, HdcError<E>> {
        let low = self.read_register(Register::TempLow)? & 0xFC;
        let high = self.read_register(Register::TempHigh)?;
        Ok(convert::temperature_from_raw(u16::from_be_bytes([high, low])))
    }

    /// Reads the relative humidity in percent.
    pub fn read_humidity(&mut self) -> Result<f32, HdcError<E>> {
        let low = self.read_register(Register::HumidityLow)?;
        let high = self.read_register(Register::HumidityHigh)?;
        Ok(convert::humidity_from_raw(u16::from_be_bytes([high, low])))
    }

    pub fn enable_heater(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(HEATER, true)
    }

    pub fn disable_heater(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(HEATER, false)
    }

    /// Sets the low temperature threshold, clamped to -40..=125 °C.
    pub fn set_low_temperature(&mut self, celsius: f32) -> Result<(), HdcError<E>> {
        self.write_register(
            Register::TempThresholdLow,
            convert::temperature_to_threshold(celsius),
        )
    }

    /// Sets the high temperature threshold, clamped to -40..=125 °C.
    pub fn set_high_temperature(&mut self, celsius: f32) -> Result<(), HdcError<E>> {
        self.write_register(
            Register::TempThresholdHigh,
            convert::temperature_to_threshold(celsius),
        )
    }

    /// Sets the low humidity threshold, clamped to 0..=100 %RH.
    pub fn set_low_humidity(&mut self, percent: f32) -> Result<(), HdcError<E>> {
        self.write_register(
            Register::HumidityThresholdLow,
            convert::humidity_to_threshold(percent),
        )
    }

    /// Sets the high humidity threshold, clamped to 0..=100 %RH.
    pub fn set_high_humidity(&mut self, percent: f32) -> Result<(), HdcError<E>> {
        self.write_register(
            Register::HumidityThresholdHigh,
            convert::humidity_to_threshold(percent),
        )
    }

    pub fn read_low_temperature_threshold(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::TempThresholdLow)?;
        Ok(convert::temperature_from_threshold(raw))
    }

    pub fn read_high_temperature_threshold(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::TempThresholdHigh)?;
        Ok(convert::temperature_from_threshold(raw))
    }

    pub fn read_low_humidity_threshold(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::HumidityThresholdLow)?;
        Ok(convert::humidity_from_threshold(raw))
    }

    pub fn read_high_humidity_threshold(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::HumidityThresholdHigh)?;
        Ok(convert::humidity_from_threshold(raw))
    }

    pub fn set_temperature_resolution(
        &mut self,
        resolution: Resolution,
    ) -> Result<(), HdcError<E>> {
        self.update_field(TemperatureResolution(resolution))
    }

    pub fn set_humidity_resolution(&mut self, resolution: Resolution) -> Result<(), HdcError<E>> {
        self.update_field(HumidityResolution(resolution))
    }

    pub fn set_measurement_mode(&mut self, mode: MeasurementMode) -> Result<(), HdcError<E>> {
        self.update_field(mode)
    }

    /// Starts a measurement. The device clears the bit once it completes.
    pub fn trigger_measurement(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(MEASUREMENT_TRIGGER, true)
    }

    /// Issues a soft reset and blocks for [`RESET_SETTLE_MS`] milliseconds.
    ///
    /// All registers return to their power-on defaults.
    pub fn reset(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(SOFT_RESET, true)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("HDC20xx: soft reset, waiting {} ms", RESET_SETTLE_MS);
        self.delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Enables the DRDY/INT pin. Disabled, the pin is high-Z.
    pub fn enable_interrupt(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(INTERRUPT_ENABLE, true)
    }

    pub fn disable_interrupt(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(INTERRUPT_ENABLE, false)
    }

    pub fn set_rate(&mut self, rate: OutputRate) -> Result<(), HdcError<E>> {
        self.update_field(rate)
    }

    pub fn set_interrupt_polarity(
        &mut self,
        polarity: InterruptPolarity,
    ) -> Result<(), HdcError<E>> {
        self.update_field(polarity)
    }

    pub fn set_interrupt_mode(&mut self, mode: InterruptMode) -> Result<(), HdcError<E>> {
        self.update_field(mode)
    }

    /// Reads (and thereby clears) the interrupt/DRDY status register.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptStatus, HdcError<E>> {
        Ok(InterruptStatus(self.read_register(Register::InterruptDrdy)?))
    }

    /// Returns `true` if a new measurement is available.
    ///
    /// This reads the status register, so the other interrupt flags are cleared too.
    pub fn data_ready(&mut self) -> Result<bool, HdcError<E>> {
        Ok(self.read_interrupt_status()?.data_ready())
    }

    /// Peak temperature since the register was last cleared, at 8-bit resolution.
    pub fn read_max_temperature(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::TempMax)?;
        Ok(convert::temperature_from_threshold(raw))
    }

    /// Peak humidity since the register was last cleared, at 8-bit resolution.
    pub fn read_max_humidity(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::HumidityMax)?;
        Ok(convert::humidity_from_threshold(raw))
    }

    pub fn clear_max_temperature(&mut self) -> Result<(), HdcError<E>> {
        self.write_register(Register::TempMax, 0x00)
    }

    pub fn clear_max_humidity(&mut self) -> Result<(), HdcError<E>> {
        self.write_register(Register::HumidityMax, 0x00)
    }

    /// Enables all four threshold interrupts (TH, TL, HH, HL).
    pub fn enable_threshold_interrupt(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(THRESHOLD_INTERRUPTS, true)
    }

    pub fn disable_threshold_interrupt(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(THRESHOLD_INTERRUPTS, false)
    }

    pub fn enable_drdy_interrupt(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(DRDY_INTERRUPT, true)
    }

    pub fn disable_drdy_interrupt(&mut self) -> Result<(), HdcError<E>> {
        self.update_flag(DRDY_INTERRUPT, false)
    }

    /// Sets the temperature offset applied by the device, in °C.
    ///
    /// The step is about 0.16 °C; the value is truncated toward zero and
    /// saturates at roughly ±20.6 °C.
    pub fn set_temperature_offset(&mut self, celsius: f32) -> Result<(), HdcError<E>> {
        let raw = convert::temperature_offset_to_raw(celsius);
        self.write_register(Register::TempOffsetAdjust, raw as u8)
    }

    pub fn read_temperature_offset(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::TempOffsetAdjust)? as i8;
        Ok(convert::temperature_offset_from_raw(raw))
    }

    /// Sets the humidity offset applied by the device, in %RH.
    ///
    /// The step is about 0.2 %RH; the value is truncated toward zero and
    /// saturates at ±25 %RH.
    pub fn set_humidity_offset(&mut self, percent: f32) -> Result<(), HdcError<E>> {
        let raw = convert::humidity_offset_to_raw(percent);
        self.write_register(Register::HumidityOffsetAdjust, raw as u8)
    }

    pub fn read_humidity_offset(&mut self) -> Result<f32, HdcError<E>> {
        let raw = self.read_register(Register::HumidityOffsetAdjust)? as i8;
        Ok(convert::humidity_offset_from_raw(raw))
    }

    pub fn read_manufacturer_id(&mut self) -> Result<u16, HdcError<E>> {
        self.read_u16(Register::ManufacturerIdLow, Register::ManufacturerIdHigh)
    }

    pub fn read_device_id(&mut self) -> Result<u16, HdcError<E>> {
        self.read_u16(Register::DeviceIdLow, Register::DeviceIdHigh)
    }

    /// Verifies the manufacturer and device IDs.
    ///
    /// # Errors
    ///
    /// Returns `HdcError::UnknownDevice` if either ID does not match.
    pub fn check_identity(&mut self) -> Result<(), HdcError<E>> {
        let manufacturer_id = self.read_manufacturer_id()?;
        let device_id = self.read_device_id()?;
        if manufacturer_id != MANUFACTURER_ID || device_id != DEVICE_ID {
            return Err(HdcError::UnknownDevice {
                manufacturer_id,
                device_id,
            });
        }
        Ok(())
    }

    /// Read-modify-write of a single enumerated field.
    fn update_field<V: FieldValue>(&mut self, value: V) -> Result<(), HdcError<E>> {
        self.modify(V::FIELD, value.code())
    }

    /// Sets every bit of `field` when `on`, clears them otherwise.
    fn update_flag(&mut self, field: Field, on: bool) -> Result<(), HdcError<E>> {
        let code = if on { field.all_set() } else { 0 };
        self.modify(field, code)
    }

    fn modify(&mut self, field: Field, code: u8) -> Result<(), HdcError<E>> {
        let old = self.read_register(field.register)?;
        self.write_register(field.register, field.apply(old, code))
    }

    /// Composes a 16-bit value from two single-byte reads.
    fn read_u16(&mut self, low: Register, high: Register) -> Result<u16, HdcError<E>> {
        let low = self.read_register(low)?;
        let high = self.read_register(high)?;
        Ok(u16::from_be_bytes([high, low]))
    }

    /// Points the device's register pointer at `register`.
    fn open_register(&mut self, register: Register) -> Result<(), HdcError<E>> {
        self.i2c.write(self.address, &[register.addr()])?;
        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<u8, HdcError<E>> {
        self.open_register(register)?;
        let mut buf = [0u8];
        self.i2c.read(self.address, &mut buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("HDC20xx: read {=u8:#x} = {=u8:#x}", register.addr(), buf[0]);
        Ok(buf[0])
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), HdcError<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("HDC20xx: write {=u8:#x} = {=u8:#x}", register.addr(), value);
        self.i2c.write(self.address, &[register.addr(), value])?;
        Ok(())
    }
}
