//! Register map and bit-field layout of the HDC20xx.
//!
//! Every configuration option is described by a [`Field`] (register, mask and
//! shift) and written with a single read-modify-write rule, see [`Field::apply`].

/// Register addresses of the HDC20xx.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    TempLow = 0x00,
    TempHigh = 0x01,
    HumidityLow = 0x02,
    HumidityHigh = 0x03,
    /// Interrupt/DRDY status.
    InterruptDrdy = 0x04,
    TempMax = 0x05,
    HumidityMax = 0x06,
    InterruptConfig = 0x07,
    TempOffsetAdjust = 0x08,
    HumidityOffsetAdjust = 0x09,
    TempThresholdLow = 0x0A,
    TempThresholdHigh = 0x0B,
    HumidityThresholdLow = 0x0C,
    HumidityThresholdHigh = 0x0D,
    /// Reset and DRDY/INT configuration.
    DeviceConfig = 0x0E,
    MeasurementConfig = 0x0F,
    ManufacturerIdLow = 0xFC,
    ManufacturerIdHigh = 0xFD,
    DeviceIdLow = 0xFE,
    DeviceIdHigh = 0xFF,
}

impl Register {
    /// Address byte written to the device's register pointer.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// A contiguous group of bits inside one register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub register: Register,
    /// Mask in register position.
    pub mask: u8,
    /// Position of the field's lowest bit.
    pub shift: u8,
}

impl Field {
    const fn new(register: Register, mask: u8, shift: u8) -> Self {
        Field {
            register,
            mask,
            shift,
        }
    }

    /// Replaces the field inside `old` with `code`, leaving every other bit untouched.
    pub const fn apply(self, old: u8, code: u8) -> u8 {
        (old & !self.mask) | ((code << self.shift) & self.mask)
    }

    /// Code with every bit of the field set.
    pub const fn all_set(self) -> u8 {
        self.mask >> self.shift
    }
}

pub(crate) const SOFT_RESET: Field = Field::new(Register::DeviceConfig, 0b1000_0000, 7);
pub(crate) const OUTPUT_RATE: Field = Field::new(Register::DeviceConfig, 0b0111_0000, 4);
pub(crate) const HEATER: Field = Field::new(Register::DeviceConfig, 0b0000_1000, 3);
pub(crate) const INTERRUPT_ENABLE: Field = Field::new(Register::DeviceConfig, 0b0000_0100, 2);
pub(crate) const INTERRUPT_POLARITY: Field = Field::new(Register::DeviceConfig, 0b0000_0010, 1);
pub(crate) const INTERRUPT_MODE: Field = Field::new(Register::DeviceConfig, 0b0000_0001, 0);

pub(crate) const TEMPERATURE_RESOLUTION: Field =
    Field::new(Register::MeasurementConfig, 0b1100_0000, 6);
pub(crate) const HUMIDITY_RESOLUTION: Field =
    Field::new(Register::MeasurementConfig, 0b0011_0000, 4);
pub(crate) const MEASUREMENT_MODE: Field = Field::new(Register::MeasurementConfig, 0b0000_0110, 1);
pub(crate) const MEASUREMENT_TRIGGER: Field =
    Field::new(Register::MeasurementConfig, 0b0000_0001, 0);

pub(crate) const DRDY_INTERRUPT: Field = Field::new(Register::InterruptConfig, 0b1000_0000, 7);
/// TH, TL, HH and HL enables.
pub(crate) const THRESHOLD_INTERRUPTS: Field =
    Field::new(Register::InterruptConfig, 0b0111_1000, 3);

/// An enumerated option stored in a fixed [`Field`].
///
/// Every implementor also converts from a raw code with `From<u8>`; codes
/// outside the mapped set fall back to the option's base value.
pub trait FieldValue: Copy + From<u8> {
    /// Where the option lives.
    const FIELD: Field;

    /// Unshifted field code.
    fn code(self) -> u8;
}

/// Measurement resolution of temperature or humidity.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    FourteenBit,
    ElevenBit,
    NineBit,
}

impl Resolution {
    fn code(self) -> u8 {
        match self {
            Resolution::FourteenBit => 0b00,
            Resolution::ElevenBit => 0b01,
            Resolution::NineBit => 0b10,
        }
    }
}

impl From<u8> for Resolution {
    fn from(code: u8) -> Self {
        match code {
            0b01 => Resolution::ElevenBit,
            0b10 => Resolution::NineBit,
            _ => Resolution::FourteenBit,
        }
    }
}

/// [`Resolution`] applied to the temperature channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TemperatureResolution(pub Resolution);

impl From<u8> for TemperatureResolution {
    fn from(code: u8) -> Self {
        TemperatureResolution(code.into())
    }
}

impl FieldValue for TemperatureResolution {
    const FIELD: Field = TEMPERATURE_RESOLUTION;

    fn code(self) -> u8 {
        self.0.code()
    }
}

/// [`Resolution`] applied to the humidity channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HumidityResolution(pub Resolution);

impl From<u8> for HumidityResolution {
    fn from(code: u8) -> Self {
        HumidityResolution(code.into())
    }
}

impl FieldValue for HumidityResolution {
    const FIELD: Field = HUMIDITY_RESOLUTION;

    fn code(self) -> u8 {
        self.0.code()
    }
}

/// Which channels a measurement converts.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasurementMode {
    #[default]
    TemperatureAndHumidity,
    TemperatureOnly,
    HumidityOnly,
}

impl From<u8> for MeasurementMode {
    fn from(code: u8) -> Self {
        match code {
            0b01 => MeasurementMode::TemperatureOnly,
            0b10 => MeasurementMode::HumidityOnly,
            _ => MeasurementMode::TemperatureAndHumidity,
        }
    }
}

impl FieldValue for MeasurementMode {
    const FIELD: Field = MEASUREMENT_MODE;

    fn code(self) -> u8 {
        match self {
            MeasurementMode::TemperatureAndHumidity => 0b00,
            MeasurementMode::TemperatureOnly => 0b01,
            MeasurementMode::HumidityOnly => 0b10,
        }
    }
}

/// Automatic measurement rate.
///
/// `Manual` disables auto mode, measurements then need
/// [`trigger_measurement`](crate::Hdc20xx::trigger_measurement).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputRate {
    #[default]
    Manual,
    EveryTwoMinutes,
    EveryMinute,
    EveryTenSeconds,
    EveryFiveSeconds,
    OneHz,
    TwoHz,
    FiveHz,
}

impl From<u8> for OutputRate {
    fn from(code: u8) -> Self {
        match code {
            1 => OutputRate::EveryTwoMinutes,
            2 => OutputRate::EveryMinute,
            3 => OutputRate::EveryTenSeconds,
            4 => OutputRate::EveryFiveSeconds,
            5 => OutputRate::OneHz,
            6 => OutputRate::TwoHz,
            7 => OutputRate::FiveHz,
            _ => OutputRate::Manual,
        }
    }
}

impl FieldValue for OutputRate {
    const FIELD: Field = OUTPUT_RATE;

    fn code(self) -> u8 {
        self as u8
    }
}

/// Active level of the DRDY/INT pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterruptPolarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl From<u8> for InterruptPolarity {
    fn from(code: u8) -> Self {
        match code {
            1 => InterruptPolarity::ActiveHigh,
            _ => InterruptPolarity::ActiveLow,
        }
    }
}

impl FieldValue for InterruptPolarity {
    const FIELD: Field = INTERRUPT_POLARITY;

    fn code(self) -> u8 {
        self as u8
    }
}

/// Behaviour of the DRDY/INT pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterruptMode {
    /// Level sensitive.
    #[default]
    Level,
    Comparator,
}

impl From<u8> for InterruptMode {
    fn from(code: u8) -> Self {
        match code {
            1 => InterruptMode::Comparator,
            _ => InterruptMode::Level,
        }
    }
}

impl FieldValue for InterruptMode {
    const FIELD: Field = INTERRUPT_MODE;

    fn code(self) -> u8 {
        self as u8
    }
}

/// Contents of the interrupt/DRDY status register.
///
/// Reading the register on the device clears it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptStatus(pub u8);

impl InterruptStatus {
    /// Raw register byte.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// A new measurement is available.
    pub fn data_ready(self) -> bool {
        self.0 & 0b1000_0000 != 0
    }

    pub fn temperature_high(self) -> bool {
        self.0 & 0b0100_0000 != 0
    }

    pub fn temperature_low(self) -> bool {
        self.0 & 0b0010_0000 != 0
    }

    pub fn humidity_high(self) -> bool {
        self.0 & 0b0001_0000 != 0
    }

    pub fn humidity_low(self) -> bool {
        self.0 & 0b0000_1000 != 0
    }
}
