/// Possible errors from the HDC20xx driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum HdcError<E> {
    /// Error from the I2C bus.
    I2cError(E),
    /// The device answering at the address did not report the expected identity.
    UnknownDevice {
        /// Value read from the manufacturer ID registers.
        manufacturer_id: u16,
        /// Value read from the device ID registers.
        device_id: u16,
    },
}

impl<E> From<E> for HdcError<E> {
    fn from(value: E) -> Self {
        Self::I2cError(value)
    }
}
