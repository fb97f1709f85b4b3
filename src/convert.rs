//! Fixed-point conversions between register counts and physical units.
//!
//! Live readings are 16-bit counts. Threshold and max registers hold only the
//! top 8 bits, so they are decoded with a different scale and a value written
//! to a threshold reads back up to one step (165/256 °C, 100/256 %RH) lower.

/// Lowest temperature the device reports, in °C.
pub const TEMPERATURE_MIN: f32 = -40.0;
/// Highest temperature the device reports, in °C.
pub const TEMPERATURE_MAX: f32 = 125.0;
/// Lowest relative humidity, in %.
pub const HUMIDITY_MIN: f32 = 0.0;
/// Highest relative humidity, in %.
pub const HUMIDITY_MAX: f32 = 100.0;

const TEMPERATURE_SPAN: f32 = TEMPERATURE_MAX - TEMPERATURE_MIN;
const HUMIDITY_SPAN: f32 = HUMIDITY_MAX - HUMIDITY_MIN;

/// Converts a 16-bit temperature count to °C.
pub fn temperature_from_raw(raw: u16) -> f32 {
    raw as f32 * TEMPERATURE_SPAN / 65536.0 + TEMPERATURE_MIN
}

/// Converts a 16-bit humidity count to %RH.
pub fn humidity_from_raw(raw: u16) -> f32 {
    raw as f32 / 65536.0 * HUMIDITY_SPAN
}

/// Decodes an 8-bit temperature threshold or max register.
pub fn temperature_from_threshold(raw: u8) -> f32 {
    raw as f32 * TEMPERATURE_SPAN / 256.0 + TEMPERATURE_MIN
}

/// Decodes an 8-bit humidity threshold or max register.
pub fn humidity_from_threshold(raw: u8) -> f32 {
    raw as f32 * HUMIDITY_SPAN / 256.0
}

/// Encodes a temperature for an 8-bit threshold register.
///
/// The value is clamped to -40..=125 °C and truncated; 125 °C saturates at 0xFF.
pub fn temperature_to_threshold(celsius: f32) -> u8 {
    let celsius = celsius.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
    (256.0 * (celsius - TEMPERATURE_MIN) / TEMPERATURE_SPAN) as u8
}

/// Encodes a relative humidity for an 8-bit threshold register.
///
/// The value is clamped to 0..=100 % and truncated; 100 % saturates at 0xFF.
pub fn humidity_to_threshold(percent: f32) -> u8 {
    let percent = percent.clamp(HUMIDITY_MIN, HUMIDITY_MAX);
    (256.0 * percent / HUMIDITY_SPAN) as u8
}

/// Temperature offset register step, in °C.
const TEMPERATURE_OFFSET_STEP: f32 = TEMPERATURE_SPAN / 1024.0;
/// Humidity offset register step, in %RH.
const HUMIDITY_OFFSET_STEP: f32 = HUMIDITY_SPAN / 512.0;

/// Decodes the two's complement temperature offset register.
pub fn temperature_offset_from_raw(raw: i8) -> f32 {
    raw as f32 * TEMPERATURE_OFFSET_STEP
}

/// Encodes a temperature offset, truncating toward zero.
///
/// Offsets beyond roughly ±20.6 °C saturate.
pub fn temperature_offset_to_raw(celsius: f32) -> i8 {
    (celsius / TEMPERATURE_OFFSET_STEP) as i8
}

/// Decodes the two's complement humidity offset register.
pub fn humidity_offset_from_raw(raw: i8) -> f32 {
    raw as f32 * HUMIDITY_OFFSET_STEP
}

/// Encodes a humidity offset, truncating toward zero.
///
/// Offsets beyond ±25 %RH saturate.
pub fn humidity_offset_to_raw(percent: f32) -> i8 {
    (percent / HUMIDITY_OFFSET_STEP) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPERATURE_STEP: f32 = 165.0 / 256.0;
    const HUMIDITY_STEP: f32 = 100.0 / 256.0;

    #[test]
    fn test_temperature_examples() {
        assert_eq!(temperature_from_raw(0x0000), -40.0);
        assert_eq!(temperature_from_raw(0x8000), 42.5);
        let max = temperature_from_raw(0xFFFF);
        assert!((max - 124.997).abs() < 0.001, "{max}");
    }

    #[test]
    fn test_humidity_examples() {
        assert_eq!(humidity_from_raw(0x0000), 0.0);
        assert_eq!(humidity_from_raw(0x8000), 50.0);
        assert!(humidity_from_raw(0xFFFF) < 100.0);
    }

    #[test]
    fn test_temperature_range_and_monotonic() {
        let mut previous = f32::MIN;
        for raw in (0..=u16::MAX).filter(|raw| raw & 0x03 == 0) {
            let value = temperature_from_raw(raw);
            assert!((TEMPERATURE_MIN..TEMPERATURE_MAX).contains(&value));
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_humidity_range_and_monotonic() {
        let mut previous = f32::MIN;
        for raw in 0..=u16::MAX {
            let value = humidity_from_raw(raw);
            assert!((HUMIDITY_MIN..HUMIDITY_MAX).contains(&value));
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_temperature_threshold_within_one_step() {
        let mut celsius = TEMPERATURE_MIN;
        while celsius <= TEMPERATURE_MAX {
            let decoded = temperature_from_threshold(temperature_to_threshold(celsius));
            assert!(decoded <= celsius + 1e-3, "{celsius} -> {decoded}");
            assert!(celsius - decoded <= TEMPERATURE_STEP + 1e-3, "{celsius} -> {decoded}");
            celsius += 0.25;
        }
    }

    #[test]
    fn test_humidity_threshold_within_one_step() {
        let mut percent = HUMIDITY_MIN;
        while percent <= HUMIDITY_MAX {
            let decoded = humidity_from_threshold(humidity_to_threshold(percent));
            assert!(decoded <= percent + 1e-3, "{percent} -> {decoded}");
            assert!(percent - decoded <= HUMIDITY_STEP + 1e-3, "{percent} -> {decoded}");
            percent += 0.1;
        }
    }

    #[test]
    fn test_threshold_encoding_clamps() {
        assert_eq!(temperature_to_threshold(-50.0), temperature_to_threshold(-40.0));
        assert_eq!(temperature_to_threshold(-40.0), 0x00);
        assert_eq!(temperature_to_threshold(200.0), temperature_to_threshold(125.0));
        assert_eq!(temperature_to_threshold(125.0), 0xFF);
        assert_eq!(humidity_to_threshold(150.0), humidity_to_threshold(100.0));
        assert_eq!(humidity_to_threshold(100.0), 0xFF);
        assert_eq!(humidity_to_threshold(-5.0), 0x00);
    }

    #[test]
    fn test_threshold_encoding_truncates() {
        // 256 * 65 / 165 = 100.84
        assert_eq!(temperature_to_threshold(25.0), 100);
        // 256 * 0.5 = 128
        assert_eq!(humidity_to_threshold(50.0), 0x80);
        assert_eq!(humidity_from_threshold(0x80), 50.0);
    }

    #[test]
    fn test_high_temperature_threshold_reads_back_below_max() {
        let decoded = temperature_from_threshold(temperature_to_threshold(125.0));
        assert!((124.35..=125.0).contains(&decoded), "{decoded}");
    }

    #[test]
    fn test_offsets() {
        assert_eq!(temperature_offset_from_raw(0), 0.0);
        assert!((temperature_offset_from_raw(1) - 0.16).abs() < 0.01);
        assert!((temperature_offset_from_raw(-128) + 20.62).abs() < 0.01);
        assert!((humidity_offset_from_raw(1) - 0.2).abs() < 0.01);
        assert_eq!(humidity_offset_from_raw(-128), -25.0);

        assert_eq!(temperature_offset_to_raw(0.5), 3);
        assert_eq!(temperature_offset_to_raw(-0.5), -3);
        assert_eq!(temperature_offset_to_raw(100.0), i8::MAX);
        assert_eq!(humidity_offset_to_raw(-1.0), -5);
        assert_eq!(humidity_offset_to_raw(-100.0), i8::MIN);
    }
}
