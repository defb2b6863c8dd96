//! Unsigned 8-bit value object shared by the address types.

use super::error::{FormatError, RangeError, Result, ValueError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// An integer guaranteed to lie within [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ByteValue(u8);

impl ByteValue {
    pub const MIN: i64 = 0x00;
    pub const MAX: i64 = 0xFF;

    /// Validates `value` and wraps it.
    /// Values below 0 and above 255 fail with distinct messages.
    pub fn new(value: i64) -> Result<Self> {
        if value < Self::MIN {
            return Err(RangeError::BelowMinimum.into());
        }
        if value > Self::MAX {
            return Err(RangeError::AboveMaximum.into());
        }

        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Parses trimmed decimal text. Integers too large for `i64` still
    /// report as out of range; anything non-numeric reports `malformed`.
    pub(crate) fn parse_decimal(text: &str, malformed: FormatError) -> Result<Self> {
        match text.trim().parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(e) => Err(match e.kind() {
                IntErrorKind::PosOverflow => RangeError::AboveMaximum.into(),
                IntErrorKind::NegOverflow => RangeError::BelowMinimum.into(),
                _ => malformed.into(),
            }),
        }
    }

    /// Lowercase hex rendering, always two digits
    pub(crate) fn to_hex(self) -> String {
        format!("{:02x}", self.0)
    }
}

impl From<u8> for ByteValue {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<ByteValue> for u8 {
    fn from(byte: ByteValue) -> Self {
        byte.0
    }
}

impl TryFrom<i64> for ByteValue {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for ByteValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_decimal(s, FormatError::NotAnInteger)
    }
}

impl fmt::Display for ByteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_byte_value_full_range() {
        for v in 0..=255i64 {
            let byte = ByteValue::new(v).unwrap();
            assert_eq!(i64::from(byte.value()), v);
        }
    }

    #[rstest]
    #[case(-1)]
    #[case(-65535)]
    #[case(i64::MIN)]
    fn test_byte_value_rejects_low(#[case] value: i64) {
        let err = ByteValue::new(value).unwrap_err();
        assert_eq!(err, ValueError::OutOfRange(RangeError::BelowMinimum));
        assert_eq!(err.to_string(), "byte value cannot be lower than 0 (0x00)");
    }

    #[rstest]
    #[case(256)]
    #[case(65535)]
    #[case(i64::MAX)]
    fn test_byte_value_rejects_high(#[case] value: i64) {
        let err = ByteValue::new(value).unwrap_err();
        assert_eq!(err, ValueError::OutOfRange(RangeError::AboveMaximum));
        assert_eq!(err.to_string(), "byte value cannot exceed 255 (0xFF)");
    }

    #[test]
    fn test_byte_value_display_and_json() {
        let byte = ByteValue::new(200).unwrap();
        assert_eq!(format!("{}", byte), "200");
        assert_eq!(serde_json::to_string(&byte).unwrap(), "200");
    }

    #[test]
    fn test_byte_value_deserialize_validates() {
        let byte: ByteValue = serde_json::from_str("42").unwrap();
        assert_eq!(byte.value(), 42);

        let err = serde_json::from_str::<ByteValue>("300").unwrap_err();
        assert!(err.to_string().contains("cannot exceed 255"));

        let err = serde_json::from_str::<ByteValue>("-3").unwrap_err();
        assert!(err.to_string().contains("cannot be lower than 0"));
    }

    #[rstest]
    #[case(" 17 ", Ok(17))]
    #[case("0", Ok(0))]
    #[case("256", Err(ValueError::OutOfRange(RangeError::AboveMaximum)))]
    #[case("99999999999999999999", Err(ValueError::OutOfRange(RangeError::AboveMaximum)))]
    #[case("-99999999999999999999", Err(ValueError::OutOfRange(RangeError::BelowMinimum)))]
    #[case("ten", Err(ValueError::InvalidFormat(FormatError::NotAnInteger)))]
    #[case("", Err(ValueError::InvalidFormat(FormatError::NotAnInteger)))]
    fn test_byte_value_from_str(#[case] input: &str, #[case] expected: Result<u8>) {
        let parsed = input.parse::<ByteValue>().map(|b| b.value());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_byte_value_hex() {
        assert_eq!(ByteValue::from(0x0d).to_hex(), "0d");
        assert_eq!(ByteValue::from(0xff).to_hex(), "ff");
    }
}
