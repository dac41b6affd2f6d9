use num_bigint::BigInt;
use serde::{Serialize, Serializer, ser::Error};
use serde_json::value::RawValue;
use std::fmt;

/// An integer of any magnitude, serialized as a bare JSON number
///
/// `serde_json` only emits machine-sized integers, so the decimal digits are
/// written through a [`RawValue`] instead.
///
/// ```
/// use demo_api::common::JsonInteger;
/// use num_bigint::BigInt;
///
/// let big = JsonInteger::from(BigInt::from(u64::MAX) * 10);
/// assert_eq!(serde_json::to_string(&big).unwrap(), "184467440737095516150");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonInteger(pub BigInt);

impl From<BigInt> for JsonInteger {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl fmt::Display for JsonInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for JsonInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.0.to_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Message;

    #[test]
    fn small_values_match_native_integers() {
        let value = JsonInteger::from(BigInt::from(-42));
        assert_eq!(serde_json::to_string(&value).unwrap(), "-42");
        assert_eq!(serde_json::to_value(&value).unwrap(), serde_json::json!(-42));
    }

    #[test]
    fn large_values_keep_every_digit() {
        let value = JsonInteger::from(BigInt::from(100_000_000_000_000_000_000_u128) * 2);
        assert_eq!(
            serde_json::to_string(&Message::new(value)).unwrap(),
            r#"{"message":200000000000000000000}"#
        );
    }
}
