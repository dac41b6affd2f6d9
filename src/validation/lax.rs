//! Lenient integer fields for request bodies
//!
//! Clients of the API routinely send integers as strings or as floats with
//! no fractional part (`"1"`, `1.0`). These helpers accept both, along with
//! booleans, and still reject anything that is not a whole number.
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     #[serde(deserialize_with = "demo_api::validation::lax::int")]
//!     count: i64,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"count": "7"}"#).unwrap();
//! assert_eq!(row.count, 7);
//! ```

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use std::fmt;

struct LaxInt(i64);

struct LaxIntVisitor;

impl<'de> Visitor<'de> for LaxIntVisitor {
    type Value = LaxInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a valid integer")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<LaxInt, E> {
        Ok(LaxInt(i64::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LaxInt, E> {
        Ok(LaxInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LaxInt, E> {
        i64::try_from(v)
            .map(LaxInt)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<LaxInt, E> {
        let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
        if v.fract() == 0.0 && in_range {
            Ok(LaxInt(v as i64))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LaxInt, E> {
        v.trim()
            .parse::<i64>()
            .map(LaxInt)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for LaxInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LaxIntVisitor)
    }
}

/// `deserialize_with` helper for an `i64` field
pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    LaxInt::deserialize(deserializer).map(|v| v.0)
}

/// `deserialize_with` helper for a `Vec<i64>` field
pub fn int_seq<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    Vec::<LaxInt>::deserialize(deserializer).map(|items| items.into_iter().map(|v| v.0).collect())
}
