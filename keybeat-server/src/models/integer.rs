//! Lenient integer decoding for request input
//!
//! Clients send numbers as JSON integers, numeric strings, or whole floats
//! (`60.0`); all three decode to the same `i64`. Fractions, non-numeric
//! strings, bools and null are rejected.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

/// 2^63 as f64; valid i64 floats lie in [-2^63, 2^63).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

struct IntegerVisitor {
    /// Clamp out-of-range integers to i64::MIN/MAX instead of rejecting them
    saturate: bool,
}

impl IntegerVisitor {
    fn parse_str<E: de::Error>(&self, v: &str) -> Result<i64, E> {
        let s = v.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(n);
        }

        if self.saturate {
            let (negative, digits) = match s.as_bytes().first() {
                Some(b'-') => (true, &s[1..]),
                Some(b'+') => (false, &s[1..]),
                _ => (false, s),
            };
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(if negative { i64::MIN } else { i64::MAX });
            }
        }

        Err(E::invalid_value(Unexpected::Str(v), self))
    }
}

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        match i64::try_from(v) {
            Ok(n) => Ok(n),
            Err(_) if self.saturate => Ok(i64::MAX),
            Err(_) => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if !v.is_finite() || v.fract() != 0.0 {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }

        if (-I64_BOUND..I64_BOUND).contains(&v) {
            Ok(v as i64)
        } else if self.saturate {
            Ok(if v < 0.0 { i64::MIN } else { i64::MAX })
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        self.parse_str(v)
    }
}

/// Required integer field: integer, numeric string, or whole float.
pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor { saturate: false })
}

/// Integer that never overflows; out-of-range values clamp to i64::MIN/MAX.
struct Saturating(i64);

impl<'de> Deserialize<'de> for Saturating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(IntegerVisitor { saturate: true })
            .map(Saturating)
    }
}

/// Optional query parameter, saturating instead of overflowing.
pub fn deserialize_saturating_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Saturating>::deserialize(deserializer)?.map(|s| s.0))
}
