//! Scalar coercion for `Person::age`.
//!
//! Clients send the age as whatever their form produced: a JSON integer, a
//! float, a numeric string, or nothing at all. All of those are accepted;
//! `null` reads as `0` and floats truncate toward zero. Anything that is not a
//! number (or does not fit in an `i32`) is a decode error.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};

pub fn lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AgeVisitor)
}

struct AgeVisitor;

impl<'de> Visitor<'de> for AgeVisitor {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer age, a number, or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &"a 32-bit integer"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &"a 32-bit integer"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        let t = v.trunc();
        if v.is_finite() && t >= i32::MIN as f64 && t <= i32::MAX as f64 {
            Ok(t as i32)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &"a number within 32-bit range"))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        v.trim()
            .parse::<i32>()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }
}
