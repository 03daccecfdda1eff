//! Lenient scalar coercion for path segments and request bodies.
//!
//! Clients of this API send ids and capacities either as JSON numbers or as
//! numeric strings, and room numbers either as strings or as numbers. These
//! helpers accept both forms and nothing more; anything else is left for the
//! caller to report.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Visitor};

use crate::domain::Error;

/// Parse the leading integer of `raw` the way JavaScript's `parseInt` does.
///
/// Leading whitespace and one sign are accepted, then as many ASCII digits as
/// follow; trailing garbage is ignored. Returns `None` when no digit is found
/// or the value does not fit in `i32`.
///
/// # Examples
/// ```
/// use salas_api::inbound::http::coercion::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("42"), Some(42));
/// assert_eq!(parse_int_prefix("  -7abc"), Some(-7));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = rest.get(..digits_len).filter(|digits| !digits.is_empty())?;
    let magnitude: i64 = digits.parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Parse a `{codigo}` path segment or fail with `prefix`.
pub fn path_code(raw: &str, prefix: &str) -> Result<i32, Error> {
    parse_int_prefix(raw)
        .ok_or_else(|| Error::invalid_request(prefix, format!("codigo inválido: \"{raw}\"")))
}

struct IntegerVisitor;

impl Visitor<'_> for IntegerVisitor {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        i32::try_from(v)
            .map_err(|_| E::custom(format!("value \"{v}\" is out of range for type integer")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        i32::try_from(v)
            .map_err(|_| E::custom(format!("value \"{v}\" is out of range for type integer")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        if v.fract() != 0.0 || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
            return Err(E::custom(format!(
                "invalid input syntax for type integer: \"{v}\""
            )));
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "integral and range-checked above"
        )]
        let value = v as i32;
        Ok(value)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        v.trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid input syntax for type integer: \"{v}\"")))
    }
}

/// `deserialize_with` helper accepting `30` or `"30"`.
pub fn integer<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor)
}

struct TextVisitor;

impl Visitor<'_> for TextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

/// `deserialize_with` helper accepting `"101"` or `101`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextVisitor)
}
