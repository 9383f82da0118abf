//! Weakly typed structural decoding.
//!
//! Paystack is not consistent about field types across endpoints: the same field can be
//! returned as a number on one endpoint and as a numeric string on another, metadata can
//! arrive either as an object or as a JSON-encoded string, empty objects are sometimes sent
//! as `[]`, and so on.
//!
//! Instead of sprinkling per-field conversions over every model, responses are first parsed
//! into a generic [`Value`] tree and then mapped onto the target type through a
//! [`Deserializer`] that applies the same coercion rules to every field of every type:
//!
//! | Target               | Accepted input                                                        |
//! |----------------------|-----------------------------------------------------------------------|
//! | integers             | numbers (floats are truncated), booleans, numeric strings, `""`       |
//! | floats               | numbers, booleans, numeric strings, `""`                              |
//! | `bool`               | booleans, numbers (non-zero is `true`), `"1"`, `"t"`, `"true"`, `"0"`, `"f"`, `"false"`, `""` |
//! | strings              | strings, numbers, booleans (`"1"` / `"0"`)                            |
//! | sequences            | arrays, any single value (wrapped in a one-element sequence)          |
//! | maps and structs     | objects, JSON strings holding an object, `""` and `[]` (empty)        |
//! | `Option<T>`          | `null`, `""` and `[]` are `None`, anything else is decoded as `T`     |
//!
//! `null` always decodes to the zero value of the target. Field names are matched through
//! their serde names, so models use `#[serde(rename = "...")]` exactly like for plain JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, Deserializer, IntoDeserializer, MapAccess, SeqAccess,
    Unexpected, Visitor,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{borrow::Cow, fmt};

/// Error raised when a value cannot be mapped onto the requested type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(String);

impl de::Error for DecodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        DecodeError(msg.to_string())
    }
}

/// Maps a generic JSON tree onto `T`, coercing mismatched scalar types where possible.
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, DecodeError> {
    T::deserialize(WeakDeserializer(value))
}

/// Decodes an optional timestamp, for use with `#[serde(deserialize_with = "...")]`.
///
/// Accepts RFC 3339 strings, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD` (read as UTC) and unix
/// timestamps in seconds or milliseconds. Anything else decodes to `None` instead of failing
/// the whole response.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_timestamp(s.trim()),
        Some(Value::Number(n)) => n.as_i64().and_then(|secs| {
            if secs.abs() >= 100_000_000_000 {
                Utc.timestamp_millis_opt(secs).single()
            } else {
                Utc.timestamp_opt(secs, 0).single()
            }
        }),
        _ => None,
    })
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[derive(Clone, Copy, Debug)]
struct WeakDeserializer<'a>(&'a Value);

impl<'a> WeakDeserializer<'a> {
    fn to_i64(self) -> Option<i64> {
        match self.0 {
            Value::Null => Some(0),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0);
                }
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f as i64)
                })
            }
            _ => None,
        }
    }

    fn to_u64(self) -> Option<u64> {
        match self.0 {
            Value::Null => Some(0),
            Value::Bool(b) => Some(u64::from(*b)),
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0);
                }
                s.parse::<u64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f as u64)
                })
            }
            _ => None,
        }
    }

    fn to_f64(self) -> Option<f64> {
        match self.0 {
            Value::Null => Some(0.0),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0.0);
                }
                s.parse::<f64>().ok()
            }
            _ => None,
        }
    }

    fn to_bool(self) -> Option<bool> {
        match self.0 {
            Value::Null => Some(false),
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|f| f != 0.0),
            Value::String(s) => match s.trim() {
                "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
                "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn to_str(self) -> Option<Cow<'a, str>> {
        match self.0 {
            Value::Null => Some(Cow::Borrowed("")),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "1" } else { "0" })),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            _ => None,
        }
    }

    fn invalid_type<E: de::Error>(self, exp: &dyn de::Expected) -> E {
        E::invalid_type(unexpected(self.0), exp)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_u64(), n.as_i64()) {
            (Some(u), _) => Unexpected::Unsigned(u),
            (None, Some(i)) => Unexpected::Signed(i),
            (None, None) => Unexpected::Float(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

macro_rules! deserialize_signed {
    ($($method:ident)*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
            match self.to_i64() {
                Some(v) => visitor.visit_i64(v),
                None => Err(self.invalid_type(&visitor)),
            }
        }
    )*};
}

macro_rules! deserialize_unsigned {
    ($($method:ident)*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
            match self.to_u64() {
                Some(v) => visitor.visit_u64(v),
                None => Err(self.invalid_type(&visitor)),
            }
        }
    )*};
}

impl<'de, 'a> Deserializer<'de> for WeakDeserializer<'a> {
    type Error = DecodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(*b),
            Value::Number(n) => match (n.as_u64(), n.as_i64()) {
                (Some(u), _) => visitor.visit_u64(u),
                (None, Some(i)) => visitor.visit_i64(i),
                (None, None) => visitor.visit_f64(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => visitor.visit_str(s),
            Value::Array(items) => visitor.visit_seq(WeakSeq::new(items)),
            Value::Object(map) => visitor.visit_map(WeakMap::new(map)),
        }
    }

    deserialize_signed!(deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64);
    deserialize_unsigned!(deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64);

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.deserialize_f64(visitor)
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.to_f64() {
            Some(v) => visitor.visit_f64(v),
            None => Err(self.invalid_type(&visitor)),
        }
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.to_bool() {
            Some(v) => visitor.visit_bool(v),
            None => Err(self.invalid_type(&visitor)),
        }
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.deserialize_str(visitor)
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.to_str() {
            Some(s) => visitor.visit_str(&s),
            None => Err(self.invalid_type(&visitor)),
        }
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.to_str() {
            Some(s) => visitor.visit_string(s.into_owned()),
            None => Err(self.invalid_type(&visitor)),
        }
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.deserialize_any(visitor)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.deserialize_any(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            Value::String(s) if s.is_empty() => visitor.visit_none(),
            Value::Array(a) if a.is_empty() => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_seq(WeakSeq::new(&[])),
            Value::Array(items) => visitor.visit_seq(WeakSeq::new(items)),
            single => visitor.visit_seq(WeakSeq::new(std::slice::from_ref(single))),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Object(map) => visitor.visit_map(WeakMap::new(map)),
            Value::Null => visitor.visit_map(WeakMap::empty()),
            Value::Array(items) if items.is_empty() => visitor.visit_map(WeakMap::empty()),
            Value::String(s) if s.trim().is_empty() => visitor.visit_map(WeakMap::empty()),
            // Objects serialized as JSON text, e.g. transaction metadata.
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(map)) => visitor.visit_map(WeakMap::new(&map)),
                _ => Err(self.invalid_type(&visitor)),
            },
            _ => Err(self.invalid_type(&visitor)),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::String(s) => {
                let variant: de::value::StrDeserializer<'_, DecodeError> =
                    s.as_str().into_deserializer();
                visitor.visit_enum(variant)
            }
            other => other
                .clone()
                .deserialize_enum(name, variants, visitor)
                .map_err(de::Error::custom),
        }
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }
}

struct WeakSeq<'a> {
    iter: std::slice::Iter<'a, Value>,
}

impl<'a> WeakSeq<'a> {
    fn new(items: &'a [Value]) -> Self {
        Self { iter: items.iter() }
    }
}

impl<'de, 'a> SeqAccess<'de> for WeakSeq<'a> {
    type Error = DecodeError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Self::Error> {
        self.iter
            .next()
            .map(|value| seed.deserialize(WeakDeserializer(value)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct WeakMap<'a> {
    iter: Option<serde_json::map::Iter<'a>>,
    value: Option<&'a Value>,
}

impl<'a> WeakMap<'a> {
    fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            iter: Some(map.iter()),
            value: None,
        }
    }

    fn empty() -> Self {
        Self {
            iter: None,
            value: None,
        }
    }
}

impl<'de, 'a> MapAccess<'de> for WeakMap<'a> {
    type Error = DecodeError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Self::Error> {
        let (key, value) = match self.iter.as_mut().and_then(Iterator::next) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        self.value = Some(value);

        let key: de::value::StrDeserializer<'_, DecodeError> = key.as_str().into_deserializer();
        seed.deserialize(key).map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(
        &mut self,
        seed: V,
    ) -> Result<V::Value, Self::Error> {
        let value = self
            .value
            .take()
            .ok_or_else(|| de::Error::custom("value requested before key"))?;
        seed.deserialize(WeakDeserializer(value))
    }

    fn size_hint(&self) -> Option<usize> {
        self.iter.as_ref().map(|iter| iter.len())
    }
}
