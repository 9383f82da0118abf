//! Response envelope handling shared by all the Paystack APIs.
//!
//! Every Paystack endpoint answers with an envelope shaped like
//! `{"status": bool, "message": string, "data": <object|array|absent>}`, but the actual
//! payload is not nested consistently: single resources usually live under `data`, list
//! endpoints return `data` as an array next to a `meta` object, and a few endpoints return
//! the resource at the top level. [`Envelope`] hides these differences.

use crate::{
    decode::{self, DecodeError},
    error::ApiError,
};
use reqwest::StatusCode;
use serde::{
    de::{self, DeserializeOwned, MapAccess, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Value};
use std::{fmt, marker::PhantomData};

/// Arbitrary response data, used where the API does not return a well-defined resource.
pub type Response = Map<String, Value>;

/// Key-value pairs attached to Paystack resources.
pub type Metadata = Map<String, Value>;

/// Envelope keys which never end up in a decoded resource.
const ENVELOPE_STATUS_KEY: &str = "status";
const ENVELOPE_MESSAGE_KEY: &str = "message";
const ENVELOPE_DATA_KEY: &str = "data";

/// Generic message used for failures when the server did not send one.
const GENERIC_ERROR_MESSAGE: &str = "Paystack API request failed";

/// Raw decoded body of a Paystack API response.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status_code: StatusCode,
    body: Map<String, Value>,
}

impl Envelope {
    /// Parses a response body.
    ///
    /// Malformed or non-object JSON is tolerated and yields an empty envelope.
    pub fn parse(status_code: StatusCode, bytes: &[u8]) -> Self {
        let body = match serde_json::from_slice(bytes) {
            Ok(Value::Object(body)) => body,
            _ => Map::new(),
        };

        Self { status_code, body }
    }

    /// HTTP status code of the response.
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// The `message` field of the envelope, if any.
    pub fn message(&self) -> Option<&str> {
        self.body.get(ENVELOPE_MESSAGE_KEY).and_then(Value::as_str)
    }

    /// The `data` field of the envelope, if any.
    pub fn data(&self) -> Option<&Value> {
        self.body.get(ENVELOPE_DATA_KEY)
    }

    /// The full envelope, metadata fields included.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Whether the server signaled a failure, either with `"status": false`
    /// or with an HTTP status code `>= 400`.
    pub fn is_failure(&self) -> bool {
        let api_failure = matches!(
            self.body.get(ENVELOPE_STATUS_KEY),
            Some(Value::Bool(false))
        );

        api_failure || self.status_code.as_u16() >= 400
    }

    /// Turns a failed envelope into an [`ApiError`], leaving successful ones untouched.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if !self.is_failure() {
            return Ok(self);
        }

        let string_field = |key: &str| {
            self.body
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Err(ApiError {
            status: self.status_code.as_u16(),
            message: string_field(ENVELOPE_MESSAGE_KEY)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            r#type: string_field("type"),
            code: string_field("code"),
        })
    }

    /// Decodes the payload of the envelope into `T`.
    ///
    /// The payload is the `data` object when `data` holds a single object. In every other case
    /// (`data` missing, an array or a scalar) the whole envelope is used instead, minus the
    /// `status` and `message` fields. Use [`decode_data_list`](Envelope::decode_data_list)
    /// for endpoints returning `data` as an array of resources.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        match self.data() {
            Some(data @ Value::Object(_)) => decode::from_value(data),
            _ => {
                let mut payload = self.body.clone();
                payload.remove(ENVELOPE_STATUS_KEY);
                payload.remove(ENVELOPE_MESSAGE_KEY);
                decode::from_value(&Value::Object(payload))
            }
        }
    }

    /// Decodes the `data` array of the envelope into a list of `T`.
    ///
    /// A single `data` object is decoded as a one-element list, a missing or null `data`
    /// as an empty one.
    pub fn decode_data_list<T: DeserializeOwned>(&self) -> Result<Vec<T>, DecodeError> {
        decode::from_value(self.data().unwrap_or(&Value::Null))
    }
}

/// Pagination metadata for paginated responses from the Paystack API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListMeta {
    pub total: u64,
    pub skipped: u64,
    #[serde(rename = "perPage")]
    pub per_page: u64,
    pub page: u64,
    #[serde(rename = "pageCount")]
    pub page_count: u64,
}

/// A page of resources, in the order returned by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct List<T> {
    #[serde(default)]
    pub meta: ListMeta,
    #[serde(rename = "data", default = "Vec::new")]
    pub values: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            meta: ListMeta::default(),
            values: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Appends the pagination query parameters to `path`.
pub fn paginate(path: &str, count: u32, offset: u32) -> String {
    format!("{}?perPage={}&page={}", path, count, offset)
}

/// A related resource which the API returns either expanded or as a bare reference.
///
/// For example, creating a subscription returns the customer code while fetching it
/// returns the full customer object.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(u64),
    Code(String),
    Object(Box<T>),
}

impl<T> Expandable<T> {
    /// Returns the expanded object, if the API sent one.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Expandable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpandableVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ExpandableVisitor<T> {
            type Value = Expandable<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object, an id or a code")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Expandable::Id(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(Expandable::Id)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            // Ids sent as `7.0` are still ids
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if v.fract() == 0.0 && v >= 0.0 && v < u64::MAX as f64 {
                    Ok(Expandable::Id(v as u64))
                } else {
                    Err(E::invalid_value(Unexpected::Float(v), &self))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Expandable::Code(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                T::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(|object| Expandable::Object(Box::new(object)))
            }
        }

        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}
