//! Opaque payload attached to an [`AppError`](crate::AppError)

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Arbitrary data carried by an error.
///
/// The payload is encoded to JSON once, when it is attached. A value that
/// cannot be encoded is still accepted: the encode failure is remembered and
/// only surfaces when the owning error is serialized. The textual dump used by
/// `Display` is the compact JSON text, or the value's `Debug` output when it
/// could not be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorData {
    rendered: String,
    encoded: Result<Value, String>,
}

impl ErrorData {
    /// Capture a payload
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + fmt::Debug,
    {
        match serde_json::to_value(&value) {
            Ok(encoded) => Self::from_json(encoded),
            Err(error) => Self {
                rendered: format!("{value:?}"),
                encoded: Err(error.to_string()),
            },
        }
    }

    /// Capture a payload, or `None` if it encodes to JSON `null`
    ///
    /// `None`, `()` and `Value::Null` carry nothing and leave an error without data.
    pub fn capture<T>(value: T) -> Option<Self>
    where
        T: Serialize + fmt::Debug,
    {
        Some(Self::new(value)).filter(|data| !data.is_null())
    }

    /// Capture an already-encoded JSON payload
    pub fn from_json(value: Value) -> Self {
        Self {
            rendered: value.to_string(),
            encoded: Ok(value),
        }
    }

    /// The encoded payload, if encoding succeeded
    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.encoded.as_ref().ok()
    }

    /// Whether the payload encoded to JSON `null`
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.encoded, Ok(Value::Null))
    }

    /// Why the payload could not be encoded, if it could not
    #[inline]
    pub fn encode_error(&self) -> Option<&str> {
        self.encoded.as_ref().err().map(String::as_str)
    }

    /// The textual dump of the payload
    #[inline]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl From<Value> for ErrorData {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

impl fmt::Display for ErrorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl Serialize for ErrorData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.encoded {
            Ok(value) => value.serialize(serializer),
            Err(reason) => Err(serde::ser::Error::custom(reason)),
        }
    }
}
