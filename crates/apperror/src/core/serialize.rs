//! Wire encoding of [`AppError`]
//!
//! Only public errors expose their code, status, message and data. Private
//! errors always encode to the same generic object. Causes and the
//! visibility flag are never encoded.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::error::AppError;

/// Code written in place of a private error's code
pub const INTERNAL_ERROR_CODE: &str = "app_error";

/// Message written in place of a private error's message
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal application error occurred";

/// Code of the payload returned when encoding fails
pub const MARSHAL_FAILED_CODE: &str = "error_marshal_failed";

/// Message of the payload returned when encoding fails
pub const MARSHAL_FAILED_MESSAGE: &str = "Could not convert the returned error to json.";

const MARSHAL_FAILED_PAYLOAD: &[u8] =
    br#"{"code":"error_marshal_failed","message":"Could not convert the returned error to json."}"#;

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.public {
            let mut state = serializer.serialize_struct("AppError", 2)?;
            state.serialize_field("code", INTERNAL_ERROR_CODE)?;
            state.serialize_field("message", INTERNAL_ERROR_MESSAGE)?;
            return state.end();
        }

        let len = usize::from(!self.code.is_empty())
            + usize::from(self.status.is_some())
            + usize::from(!self.message.is_empty())
            + usize::from(self.data.is_some());
        let mut state = serializer.serialize_struct("AppError", len)?;

        if self.code.is_empty() {
            state.skip_field("code")?;
        } else {
            state.serialize_field("code", &self.code)?;
        }
        match self.status {
            Some(status) => state.serialize_field("status", &status)?,
            None => state.skip_field("status")?,
        }
        if self.message.is_empty() {
            state.skip_field("message")?;
        } else {
            state.serialize_field("message", &self.message)?;
        }
        match self.data {
            Some(ref data) => state.serialize_field("data", data)?,
            None => state.skip_field("data")?,
        }

        state.end()
    }
}

impl AppError {
    /// Encode to JSON, surfacing encode failures
    pub fn try_to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Encode to JSON
    ///
    /// Never fails: if the payload cannot be encoded, a fixed
    /// `error_marshal_failed` object is returned instead.
    pub fn to_json(&self) -> Vec<u8> {
        match self.try_to_json() {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(
                    code = %self.code,
                    error = %error,
                    "failed to serialize error, using fallback payload"
                );
                MARSHAL_FAILED_PAYLOAD.to_vec()
            }
        }
    }
}

/// Encode `error` to JSON, see [`AppError::to_json`]
pub fn serialize(error: &AppError) -> Vec<u8> {
    error.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::ErrorOptions;
    use crate::core::{create, wrap};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    fn to_value(error: &AppError) -> Value {
        serde_json::from_slice(&serialize(error)).unwrap()
    }

    #[test]
    fn test_private_error_is_generic() {
        let error = create(
            "db_down",
            ErrorOptions::new()
                .with_status(503)
                .with_message("connection refused at 10.0.0.3")
                .with_data("secret"),
        );

        assert_eq!(
            to_value(&error),
            json!({"code": INTERNAL_ERROR_CODE, "message": INTERNAL_ERROR_MESSAGE})
        );
    }

    #[test]
    fn test_public_error_omits_absent_fields() {
        let error = create("not_found", ErrorOptions::new().with_public(true));

        assert_eq!(to_value(&error), json!({"code": "not_found"}));
    }

    #[test]
    fn test_public_error_includes_everything_but_causes() {
        let error = wrap(
            "lookup failed",
            "not_found",
            ErrorOptions::new()
                .with_status(404)
                .with_message("User not found")
                .with_public(true)
                .with_data(json!({"id": "u-1"})),
        );

        assert_eq!(
            to_value(&error),
            json!({
                "code": "not_found",
                "status": 404,
                "message": "User not found",
                "data": {"id": "u-1"}
            })
        );
    }

    #[test]
    fn test_null_payload_is_omitted() {
        let error = create("c", ErrorOptions::new().with_public(true).with_data(None::<u8>));

        assert_eq!(to_value(&error), json!({"code": "c"}));
        assert_eq!(error.to_string(), "c");
    }

    #[test]
    fn test_unencodable_data_falls_back() {
        let mut data = HashMap::new();
        data.insert((1, 2), "value");
        let error = create("code", ErrorOptions::new().with_public(true).with_data(data));

        assert!(error.try_to_json().is_err());
        assert_eq!(serialize(&error), MARSHAL_FAILED_PAYLOAD);
        assert_eq!(
            to_value(&error),
            json!({"code": MARSHAL_FAILED_CODE, "message": MARSHAL_FAILED_MESSAGE})
        );
    }

    #[test]
    fn test_unencodable_data_on_private_error_is_never_touched() {
        let mut data = HashMap::new();
        data.insert((1, 2), "value");
        let error = create("code", ErrorOptions::new().with_data(data));

        assert_eq!(
            to_value(&error),
            json!({"code": INTERNAL_ERROR_CODE, "message": INTERNAL_ERROR_MESSAGE})
        );
    }
}
