//! Named construction options for [`create`](crate::create) and [`wrap`](crate::wrap)

use std::fmt;

use serde::Serialize;

use crate::core::cause::Cause;
use crate::core::data::ErrorData;

/// Options applied when building an [`AppError`](crate::AppError)
///
/// Every setter replaces what an earlier call set, except [`with_causes`](Self::with_causes)
/// which accumulates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorOptions {
    pub(crate) status: Option<u32>,
    pub(crate) message: Option<String>,
    pub(crate) public: bool,
    pub(crate) data: Option<ErrorData>,
    pub(crate) causes: Vec<Cause>,
    pub(crate) cause: Option<Cause>,
}

impl ErrorOptions {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status; `0` leaves it unset
    #[must_use]
    pub fn with_status(mut self, status: u32) -> Self {
        self.status = (status != 0).then_some(status);
        self
    }

    /// Set the message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the visibility flag
    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Set the payload
    #[must_use]
    pub fn with_data<T>(mut self, data: T) -> Self
    where
        T: Serialize + fmt::Debug,
    {
        self.data = ErrorData::capture(data);
        self
    }

    /// Set an already-built payload; a JSON `null` payload clears it
    #[must_use]
    pub fn with_error_data(mut self, data: impl Into<ErrorData>) -> Self {
        self.data = Some(data.into()).filter(|data| !data.is_null());
        self
    }

    /// Add causes to attach on construction
    #[must_use]
    pub fn with_causes<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cause>,
    {
        self.causes.extend(causes.into_iter().map(Into::into));
        self
    }

    /// Set the error being wrapped
    ///
    /// [`create`](crate::create) given a wrapped cause behaves like [`wrap`](crate::wrap).
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}
