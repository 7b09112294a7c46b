//! Main [`AppError`] struct, cause splicing and text rendering

// Standard library
use std::fmt;

// External dependencies
use serde::Serialize;

// Internal crates
use crate::core::cause::Cause;
use crate::core::data::ErrorData;

/// Structured application error
///
/// Carries a machine-readable code, an optional status, a message, an
/// optional payload, a visibility flag and a flat list of causes.
///
/// Rendering through [`Display`](fmt::Display) always shows the current code,
/// status, message and data. Only serialization looks at [`is_public`](Self::is_public).
///
/// # Cause list
/// The cause list is kept one level deep. When a structured error is added as
/// a cause, its own causes are taken out of it and appended right after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppError {
    pub(crate) code: String,
    pub(crate) status: Option<u32>,
    pub(crate) message: String,
    pub(crate) data: Option<ErrorData>,
    pub(crate) public: bool,
    pub(crate) errors: Vec<Cause>,
}

impl AppError {
    /// Create a new [`AppError`] with the given code and nothing else
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Set the status; `0` clears it
    #[must_use]
    pub fn with_status(mut self, status: u32) -> Self {
        self.status = (status != 0).then_some(status);
        self
    }

    /// Set the message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the payload, replacing any previous one
    #[must_use]
    pub fn with_data<T>(mut self, data: T) -> Self
    where
        T: Serialize + fmt::Debug,
    {
        self.data = ErrorData::capture(data);
        self
    }

    /// Mark the error as safe (or unsafe) to expose to external callers
    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Append a cause, see [`add_error`](Self::add_error)
    #[must_use]
    pub fn with_error(mut self, error: impl Into<Cause>) -> Self {
        self.add_error(error);
        self
    }

    /// Get the error code
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the status, if set
    #[inline]
    pub fn status(&self) -> Option<u32> {
        self.status
    }

    /// Get the message
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the payload
    #[inline]
    pub fn data(&self) -> Option<&ErrorData> {
        self.data.as_ref()
    }

    /// Whether the error may be exposed to external callers
    #[inline]
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// The flat cause list
    #[inline]
    pub fn errors(&self) -> &[Cause] {
        &self.errors
    }

    /// Take the cause list out of this error, leaving it empty
    pub fn take_errors(&mut self) -> Vec<Cause> {
        std::mem::take(&mut self.errors)
    }

    /// Append a cause to the cause list
    ///
    /// A structured cause gives up its own causes: they are taken out of it
    /// and appended right after it, in their original order.
    pub fn add_error(&mut self, error: impl Into<Cause>) {
        let cause: Cause = error.into();
        match cause {
            Cause::Structured(mut nested) => {
                let spliced = nested.take_errors();
                tracing::trace!(
                    parent = %self.code,
                    cause = %nested.code,
                    spliced = spliced.len(),
                    "splicing structured cause"
                );
                self.errors.push(Cause::Structured(nested));
                self.errors.extend(spliced);
            }
            opaque @ Cause::Opaque(_) => self.errors.push(opaque),
        }
    }

    /// Append several causes, each through [`add_error`](Self::add_error)
    pub fn extend_errors<I>(&mut self, errors: I)
    where
        I: IntoIterator,
        I::Item: Into<Cause>,
    {
        for error in errors {
            self.add_error(error);
        }
    }

    /// Whether the code equals `code`
    #[inline]
    pub fn is_code(&self, code: &str) -> bool {
        self.code == code
    }

    /// Whether the status is set and equals `status`
    #[inline]
    pub fn is_status(&self, status: u32) -> bool {
        self.status == Some(status)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;

        if let Some(status) = self.status {
            write!(f, "({status})")?;
        }

        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        if let Some(ref data) = self.data {
            write!(f, "\nError data: {data}")?;
        }

        Ok(())
    }
}
