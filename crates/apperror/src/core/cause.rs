//! Nested causes and foreign error conversions
//!
//! A [`Cause`] is either a structured [`AppError`] or an opaque foreign error
//! reduced to its string rendering. Foreign errors never need to expose more
//! than `Display`.

use thiserror::Error;

use crate::core::error::AppError;

/// One entry in an error's cause list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Cause {
    /// A structured error
    #[error(transparent)]
    Structured(Box<AppError>),

    /// A foreign error, kept only as its rendered text
    #[error("{0}")]
    Opaque(String),
}

impl Cause {
    /// Reduce any displayable error to an opaque cause
    pub fn foreign(error: impl std::fmt::Display) -> Self {
        Self::Opaque(error.to_string())
    }

    /// The structured error, if this is one
    #[inline]
    pub fn as_app_error(&self) -> Option<&AppError> {
        match self {
            Self::Structured(error) => Some(error.as_ref()),
            Self::Opaque(_) => None,
        }
    }

    /// Whether this cause is a structured error
    #[inline]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Compare the code of a structured cause, or the text of an opaque one
    pub fn is_code(&self, code: &str) -> bool {
        match self {
            Self::Structured(error) => error.code() == code,
            Self::Opaque(text) => text == code,
        }
    }

    /// Compare the status of a structured cause; opaque causes have none
    pub fn is_status(&self, status: u32) -> bool {
        match self {
            Self::Structured(error) => error.is_status(status),
            Self::Opaque(_) => false,
        }
    }
}

// =============================================================================
// Structured Conversions
// =============================================================================

impl From<AppError> for Cause {
    fn from(error: AppError) -> Self {
        Self::Structured(Box::new(error))
    }
}

impl From<Box<AppError>> for Cause {
    fn from(error: Box<AppError>) -> Self {
        Self::Structured(error)
    }
}

// =============================================================================
// Standard Library Error Conversions
// =============================================================================

impl From<std::io::Error> for Cause {
    fn from(error: std::io::Error) -> Self {
        Self::foreign(error)
    }
}

impl From<std::fmt::Error> for Cause {
    fn from(error: std::fmt::Error) -> Self {
        Self::foreign(error)
    }
}

impl From<std::num::ParseIntError> for Cause {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::foreign(error)
    }
}

impl From<std::num::ParseFloatError> for Cause {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::foreign(error)
    }
}

impl From<std::str::Utf8Error> for Cause {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::foreign(error)
    }
}

impl From<std::string::FromUtf8Error> for Cause {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::foreign(error)
    }
}

// =============================================================================
// Third-party Crate Error Conversions
// =============================================================================

impl From<serde_json::Error> for Cause {
    fn from(error: serde_json::Error) -> Self {
        Self::foreign(error)
    }
}

// =============================================================================
// Boxed and String Conversions
// =============================================================================

/// Boxed errors that are really an [`AppError`] or a [`Cause`] stay structured.
impl From<Box<dyn std::error::Error + Send + Sync>> for Cause {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match error.downcast::<AppError>() {
            Ok(app_error) => Self::Structured(app_error),
            Err(error) => match error.downcast::<Self>() {
                Ok(cause) => *cause,
                Err(error) => Self::foreign(error),
            },
        }
    }
}

impl From<&str> for Cause {
    fn from(error: &str) -> Self {
        Self::Opaque(error.to_string())
    }
}

impl From<String> for Cause {
    fn from(error: String) -> Self {
        Self::Opaque(error)
    }
}
