//! # apperror
//!
//! Structured application errors that can be raised at any layer, enriched
//! while they propagate and rendered safely at the API boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use apperror::prelude::*;
//!
//! fn load_user(id: &str) -> Result<()> {
//!     let raw: std::result::Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
//!     raw.wrap_err_with("user_load_failed", || {
//!         ErrorOptions::new().with_status(500).with_data(id.to_string())
//!     })
//! }
//!
//! let err = load_user("u-1").unwrap_err();
//! assert!(err.is_code("user_load_failed"));
//! assert_eq!(err.errors().len(), 1);
//!
//! // Private errors never leak their details over the wire.
//! let json = apperror::serialize(&err);
//! assert!(!String::from_utf8_lossy(&json).contains("disk gone"));
//! ```
//!
//! ## Features
//!
//! - **Flat causes**: nesting an [`AppError`] moves its causes up into the parent
//! - **Safe by default**: only errors marked public expose code, status,
//!   message and data when serialized
//! - **Soft failure**: serialization falls back to a fixed payload instead of erroring
//! - **Foreign errors**: anything with a string rendering can be a [`Cause`]

#![allow(clippy::module_name_repetitions)]

pub mod core;
pub mod macros;

// === Public API Exports ===

/// Main error type
pub use crate::core::AppError;

/// A nested cause: either a structured error or a foreign one
pub use crate::core::Cause;

/// Opaque payload attached to an error
pub use crate::core::ErrorData;

/// Named construction options
pub use crate::core::ErrorOptions;

/// Result type alias for `Result<T, AppError>`
pub use crate::core::Result;

/// Extension trait for wrapping foreign errors at `?` sites
pub use crate::core::ResultExt;

pub use crate::core::{create, is_code, is_status, serialize, wrap};

pub use crate::core::serialize::{
    INTERNAL_ERROR_CODE, INTERNAL_ERROR_MESSAGE, MARSHAL_FAILED_CODE, MARSHAL_FAILED_MESSAGE,
};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::{
        AppError, Cause, ErrorData, ErrorOptions, Result, ResultExt, create, is_code, is_status,
        serialize, wrap,
    };

    pub use crate::{app_error, ensure};
}
