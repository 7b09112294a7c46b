//! Code and status checks that work on any error

use std::error::Error;

use crate::core::cause::Cause;
use crate::core::error::AppError;

/// Whether `error` carries the given code
///
/// Structured errors ([`AppError`], or a [`Cause`] holding one) compare their
/// code. Any other error compares its rendered text against `code`.
pub fn is_code(error: &(dyn Error + 'static), code: &str) -> bool {
    if let Some(app_error) = error.downcast_ref::<AppError>() {
        return app_error.is_code(code);
    }
    if let Some(cause) = error.downcast_ref::<Cause>() {
        return cause.is_code(code);
    }
    error.to_string() == code
}

/// Whether `error` is a structured error with the given status
///
/// Foreign errors have no status and never match.
pub fn is_status(error: &(dyn Error + 'static), status: u32) -> bool {
    if let Some(app_error) = error.downcast_ref::<AppError>() {
        return app_error.is_status(status);
    }
    error
        .downcast_ref::<Cause>()
        .is_some_and(|cause| cause.is_status(status))
}
