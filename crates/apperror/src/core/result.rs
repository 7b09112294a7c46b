//! Result type and extension traits

use crate::core::cause::Cause;
use crate::core::constructors::wrap;
use crate::core::error::AppError;
use crate::core::options::ErrorOptions;

/// Result type for operations failing with an [`AppError`]
pub type Result<T> = std::result::Result<T, AppError>;

/// Extension trait for wrapping errors at `?` sites
pub trait ResultExt<T> {
    /// Wrap the error under `code`
    fn wrap_err(self, code: impl Into<String>) -> Result<T>;

    /// Wrap the error under `code`, building the options lazily
    fn wrap_err_with<F>(self, code: impl Into<String>, f: F) -> Result<T>
    where
        F: FnOnce() -> ErrorOptions;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Cause>,
{
    fn wrap_err(self, code: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(e, code, ErrorOptions::new()))
    }

    fn wrap_err_with<F>(self, code: impl Into<String>, f: F) -> Result<T>
    where
        F: FnOnce() -> ErrorOptions,
    {
        self.map_err(|e| wrap(e, code, f()))
    }
}
