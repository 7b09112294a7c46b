//! `create` and `wrap`

use crate::core::cause::Cause;
use crate::core::error::AppError;
use crate::core::options::ErrorOptions;

/// Build an error from a code and options
///
/// Causes given through [`ErrorOptions::with_causes`] are attached in order
/// through [`AppError::add_error`]. If a wrapped cause was given through
/// [`ErrorOptions::with_cause`], this behaves exactly like [`wrap`] with that
/// cause and the remaining options.
pub fn create(code: impl Into<String>, mut options: ErrorOptions) -> AppError {
    if let Some(cause) = options.cause.take() {
        return wrap(cause, code, options);
    }

    let mut error = AppError {
        code: code.into(),
        status: options.status,
        message: options.message.unwrap_or_default(),
        data: options.data,
        public: options.public,
        errors: Vec::with_capacity(options.causes.len()),
    };
    error.extend_errors(options.causes);
    error
}

/// Wrap `cause` in a new error
///
/// The cause becomes the first entry of the cause list (a structured cause
/// brings its own causes along right after it). Causes listed in `options`
/// are discarded.
///
/// A private error's message becomes the constructed message, if any,
/// followed by `": "` and the cause's rendering. A public error keeps only
/// the constructed message so the cause's text never reaches it.
pub fn wrap(
    cause: impl Into<Cause>,
    code: impl Into<String>,
    mut options: ErrorOptions,
) -> AppError {
    let cause = cause.into();
    options.cause = None;

    let mut error = create(code, options);
    error.errors.clear();

    if !error.public {
        let rendered = cause.to_string();
        error.message = if error.message.is_empty() {
            rendered
        } else {
            format!("{}: {rendered}", error.message)
        };
    }

    error.add_error(cause);
    error
}

impl AppError {
    /// Wrap an error, see [`wrap`]
    pub fn wrap(cause: impl Into<Cause>, code: impl Into<String>, options: ErrorOptions) -> Self {
        wrap(cause, code, options)
    }
}
