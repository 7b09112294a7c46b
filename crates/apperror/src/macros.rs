//! Convenient error macros for common patterns

/// Create an [`AppError`](crate::AppError) from a code and an optional formatted message
///
/// # Examples
///
/// ```rust
/// use apperror::app_error;
///
/// let error = app_error!("not_found");
/// assert_eq!(error.to_string(), "not_found");
///
/// let id = "user-123";
/// let error = app_error!("not_found", "no user {}", id);
/// assert_eq!(error.message(), "no user user-123");
/// ```
#[macro_export]
macro_rules! app_error {
    ($code:expr) => {
        $crate::AppError::new($code)
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::AppError::new($code).with_message(format!($($arg)+))
    };
}

/// Ensure a condition is true or return an error
///
/// # Examples
///
/// ```rust
/// use apperror::{app_error, ensure};
///
/// fn validate_age(age: u32) -> apperror::Result<()> {
///     ensure!(age >= 18, app_error!("too_young", "age {} is below 18", age).with_public(true));
///     ensure!(age <= 120, app_error!("invalid_age"));
///     Ok(())
/// }
///
/// assert!(validate_age(30).is_ok());
/// assert!(validate_age(12).unwrap_err().is_code("too_young"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $error:expr) => {
        if !($condition) {
            return Err(::core::convert::Into::into($error));
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_app_error_macro() {
        let error = app_error!("code");
        assert_eq!(error.code(), "code");
        assert!(error.message().is_empty());

        let count = 42;
        let error = app_error!("code", "failed to process {} items", count);
        assert_eq!(error.to_string(), "code: failed to process 42 items");
    }

    #[test]
    fn test_ensure_macro() {
        fn validate_age(age: u32) -> crate::Result<()> {
            ensure!(age >= 18, app_error!("too_young").with_status(422));
            Ok(())
        }

        assert!(validate_age(20).is_ok());
        assert!(validate_age(16).unwrap_err().is_status(422));
    }
}
