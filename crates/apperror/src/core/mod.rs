//! Core error types and structures
//!
//! - [`error`](crate::core::error) - Main [`AppError`](crate::AppError) struct and rendering
//! - [`cause`](crate::core::cause) - [`Cause`](crate::Cause) union and foreign error conversions
//! - [`data`](crate::core::data) - Opaque payload attached to an error
//! - [`options`](crate::core::options) - Named construction options
//! - [`constructors`](crate::core::constructors) - `create` and `wrap`
//! - [`predicates`](crate::core::predicates) - `is_code` and `is_status`
//! - [`serialize`](crate::core::serialize) - Public/private wire encoding
//! - [`result`](crate::core::result) - Result type and extension traits

pub mod cause;
pub mod constructors;
pub mod data;
pub mod error;
pub mod options;
pub mod predicates;
pub mod result;
pub mod serialize;

// Re-export core types
pub use cause::Cause;
pub use constructors::{create, wrap};
pub use data::ErrorData;
pub use error::AppError;
pub use options::ErrorOptions;
pub use predicates::{is_code, is_status};
pub use result::{Result, ResultExt};
pub use serialize::serialize;
