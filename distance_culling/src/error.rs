//! Error types for the distance culling subsystem
//!
//! Almost everything in a tick is infallible by construction. The errors
//! below cover the few places where a collaborator or a caller can hand
//! the subsystem something it cannot use.

use std::fmt;

/// Result type for distance culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Distance culling errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An external transform handle is not known to the transform provider
    InvalidHandle(String),

    /// A configuration value is out of its valid range
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHandle(msg) => write!(f, "Invalid transform handle: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an [`Error`] variant from a format string and log it at ERROR level
///
/// # Example
///
/// ```ignore
/// let err = engine_err!(InvalidHandle, "culling::TransformStore", "{:?} was removed", handle);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::culling::Error::$variant(message)
    }};
}

/// Log an error and return it from the current function
#[macro_export]
macro_rules! engine_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($variant, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
