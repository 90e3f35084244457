//! Error types for the memoizing cache.

use std::fmt;

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the cache itself.
///
/// Producer failures are never represented here. A cache is generic over the
/// producer's error type `E`, and any `E` returned by the producer reaches the
/// caller untouched. This enum only needs to convert into `E`, which is why
/// lookups require `E: From<Error>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lookup key was the null key for its type.
    ///
    /// Raised before the store or the producer is consulted. The cache state
    /// is left exactly as it was before the call.
    InvalidArgument(String),
}

impl Error {
    /// Build the error reported for a null lookup key.
    pub(crate) fn null_key() -> Self {
        Error::InvalidArgument("key must not be null".to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("Test".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Test");
    }

    #[test]
    fn test_null_key_error() {
        assert!(matches!(Error::null_key(), Error::InvalidArgument(msg) if msg.contains("null")));
    }
}
