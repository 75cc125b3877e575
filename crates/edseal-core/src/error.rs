//! Error types for edseal operations

use thiserror::Error;

/// Errors returned by key conversion, key exchange and sealing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SealError {
    // Input errors
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Malformed sealed message: need at least {minimum} bytes, got {actual}")]
    MalformedInput { minimum: usize, actual: usize },

    // Curve errors
    #[error("Public key is not a valid curve point")]
    InvalidPoint,

    #[error("Weak shared secret: peer key has low order")]
    WeakSharedSecret,

    // Crypto errors
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Payload too large: {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Random source unavailable")]
    EntropyUnavailable,
}

/// Result type for edseal operations
pub type SealResult<T> = Result<T, SealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SealError::InvalidKeyLength {
            expected: 32,
            actual: 31,
        };
        assert_eq!(err.to_string(), "Invalid key length: expected 32, got 31");

        let err = SealError::MalformedInput {
            minimum: 40,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Malformed sealed message: need at least 40 bytes, got 3"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(SealError::InvalidPoint, SealError::InvalidPoint);
        assert_ne!(SealError::InvalidPoint, SealError::WeakSharedSecret);
    }
}
