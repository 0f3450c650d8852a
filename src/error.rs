//! Error handling for ECIES operations.

use core::fmt;

/// Error type for ECIES operations.
#[derive(Debug)]
pub enum Error {
    /// Key generation failed (random source failure, invalid private scalar).
    Generation(&'static str),
    /// Malformed or truncated ciphertext envelope.
    Format(&'static str),
    /// A point encoding failed on-curve or non-identity validation.
    InvalidPoint(&'static str),
    /// The computed ECDH shared secret is the identity point.
    DegenerateSecret,
    /// A KDF strategy failed or produced insufficient key material.
    Kdf(&'static str),
    /// Symmetric cipher or MAC primitive failure.
    Cipher(&'static str),
    /// MAC verification failed. Tampering, a wrong key, and a mismatched KDF
    /// are intentionally indistinguishable here.
    Authentication,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Generation(reason) => write!(f, "ECIES key generation failed: {}", reason),
            Error::Format(reason) => write!(f, "Invalid ECIES ciphertext format: {}", reason),
            Error::InvalidPoint(reason) => write!(f, "Invalid curve point: {}", reason),
            Error::DegenerateSecret => write!(f, "ECDH produced a degenerate shared secret"),
            Error::Kdf(reason) => write!(f, "ECIES key derivation failed: {}", reason),
            Error::Cipher(reason) => write!(f, "ECIES symmetric primitive failed: {}", reason),
            Error::Authentication => write!(f, "ECIES authentication failed"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for ECIES operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_reason() {
        let err = Error::Format("tag truncated");
        assert_eq!(
            err.to_string(),
            "Invalid ECIES ciphertext format: tag truncated"
        );
    }

    #[test]
    fn authentication_display_is_opaque() {
        // The message must not hint at which check failed.
        assert_eq!(
            Error::Authentication.to_string(),
            "ECIES authentication failed"
        );
    }
}
