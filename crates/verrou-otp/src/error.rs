//! Error types for `verrou-otp`.

use thiserror::Error;

/// Errors produced while building an OTP configuration or decoding a secret.
///
/// Generation and validation never return this type: they only surface
/// the error of the injected HMAC provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OtpError {
    /// The shared secret has zero length.
    #[error("secret must not be empty")]
    EmptySecret,

    /// Requested digit count is outside `6..=8`.
    #[error("digits must be 6-8, got {0}")]
    InvalidDigits(u8),

    /// TOTP time step is zero, negative or not a finite number.
    #[error("time step must be a positive number of seconds, got {0}")]
    InvalidTimeStep(f64),

    /// TOTP epoch offset (T0) is not a finite number.
    #[error("epoch offset must be a finite number of seconds, got {0}")]
    InvalidEpoch(f64),

    /// Base32 text contains a character outside the RFC 4648 alphabet.
    #[error("invalid base32 string: unexpected character '{character}' at position {position}")]
    InvalidBase32String {
        /// The offending character, as supplied by the caller.
        character: char,
        /// Index of the character in the normalized (separator-free) input.
        position: usize,
    },

    /// Algorithm name not recognised when parsing an [`crate::Algorithm`].
    #[error("unknown HMAC algorithm: {0}")]
    UnknownAlgorithm(String),
}
