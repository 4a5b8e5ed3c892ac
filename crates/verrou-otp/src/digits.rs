//! Validated OTP digit count.

use serde::{Deserialize, Serialize};

use crate::OtpError;

/// Smallest accepted digit count.
pub const MIN_DIGITS: u8 = 6;

/// Largest accepted digit count.
pub const MAX_DIGITS: u8 = 8;

/// Number of digits in an OTP code, guaranteed to lie in `6..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digits(u8);

impl Digits {
    /// 6-digit code (standard).
    pub const SIX: Self = Self(6);
    /// 7-digit code.
    pub const SEVEN: Self = Self(7);
    /// 8-digit code.
    pub const EIGHT: Self = Self(8);

    /// Validate a raw digit count.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidDigits` if `digits` is outside `6..=8`.
    pub const fn new(digits: u8) -> Result<Self, OtpError> {
        if digits < MIN_DIGITS || digits > MAX_DIGITS {
            return Err(OtpError::InvalidDigits(digits));
        }
        Ok(Self(digits))
    }

    /// Return the numeric digit count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Return the modulus value (10^digits) for truncation.
    #[must_use]
    pub const fn modulus(self) -> u32 {
        match self.0 {
            6 => 1_000_000,
            7 => 10_000_000,
            _ => 100_000_000,
        }
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self::SIX
    }
}

impl TryFrom<u8> for Digits {
    type Error = OtpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digits> for u8 {
    fn from(digits: Digits) -> Self {
        digits.0
    }
}
