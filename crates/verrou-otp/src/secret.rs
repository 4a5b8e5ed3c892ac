//! Shared-secret container for OTP configurations.
//!
//! Wraps [`SecretSlice<u8>`] from the `secrecy` crate:
//! - Zeroization on drop
//! - Masked `Debug` output (`Secret(***)`)
//! - Non-empty by construction

use std::fmt;

use secrecy::{ExposeSecret, SecretSlice};
use zeroize::Zeroize;

use crate::{base32, OtpError};

/// Non-empty shared secret bytes.
pub struct Secret {
    inner: SecretSlice<u8>,
}

impl Secret {
    /// Copy `data` into a new secret.
    ///
    /// The caller should zeroize the source data after calling this.
    ///
    /// # Errors
    /// Returns `OtpError::EmptySecret` if `data` is empty.
    pub fn new(data: &[u8]) -> Result<Self, OtpError> {
        if data.is_empty() {
            return Err(OtpError::EmptySecret);
        }
        Ok(Self {
            inner: data.to_vec().into(),
        })
    }

    /// Decode a base32 secret as shown by authenticator setup screens.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidBase32String` if the text does not decode,
    /// or `OtpError::EmptySecret` if it decodes to zero bytes.
    pub fn from_base32(text: &str) -> Result<Self, OtpError> {
        let mut bytes = base32::decode(text)?;
        let result = Self::new(&bytes);
        bytes.zeroize();
        result
    }

    /// Expose the secret bytes for HMAC computation.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    /// Return the padded base32 encoding of the secret.
    #[must_use]
    pub fn to_base32(&self) -> String {
        base32::encode(self.expose())
    }

    /// Length of the secret in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    /// Always `false`: an empty secret cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl Clone for Secret {
    fn clone(&self) -> Self {
        Self {
            inner: self.expose().to_vec().into(),
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}
