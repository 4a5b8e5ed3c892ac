//! RFC 4226 HOTP generation engine.
//!
//! [`generate_hotp`] is the primitive shared by HOTP and TOTP; [`HotpConfig`]
//! bundles a validated secret, digit count and algorithm.

use crate::compare::constant_time_eq;
use crate::uri::{self, UriKind};
use crate::{Algorithm, Digits, HmacProvider, OtpError, Secret};

/// Default HOTP look-ahead: only the expected counter is accepted.
pub const DEFAULT_LOOK_AHEAD: u32 = 0;

/// Dynamic Truncation (RFC 4226 §5.3).
///
/// Reads 4 bytes at the offset given by the low nibble of the last digest
/// byte and clears the sign bit, yielding a 31-bit value.
///
/// # Panics
/// Panics if `digest` is empty or shorter than `offset + 4`. A correct
/// HMAC provider returns at least 20 bytes, so this only fires when the
/// provider breaks its contract.
#[must_use]
pub fn dynamic_truncate(digest: &[u8]) -> u32 {
    let Some(&last) = digest.last() else {
        panic!("HMAC provider returned an empty digest");
    };
    let offset = usize::from(last & 0x0F);
    let window: Option<[u8; 4]> = digest
        .get(offset..offset.wrapping_add(4))
        .and_then(|bytes| bytes.try_into().ok());
    let Some(bytes) = window else {
        panic!(
            "HMAC digest of {} bytes is too short for truncation at offset {offset}",
            digest.len()
        );
    };
    u32::from_be_bytes(bytes) & 0x7FFF_FFFF
}

/// Generate an HOTP code per RFC 4226.
///
/// # Arguments
/// - `secret`: Shared secret key bytes
/// - `digits`: Number of output digits
/// - `algorithm`: HMAC algorithm forwarded to `hmac`
/// - `counter`: Moving factor, serialized as 8 bytes big-endian (RFC 4226 §5.2)
/// - `hmac`: Injected HMAC capability
///
/// # Errors
/// Returns the provider's error unchanged if the HMAC computation fails.
///
/// # Panics
/// Panics if the provider returns a digest too short for dynamic truncation
/// (see [`dynamic_truncate`]).
pub fn generate_hotp<H>(
    secret: &[u8],
    digits: Digits,
    algorithm: Algorithm,
    counter: u64,
    hmac: &H,
) -> Result<String, H::Error>
where
    H: HmacProvider + ?Sized,
{
    let digest = hmac.hmac(algorithm, secret, &counter.to_be_bytes())?;
    let binary_code = dynamic_truncate(&digest);

    // modulus is 10^6..10^8, never zero.
    #[allow(clippy::arithmetic_side_effects)]
    let code = binary_code % digits.modulus();
    let width = usize::from(digits.value());

    Ok(format!("{code:0>width$}"))
}

/// Validated, immutable HOTP configuration.
#[derive(Clone, Debug)]
pub struct HotpConfig {
    secret: Secret,
    digits: Digits,
    algorithm: Algorithm,
}

impl HotpConfig {
    /// Build a configuration from raw secret bytes.
    ///
    /// # Errors
    /// Returns `OtpError::EmptySecret` or `OtpError::InvalidDigits`.
    pub fn new(secret: &[u8], digits: u8, algorithm: Algorithm) -> Result<Self, OtpError> {
        Self::build(Secret::new(secret), digits, algorithm)
    }

    /// Build a configuration from a base32-encoded secret.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidBase32String` if the secret does not decode,
    /// otherwise the same errors as [`HotpConfig::new`].
    pub fn from_base32(secret: &str, digits: u8, algorithm: Algorithm) -> Result<Self, OtpError> {
        Self::build(Secret::from_base32(secret), digits, algorithm)
    }

    fn build(
        secret: Result<Secret, OtpError>,
        digits: u8,
        algorithm: Algorithm,
    ) -> Result<Self, OtpError> {
        let config = secret.and_then(|secret| {
            Ok(Self {
                secret,
                digits: Digits::new(digits)?,
                algorithm,
            })
        });
        if let Err(e) = &config {
            tracing::debug!(error = %e, "rejected HOTP configuration");
        }
        config
    }

    /// Shared secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Digit count.
    #[must_use]
    pub const fn digits(&self) -> Digits {
        self.digits
    }

    /// HMAC algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Generate the code for `counter`.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub fn generate<H>(&self, counter: u64, hmac: &H) -> Result<String, H::Error>
    where
        H: HmacProvider + ?Sized,
    {
        generate_hotp(self.secret.expose(), self.digits, self.algorithm, counter, hmac)
    }

    /// Validate `candidate` against `counter ..= counter + look_ahead`.
    ///
    /// Counters are tried in ascending order with constant-time comparison.
    /// Returns the matching counter so the caller can store `matched + 1`
    /// as the next expected value, or `None` if nothing in the range matches.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub fn validate<H>(
        &self,
        candidate: &str,
        counter: u64,
        look_ahead: u32,
        hmac: &H,
    ) -> Result<Option<u64>, H::Error>
    where
        H: HmacProvider + ?Sized,
    {
        let end = counter.saturating_add(u64::from(look_ahead));
        let mut step = counter;
        loop {
            let expected = self.generate(step, hmac)?;
            if constant_time_eq(&expected, candidate) {
                tracing::debug!(drift = step.wrapping_sub(counter), "HOTP code accepted");
                return Ok(Some(step));
            }
            if step == end {
                break;
            }
            step = step.wrapping_add(1);
        }
        tracing::debug!(look_ahead, "HOTP code rejected");
        Ok(None)
    }

    /// Build an `otpauth://hotp/` URI for enrolling this configuration.
    #[must_use]
    pub fn provisioning_uri(&self, label: &str, issuer: Option<&str>, counter: u64) -> String {
        uri::build(
            UriKind::Hotp { counter },
            label,
            issuer,
            &self.secret,
            self.algorithm,
            self.digits,
        )
    }
}
