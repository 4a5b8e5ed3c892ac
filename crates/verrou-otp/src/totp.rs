//! RFC 6238 TOTP engine.
//!
//! Converts wall-clock time into an HOTP counter
//! (`floor((t - T0) / time_step)`), validates codes within a window of
//! adjacent steps, and builds `otpauth://totp/` provisioning URIs.
//!
//! Times are Unix seconds as `f64` so that fractional epochs and steps are
//! representable; [`unix_now`] reads the system clock.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::compare::constant_time_eq;
use crate::hotp::generate_hotp;
use crate::uri::{self, UriKind};
use crate::{Algorithm, Digits, HmacProvider, OtpError, Secret};

// ── Constants ───────────────────────────────────────────────────────

/// Default TOTP period in seconds (RFC 6238 §4).
pub const DEFAULT_TIME_STEP: f64 = 30.0;

/// Default validation window: ±1 step (RFC 6238 §5.2).
pub const DEFAULT_WINDOW: u32 = 1;

/// Current Unix time in seconds. A clock set before 1970 reads as `0.0`.
#[must_use]
pub fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64())
}

// ── Parameters ──────────────────────────────────────────────────────

/// Unvalidated TOTP parameters, as read from configuration.
///
/// Every field has a default, so partial documents deserialize:
///
/// ```
/// use verrou_otp::{Algorithm, TotpParams};
///
/// let params: TotpParams = serde_json::from_str(r#"{"digits": 8}"#).unwrap();
/// assert_eq!(params.digits, 8);
/// assert_eq!(params.algorithm, Algorithm::Sha1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TotpParams {
    /// Step duration in seconds; must be finite and > 0.
    pub time_step: f64,
    /// Number of output digits; must be in `6..=8`.
    pub digits: u8,
    /// HMAC algorithm.
    pub algorithm: Algorithm,
    /// Epoch offset T0 in Unix seconds; must be finite.
    pub epoch: f64,
}

impl Default for TotpParams {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            digits: Digits::SIX.value(),
            algorithm: Algorithm::Sha1,
            epoch: 0.0,
        }
    }
}

// ── Configuration ───────────────────────────────────────────────────

/// Validated, immutable TOTP configuration.
#[derive(Clone, Debug)]
pub struct TotpConfig {
    secret: Secret,
    time_step: f64,
    digits: Digits,
    algorithm: Algorithm,
    epoch: f64,
}

impl TotpConfig {
    /// Build a configuration from raw secret bytes.
    ///
    /// # Errors
    /// Returns `OtpError::EmptySecret`, `OtpError::InvalidDigits`,
    /// `OtpError::InvalidTimeStep` or `OtpError::InvalidEpoch`.
    pub fn new(secret: &[u8], params: TotpParams) -> Result<Self, OtpError> {
        Self::build(Secret::new(secret), params)
    }

    /// Build a configuration from a base32-encoded secret.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidBase32String` if the secret does not decode,
    /// otherwise the same errors as [`TotpConfig::new`].
    pub fn from_base32(secret: &str, params: TotpParams) -> Result<Self, OtpError> {
        Self::build(Secret::from_base32(secret), params)
    }

    fn build(secret: Result<Secret, OtpError>, params: TotpParams) -> Result<Self, OtpError> {
        let config = secret.and_then(|secret| {
            let digits = Digits::new(params.digits)?;
            if !(params.time_step.is_finite() && params.time_step > 0.0) {
                return Err(OtpError::InvalidTimeStep(params.time_step));
            }
            if !params.epoch.is_finite() {
                return Err(OtpError::InvalidEpoch(params.epoch));
            }
            Ok(Self {
                secret,
                time_step: params.time_step,
                digits,
                algorithm: params.algorithm,
                epoch: params.epoch,
            })
        });
        if let Err(e) = &config {
            tracing::debug!(error = %e, "rejected TOTP configuration");
        }
        config
    }

    /// Shared secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Step duration in seconds.
    #[must_use]
    pub const fn time_step(&self) -> f64 {
        self.time_step
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

    /// Epoch offset T0 in Unix seconds.
    #[must_use]
    pub const fn epoch(&self) -> f64 {
        self.epoch
    }

    // ── Counter ─────────────────────────────────────────────────────

    /// Time-step counter at `unix_time`: `floor((t - T0) / time_step)`.
    ///
    /// Times before the epoch clamp to 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn counter_at(&self, unix_time: f64) -> u64 {
        // Float-to-int `as` saturates: negative and NaN become 0.
        ((unix_time - self.epoch) / self.time_step).floor() as u64
    }

    /// Time-step counter now.
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.counter_at(unix_now())
    }

    /// Seconds until the step containing `unix_time` ends, in `(0, time_step]`.
    #[must_use]
    pub fn time_remaining_at(&self, unix_time: f64) -> f64 {
        let elapsed = (unix_time - self.epoch).rem_euclid(self.time_step);
        let remaining = self.time_step - elapsed;
        if remaining > 0.0 {
            remaining
        } else {
            self.time_step
        }
    }

    /// Seconds until the current step ends.
    #[must_use]
    pub fn time_remaining(&self) -> f64 {
        self.time_remaining_at(unix_now())
    }

    // ── Generation ──────────────────────────────────────────────────

    /// Generate the code valid at `unix_time`.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub fn generate_at<H>(&self, unix_time: f64, hmac: &H) -> Result<String, H::Error>
    where
        H: HmacProvider + ?Sized,
    {
        self.generate_for_counter(self.counter_at(unix_time), hmac)
    }

    /// Generate the code valid now.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub fn generate<H>(&self, hmac: &H) -> Result<String, H::Error>
    where
        H: HmacProvider + ?Sized,
    {
        self.generate_at(unix_now(), hmac)
    }

    fn generate_for_counter<H>(&self, counter: u64, hmac: &H) -> Result<String, H::Error>
    where
        H: HmacProvider + ?Sized,
    {
        generate_hotp(self.secret.expose(), self.digits, self.algorithm, counter, hmac)
    }

    // ── Validation ──────────────────────────────────────────────────

    /// Validate `candidate` at `unix_time` with ±`window` steps.
    ///
    /// Steps are checked from `T - window` to `T + window` and the first
    /// constant-time match wins. Steps that would fall outside the `u64`
    /// counter range are skipped. A larger window tolerates more clock
    /// drift but widens the replay surface.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub fn validate_at<H>(
        &self,
        candidate: &str,
        unix_time: f64,
        window: u32,
        hmac: &H,
    ) -> Result<bool, H::Error>
    where
        H: HmacProvider + ?Sized,
    {
        let current = self.counter_at(unix_time);
        let window = i64::from(window);

        for offset in window.wrapping_neg()..=window {
            let Some(step) = current.checked_add_signed(offset) else {
                continue;
            };
            let expected = self.generate_for_counter(step, hmac)?;
            if constant_time_eq(&expected, candidate) {
                tracing::debug!(step_offset = offset, "TOTP code accepted");
                return Ok(true);
            }
        }

        tracing::debug!(window, "TOTP code rejected");
        Ok(false)
    }

    /// Validate `candidate` against the current time with ±`window` steps.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub fn validate<H>(&self, candidate: &str, window: u32, hmac: &H) -> Result<bool, H::Error>
    where
        H: HmacProvider + ?Sized,
    {
        self.validate_at(candidate, unix_now(), window, hmac)
    }

    // ── Provisioning ────────────────────────────────────────────────

    /// Build an `otpauth://totp/` URI for enrolling this configuration.
    ///
    /// `period` carries the time step truncated to whole seconds.
    #[must_use]
    pub fn provisioning_uri(&self, label: &str, issuer: Option<&str>) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let period = self.time_step.trunc() as u64;
        uri::build(
            UriKind::Totp { period },
            label,
            issuer,
            &self.secret,
            self.algorithm,
            self.digits,
        )
    }
}

// ── Tests ───────────────────────────────────────────────────────────
