//! `verrou-otp-ring`: `ring::hmac` backend for `verrou-otp`.
//!
//! ```
//! use verrou_otp::{TotpConfig, TotpParams};
//! use verrou_otp_ring::RingHmac;
//!
//! let config = TotpConfig::new(b"12345678901234567890", TotpParams {
//!     digits: 8,
//!     ..TotpParams::default()
//! })
//! .unwrap();
//! assert_eq!(config.generate_at(59.0, &RingHmac).unwrap(), "94287082");
//! ```

use std::convert::Infallible;

use ring::hmac;
use verrou_otp::{Algorithm, HmacProvider};

/// HMAC provider computing digests with `ring`.
///
/// Infallible: `ring` accepts keys of any length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RingHmac;

impl RingHmac {
    /// Map to the corresponding `ring::hmac::Algorithm`.
    fn to_ring_algorithm(algorithm: Algorithm) -> hmac::Algorithm {
        match algorithm {
            Algorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Algorithm::Sha256 => hmac::HMAC_SHA256,
            Algorithm::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

impl HmacProvider for RingHmac {
    type Error = Infallible;

    fn hmac(&self, algorithm: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Infallible> {
        let key = hmac::Key::new(Self::to_ring_algorithm(algorithm), key);
        Ok(hmac::sign(&key, message).as_ref().to_vec())
    }
}
