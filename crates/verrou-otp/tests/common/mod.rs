//! Shared helpers for `verrou-otp` integration tests.

use std::convert::Infallible;

use ring::hmac;
use verrou_otp::Algorithm;

/// HMAC provider backed by `ring`, standing in for a caller-supplied backend.
pub fn ring_hmac(algorithm: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Infallible> {
    let algorithm = match algorithm {
        Algorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
        Algorithm::Sha256 => hmac::HMAC_SHA256,
        Algorithm::Sha512 => hmac::HMAC_SHA512,
    };
    let key = hmac::Key::new(algorithm, key);
    Ok(hmac::sign(&key, message).as_ref().to_vec())
}
