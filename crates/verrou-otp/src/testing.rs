//! ring-backed HMAC provider shared by the unit tests.

use std::convert::Infallible;

use ring::hmac;

use crate::Algorithm;

pub const RFC_SECRET_SHA1: &[u8] = b"12345678901234567890";
pub const RFC_SECRET_SHA256: &[u8] = b"12345678901234567890123456789012";
pub const RFC_SECRET_SHA512: &[u8] =
    b"1234567890123456789012345678901234567890123456789012345678901234";

pub fn ring_hmac(algorithm: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Infallible> {
    let algorithm = match algorithm {
        Algorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
        Algorithm::Sha256 => hmac::HMAC_SHA256,
        Algorithm::Sha512 => hmac::HMAC_SHA512,
    };
    let key = hmac::Key::new(algorithm, key);
    Ok(hmac::sign(&key, message).as_ref().to_vec())
}
