//! Injected HMAC capability.
//!
//! The engine is backend agnostic: callers supply an [`HmacProvider`]
//! (a type implementing the trait, or a plain closure) on every
//! generation or validation call.

use crate::Algorithm;

/// Computes `HMAC(algorithm, key, message)`.
///
/// # Contract
/// The returned digest must be exactly [`Algorithm::digest_len`] bytes long.
/// The engine does not check this; a digest too short for dynamic
/// truncation makes generation panic.
pub trait HmacProvider {
    /// Fault raised by the backend, propagated to the caller unchanged.
    type Error;

    /// Compute the HMAC of `message` under `key`.
    ///
    /// # Errors
    /// Whatever the backend reports; the engine does not recover from it.
    fn hmac(&self, algorithm: Algorithm, key: &[u8], message: &[u8])
        -> Result<Vec<u8>, Self::Error>;
}

impl<F, E> HmacProvider for F
where
    F: Fn(Algorithm, &[u8], &[u8]) -> Result<Vec<u8>, E>,
{
    type Error = E;

    fn hmac(&self, algorithm: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, E> {
        self(algorithm, key, message)
    }
}
