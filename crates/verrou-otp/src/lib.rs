//! `verrou-otp`: RFC 4226 HOTP and RFC 6238 TOTP engine for VERROU.
//!
//! The engine never links an HMAC implementation: every generation or
//! validation call takes an [`HmacProvider`] supplied by the caller.
//! Configurations are validated once at construction and immutable
//! afterwards, so they can be shared freely across threads.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod algorithm;
pub mod digits;
pub mod secret;

pub mod base32;
pub mod compare;
pub mod hmac;

pub mod hotp;
pub mod totp;

mod uri;

#[cfg(test)]
mod testing;

pub use algorithm::Algorithm;
pub use compare::constant_time_eq;
pub use digits::{Digits, MAX_DIGITS, MIN_DIGITS};
pub use error::OtpError;
pub use hmac::HmacProvider;
pub use hotp::{dynamic_truncate, generate_hotp, HotpConfig, DEFAULT_LOOK_AHEAD};
pub use secret::Secret;
pub use totp::{unix_now, TotpConfig, TotpParams, DEFAULT_TIME_STEP, DEFAULT_WINDOW};
