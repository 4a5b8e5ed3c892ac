//! `otpauth://` provisioning URI construction.
//!
//! Format (Key Uri Format used by authenticator apps):
//! `otpauth://<type>/<label>?secret=<base32>&algorithm=<ALG>&digits=<d>&<period|counter>=<n>[&issuer=<issuer>]`

use urlencoding::encode;

use crate::{Algorithm, Digits, Secret};

/// Moving factor carried by the URI.
#[derive(Clone, Copy, Debug)]
pub(crate) enum UriKind {
    /// `otpauth://totp/...&period=<seconds>`
    Totp { period: u64 },
    /// `otpauth://hotp/...&counter=<n>`
    Hotp { counter: u64 },
}

pub(crate) fn build(
    kind: UriKind,
    label: &str,
    issuer: Option<&str>,
    secret: &Secret,
    algorithm: Algorithm,
    digits: Digits,
) -> String {
    let (otp_type, factor_name, factor) = match kind {
        UriKind::Totp { period } => ("totp", "period", period),
        UriKind::Hotp { counter } => ("hotp", "counter", counter),
    };
    let mut uri = format!(
        "otpauth://{otp_type}/{label}?secret={secret}&algorithm={algorithm}&digits={digits}&{factor_name}={factor}",
        label = encode(label),
        secret = secret.to_base32(),
        digits = digits.value(),
    );
    if let Some(issuer) = issuer {
        uri.push_str("&issuer=");
        uri.push_str(&encode(issuer));
    }
    uri
}
