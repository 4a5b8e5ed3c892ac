//! RFC 4648 §5 base32 codec for shared secrets.
//!
//! Encoding is canonical (uppercase, `=`-padded to a multiple of 8).
//! Decoding is tolerant of what users paste from authenticator setup
//! screens: whitespace and dashes are ignored, case does not matter and
//! trailing padding is optional.

use crate::OtpError;

/// RFC 4648 base32 alphabet.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Padding character.
const PAD: char = '=';

/// Characters per encoded block (5 bytes → 8 characters).
const BLOCK_CHARS: usize = 8;

/// Encode bytes to padded base32 text.
///
/// Empty input encodes to an empty string.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut result = encode_unpadded(data);
    let padded_len = result.len().div_ceil(BLOCK_CHARS).saturating_mul(BLOCK_CHARS);
    while result.len() < padded_len {
        result.push(PAD);
    }
    result
}

/// Encode bytes to base32 text without trailing `=` padding.
///
/// Processes input as a big-endian bit stream, extracting 5 bits at a time.
#[must_use]
pub fn encode_unpadded(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len().saturating_mul(8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits_in_buffer: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits_in_buffer = bits_in_buffer.saturating_add(8);

        while bits_in_buffer >= 5 {
            bits_in_buffer = bits_in_buffer.saturating_sub(5);
            let index = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(char::from(ALPHABET[index]));
        }
    }

    // Remaining bits are padded with zeros on the right.
    if bits_in_buffer > 0 {
        let index = ((buffer << (5u32.saturating_sub(bits_in_buffer))) & 0x1F) as usize;
        result.push(char::from(ALPHABET[index]));
    }

    result
}

/// Decode base32 text to bytes.
///
/// Whitespace and dashes are skipped, lowercase letters are accepted and
/// trailing `=` padding may be present or absent. Bits left over after the
/// last full byte are discarded.
///
/// # Errors
/// Returns `OtpError::InvalidBase32String` on the first character outside
/// the alphabet (including a `=` that is not part of the trailing padding).
pub fn decode(input: &str) -> Result<Vec<u8>, OtpError> {
    let symbols: Vec<char> = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let data_len = symbols
        .iter()
        .rposition(|&c| c != PAD)
        .map_or(0, |last| last.saturating_add(1));

    let mut buffer: u32 = 0;
    let mut bits_in_buffer: u32 = 0;
    let mut result = Vec::with_capacity(data_len.saturating_mul(5).div_ceil(8));

    for (position, &character) in symbols.iter().take(data_len).enumerate() {
        let value = alphabet_value(character)
            .ok_or(OtpError::InvalidBase32String { character, position })?;
        buffer = (buffer << 5) | u32::from(value);
        bits_in_buffer = bits_in_buffer.saturating_add(5);

        if bits_in_buffer >= 8 {
            bits_in_buffer = bits_in_buffer.saturating_sub(8);
            let byte = ((buffer >> bits_in_buffer) & 0xFF) as u8;
            result.push(byte);
        }
    }

    Ok(result)
}

/// Get the numeric value (0..31) for a character, ignoring case.
fn alphabet_value(ch: char) -> Option<u8> {
    let upper = u8::try_from(ch.to_ascii_uppercase()).ok()?;
    ALPHABET
        .iter()
        .position(|&c| c == upper)
        .and_then(|pos| u8::try_from(pos).ok())
}
