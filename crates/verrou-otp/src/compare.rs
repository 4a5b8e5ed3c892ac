//! Constant-time comparison for OTP codes.

/// Compare two OTP strings without an early exit on the first mismatch.
///
/// Returns `true` iff both strings have equal length and identical bytes.
/// Every position is XOR-accumulated into a single difference flag, so the
/// running time depends only on the length.
///
/// Note: The early return on length mismatch is acceptable for OTP codes
/// because the expected digit count is public information. The constant-time
/// property protects the *code value*, not its length.
#[must_use]
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    std::hint::black_box(diff) == 0
}
