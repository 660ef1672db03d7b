//! Deterministic string hashing for class names and dedup keys.
//!
//! The hash is the classic 32-bit rolling polynomial `h = (h << 5) - h + c`,
//! truncated to a signed 32-bit integer at every step and rendered in
//! base 36. The exact arithmetic is load-bearing: generated class names must
//! stay stable across processes and releases, so the wrapping behavior and
//! the signed base-36 rendering must never change.

/// Hashes `seed` into a class-name identifier prefixed with `prefix` and an
/// underscore. The same input always produces the same output; two sheets
/// with different prefixes never collide even on identical seeds.
///
/// An empty seed hashes to the fixed sentinel `"0"` (no prefix).
pub fn stable_hash(prefix: &str, seed: &str) -> String {
    if seed.is_empty() {
        return "0".to_string();
    }

    let mut hash: i32 = 0;
    // UTF-16 code units, so non-ASCII seeds hash the same as in consumers
    // that index strings by code unit.
    for unit in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }

    format!("{}_{}", prefix, to_base36(hash))
}

/// Renders a signed 32-bit value in base 36, lowercase, with a leading `-`
/// for negative values.
fn to_base36(value: i32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let negative = value < 0;
    // Widen before abs so i32::MIN does not overflow.
    let mut n = (value as i64).unsigned_abs();
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }

    let mut out = String::with_capacity(digits.len() + 1);
    if negative {
        out.push('-');
    }
    out.extend(digits.iter().rev());
    out
}
