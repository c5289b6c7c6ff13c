//! Fixed-width-free radix conversion over `u128`.
//!
//! The identifier space is 128 bits (48-bit timestamp, 80-bit payload), so
//! `u128` carries every field without precision loss and natively provides
//! comparison, addition, and increment. Only parsing and rendering need
//! dedicated code. No floating point is involved anywhere.

const DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv"; // cspell:disable-line

/// Parses an unsigned number from standard digits in the given radix.
///
/// Returns `None` for empty input, foreign characters, or overflow.
pub(crate) fn parse(s: &str, radix: u32) -> Option<u128> {
    u128::from_str_radix(s, radix).ok()
}

/// Renders an unsigned number as lowercase standard digits in the given
/// radix, without any leading-zero padding. The caller pads to field width.
pub(crate) fn render(mut n: u128, radix: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let radix = u128::from(radix);
    let mut digits = String::new();
    while n > 0 {
        digits.push(char::from(DIGITS[(n % radix) as usize]));
        n /= radix;
    }
    digits.chars().rev().collect()
}
