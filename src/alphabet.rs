//! Substitution between the Crockford base32 alphabet and standard
//! base-32 hex digits (`0-9`, `A-V`).
//!
//! ULID text uses Crockford symbols (I, L, O, U excluded), while the radix
//! engine speaks standard digits. Both alphabets have cardinality 32, so the
//! translation is a per-character shift. Callers must only pass characters
//! that are members of the source alphabet; the format detector rejects
//! everything else beforehand.

/// Translates standard base-32 hex digits into Crockford symbols.
///
/// Case-insensitive on input, uppercase on output.
pub(crate) fn to_crockford(s: &str) -> String {
    s.bytes().map(|b| char::from(to_crockford_char(b))).collect()
}

/// Translates Crockford symbols into standard base-32 hex digits.
///
/// Case-insensitive on input, lowercase on output.
pub(crate) fn from_crockford(s: &str) -> String {
    s.bytes().map(|b| char::from(from_crockford_char(b))).collect()
}

// I, L, O, and U are missing from the Crockford alphabet, so every letter
// past each gap shifts by one more position.
const fn to_crockford_char(c: u8) -> u8 {
    let c = c.to_ascii_uppercase();
    match c {
        b'I' | b'J' => c + 1,
        b'K' | b'L' => c + 2,
        b'M'..=b'Q' => c + 3,
        b'R'..=b'V' => c + 4,
        _ => c,
    }
}

const fn from_crockford_char(c: u8) -> u8 {
    let c = c.to_ascii_uppercase();
    let c = match c {
        b'J' | b'K' => c - 1,
        b'M' | b'N' => c - 2,
        b'P'..=b'T' => c - 3,
        b'V'..=b'Z' => c - 4,
        _ => c,
    };
    c.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    // cspell:disable
    const BASE32HEX: &str = "0123456789abcdefghijklmnopqrstuv";
    const CROCKFORD: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
    // cspell:enable

    #[test]
    fn test_full_alphabet_forward() {
        assert_eq!(to_crockford(BASE32HEX), CROCKFORD);
        assert_eq!(to_crockford(&BASE32HEX.to_uppercase()), CROCKFORD);
    }

    #[test]
    fn test_full_alphabet_backward() {
        assert_eq!(from_crockford(CROCKFORD), BASE32HEX);
        assert_eq!(from_crockford(&CROCKFORD.to_lowercase()), BASE32HEX);
    }

    #[test]
    fn test_roundtrip() {
        for c in BASE32HEX.chars() {
            let crockford = to_crockford(&c.to_string());
            assert_eq!(from_crockford(&crockford), c.to_string());
        }
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(to_crockford("0123456789"), "0123456789");
        assert_eq!(from_crockford("0123456789"), "0123456789");
    }
}
