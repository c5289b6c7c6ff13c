//! Recognition of the two textual identifier formats.

/// Textual rendering of a 128-bit identifier value.
///
/// A format describes only how a value is written down, never the value
/// itself. Every value has one canonical rendering per format.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Format {
    /// 26 Crockford base32 characters, no separators.
    Ulid,
    /// 32 hexadecimal characters grouped 8-4-4-4-12 with hyphens.
    Uuid,
}

impl Format {
    /// Classifies a string as ULID, UUID, or neither.
    ///
    /// ULID: exactly 26 Crockford symbols, case-insensitive. UUID: 32 hex
    /// digits with each group hyphen and each enclosing brace optional,
    /// case-insensitive. `None` is terminal; fallible callers report it as
    /// [`Error::InvalidFormat`](crate::Error::InvalidFormat).
    ///
    /// # Example
    ///
    /// ```
    /// use ulid_uuid::Format;
    ///
    // cspell:disable-next-line
    /// assert_eq!(Format::detect("01HDGX93NBW6AY9C60GH2TWDP4"), Some(Format::Ulid));
    /// assert_eq!(Format::detect("{018b61d4-8eab-e195-e4b0-c08445ae36c4}"), Some(Format::Uuid));
    /// assert_eq!(Format::detect("not-an-id"), None);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        if is_ulid(text) {
            Some(Self::Ulid)
        } else if is_uuid(text) {
            Some(Self::Uuid)
        } else {
            None
        }
    }
}

pub(crate) fn is_ulid(text: &str) -> bool {
    text.len() == 26 && text.bytes().all(is_crockford_char)
}

pub(crate) fn is_uuid(text: &str) -> bool {
    let bytes = text.as_bytes();
    let bytes = bytes.strip_prefix(b"{").unwrap_or(bytes);
    let mut rest = bytes.strip_suffix(b"}").unwrap_or(bytes);

    for (i, width) in [8_usize, 4, 4, 4, 12].into_iter().enumerate() {
        if i > 0 {
            rest = rest.strip_prefix(b"-").unwrap_or(rest);
        }
        if rest.len() < width || !rest[..width].iter().all(u8::is_ascii_hexdigit) {
            return false;
        }
        rest = &rest[width..];
    }
    rest.is_empty()
}

/// Strips hyphens and braces and lowercases, leaving 32 bare hex digits.
pub(crate) fn normalize_uuid(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '-' | '{' | '}'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

const fn is_crockford_char(c: u8) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        b'0'..=b'9' | b'A'..=b'H' | b'J' | b'K' | b'M' | b'N' | b'P'..=b'T' | b'V'..=b'Z'
    )
}
