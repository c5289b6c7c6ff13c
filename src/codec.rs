//! Splitting a 128-bit identifier into its 48-bit timestamp and 80-bit
//! payload fields, and rendering/parsing each field in both formats.
//!
//! All fields are fixed width: 10 + 16 Crockford characters for ULIDs,
//! 12 + 20 hex digits for UUIDs. The widths fit the 48/80-bit fields
//! exactly (a 48-bit value needs at most 10 base32 or 12 hex digits), so
//! encoding can never overflow a field. Decoding the 10-character ULID
//! timestamp field can yield up to 50 bits; values past the 48-bit ceiling
//! are rejected instead of being carried into a field they cannot fit.

use crate::{alphabet, format, radix, Error, Format, TIMESTAMP_MAX};

pub(crate) const ULID_TIMESTAMP_WIDTH: usize = 10;
pub(crate) const ULID_PAYLOAD_WIDTH: usize = 16;
pub(crate) const UUID_TIMESTAMP_WIDTH: usize = 12;
pub(crate) const UUID_PAYLOAD_WIDTH: usize = 20;

/// Extracts the timestamp field from detected identifier text.
pub(crate) fn decode_timestamp(text: &str, format: Format) -> Result<u64, Error> {
    let n = match format {
        Format::Ulid => {
            let field = alphabet::from_crockford(&text[..ULID_TIMESTAMP_WIDTH]);
            radix::parse(&field, 32)
        }
        Format::Uuid => {
            let hex = format::normalize_uuid(text);
            radix::parse(&hex[..UUID_TIMESTAMP_WIDTH], 16)
        }
    };

    match n {
        Some(n) if n <= u128::from(TIMESTAMP_MAX) => Ok(n as u64),
        _ => Err(Error::InvalidFormat),
    }
}

/// Extracts the payload field from detected identifier text.
pub(crate) fn decode_payload(text: &str, format: Format) -> Result<u128, Error> {
    let n = match format {
        Format::Ulid => {
            let field = alphabet::from_crockford(&text[ULID_TIMESTAMP_WIDTH..]);
            radix::parse(&field, 32)
        }
        Format::Uuid => {
            let hex = format::normalize_uuid(text);
            radix::parse(&hex[UUID_TIMESTAMP_WIDTH..], 16)
        }
    };

    // 16 base32 or 20 hex digits are exactly 80 bits, so a detected
    // payload field always parses.
    n.ok_or(Error::InvalidFormat)
}

/// Renders a timestamp as a left-padded, fixed-width field.
pub(crate) fn encode_timestamp(timestamp: u64, format: Format) -> String {
    match format {
        Format::Ulid => {
            let digits = radix::render(u128::from(timestamp), 32);
            pad_left(&alphabet::to_crockford(&digits), ULID_TIMESTAMP_WIDTH)
        }
        Format::Uuid => {
            let digits = radix::render(u128::from(timestamp), 16).to_ascii_uppercase();
            pad_left(&digits, UUID_TIMESTAMP_WIDTH)
        }
    }
}

/// Renders a payload as a left-padded, fixed-width field.
pub(crate) fn encode_payload(payload: u128, format: Format) -> String {
    match format {
        Format::Ulid => {
            let digits = radix::render(payload, 32);
            pad_left(&alphabet::to_crockford(&digits), ULID_PAYLOAD_WIDTH)
        }
        Format::Uuid => {
            let digits = radix::render(payload, 16).to_ascii_uppercase();
            pad_left(&digits, UUID_PAYLOAD_WIDTH)
        }
    }
}

/// Joins encoded timestamp and payload fields into final identifier text.
///
/// ULIDs concatenate bare; UUIDs get hyphens at offsets 8, 12, 16, and 20
/// of the 32-digit hex string.
pub(crate) fn assemble(timestamp: &str, payload: &str, format: Format) -> String {
    match format {
        Format::Ulid => format!("{timestamp}{payload}"),
        Format::Uuid => {
            let hex = format!("{timestamp}{payload}");
            format!(
                "{}-{}-{}-{}-{}",
                &hex[..8],
                &hex[8..12],
                &hex[12..16],
                &hex[16..20],
                &hex[20..]
            )
        }
    }
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{text:0>width$}")
}
