//! Lossless conversion between the two textual formats.

use crate::{codec, Error, Format};

/// Converts identifier text into the requested format.
///
/// A pure function of the input text. When the input is already in the
/// target format it is returned unchanged, original casing, hyphens, and
/// braces included. Otherwise both fields are decoded from the source and
/// re-encoded canonically (uppercase) in the target, preserving the exact
/// 128-bit value.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if the text matches neither format, or if a
/// ULID timestamp field encodes a value past the 48-bit ceiling and
/// therefore has no UUID rendering.
///
/// # Example
///
/// ```
/// use ulid_uuid::{convert, Format};
///
// cspell:disable-next-line
/// let uuid = convert("01HDGX93NBW6AY9C60GH2TWDP4", Format::Uuid)?;
/// assert_eq!(uuid, "018B61D4-8EAB-E195-E4B0-C08445AE36C4");
/// # Ok::<(), ulid_uuid::Error>(())
/// ```
pub fn convert(text: &str, target: Format) -> Result<String, Error> {
    let source = Format::detect(text).ok_or(Error::InvalidFormat)?;

    if source == target {
        return Ok(text.to_string());
    }

    let timestamp = codec::decode_timestamp(text, source)?;
    let payload = codec::decode_payload(text, source)?;

    Ok(codec::assemble(
        &codec::encode_timestamp(timestamp, target),
        &codec::encode_payload(payload, target),
        target,
    ))
}
