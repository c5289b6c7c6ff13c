//! # Dual-Format Sortable Identifiers
//!
//! This crate is a codec and generator for 128-bit sortable identifiers
//! that exist in two textual forms: the 26-character Crockford base32 form
//! ("ULID") and the 36-character hyphenated hexadecimal form ("UUID").
//! Both render the same value space (a 48-bit millisecond timestamp over
//! an 80-bit payload), and converting between them is bit-exact and
//! reversible.
//!
//! ## Generating identifiers
//!
//! ```
//! let ulid = ulid_uuid::generate(None)?;
//! let uuid = ulid_uuid::generate_uuid(None)?;
//!
//! assert_eq!(ulid.len(), 26);
//! assert_eq!(uuid.len(), 36);
//! # Ok::<(), ulid_uuid::Error>(())
//! ```
//!
//! Generated payloads are constrained so that the UUID rendering always
//! carries a version-4 shape: the version nibble is `4` and the variant
//! nibble stays in `8..=f`, no matter which form you look at.
//!
//! ## Converting between the forms
//!
//! ```
//! use ulid_uuid::{convert_to_ulid, convert_to_uuid};
//!
// cspell:disable-next-line
//! let ulid = "01HDGX93NBW6AY9C60GH2TWDP4";
//! let uuid = convert_to_uuid(ulid)?;
//!
//! assert_eq!(uuid, "018B61D4-8EAB-E195-E4B0-C08445AE36C4");
//! assert_eq!(convert_to_ulid(&uuid)?, ulid);
//! # Ok::<(), ulid_uuid::Error>(())
//! ```
//!
//! Conversion is pure text-to-text: no state, no clock, no randomness.
//! UUID input tolerates lowercase, missing hyphens, and enclosing braces;
//! output is canonical uppercase in both formats.
//!
//! ## Monotonic bursts
//!
//! A [`Factory`] owns a `(timestamp, payload)` pair and hands out strictly
//! increasing identifiers sharing a timestamp, advancing the payload
//! deterministically and rolling over into the next millisecond when it is
//! exhausted:
//!
//! ```
//! use ulid_uuid::Factory;
//!
//! let mut factory = Factory::with_seed(Some(1_000), None)?;
//!
//! let a = factory.next_ulid()?;
//! let b = factory.next_uuid()?;
//! let c = factory.next_ulid()?;
//!
//! assert!(ulid_uuid::convert_to_ulid(&b)? > a);
//! assert!(ulid_uuid::convert_to_ulid(&b)? < c);
//! # Ok::<(), ulid_uuid::Error>(())
//! ```
//!
//! ## The value type
//!
//! [`Ulid`] wraps the raw 128-bit value for callers who want typed
//! identifiers instead of strings; it parses from either format and
//! renders both.
//!
//! ## Feature Flags
//!
//! - **`serde`**: string-based `Serialize`/`Deserialize` for [`Ulid`],
//!   optional.

mod alphabet;
mod codec;
mod convert;
mod error;
mod factory;
mod format;
mod id;
mod radix;
#[cfg(feature = "serde")]
mod serde;

pub use convert::convert;
pub use error::Error;
pub use factory::{Factory, DATA_MAX, DATA_MIN};
pub use format::Format;
pub use id::Ulid;

/// Largest representable timestamp, in milliseconds since the Unix epoch.
pub const TIMESTAMP_MAX: u64 = (1 << TIMESTAMP_BITS) - 1;

const TIMESTAMP_BITS: u32 = 48;

const PAYLOAD_BITS: u32 = 80;
const PAYLOAD_MASK: u128 = (1 << PAYLOAD_BITS) - 1;

/// Generates a fresh identifier in ULID rendering.
///
/// `None` uses the current time; `Some(ms)` a caller-supplied timestamp.
/// The payload is random, constrained to the version-4 shape.
///
/// # Errors
///
/// [`Error::TimestampOutOfRange`] if the timestamp exceeds
/// `2`<sup>`48`</sup>`-1`, [`Error::RandomnessUnavailable`] if the host
/// entropy source fails.
///
/// # Example
///
/// ```
/// let u = ulid_uuid::generate(Some(281_474_976_710_655))?;
/// assert!(u.starts_with("7ZZZZZZZZZ"));
///
/// assert!(ulid_uuid::generate(Some(281_474_976_710_656)).is_err());
/// # Ok::<(), ulid_uuid::Error>(())
/// ```
pub fn generate(timestamp: Option<u64>) -> Result<String, Error> {
    fresh(timestamp, Format::Ulid)
}

/// Generates a fresh identifier in UUID rendering.
///
/// Same contract as [`generate`], different textual form.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_uuid(timestamp: Option<u64>) -> Result<String, Error> {
    fresh(timestamp, Format::Uuid)
}

/// Checks whether a string has the ULID shape.
///
/// A pure predicate over the text (26 Crockford symbols,
/// case-insensitive); it never fails.
#[must_use]
pub fn is_valid_ulid(text: &str) -> bool {
    format::is_ulid(text)
}

/// Extracts the 48-bit timestamp from identifier text in either format.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if the text matches neither format or its
/// timestamp field exceeds the 48-bit ceiling.
///
/// # Example
///
/// ```
// cspell:disable-next-line
/// assert_eq!(ulid_uuid::extract_timestamp("01HDGX93NBW6AY9C60GH2TWDP4"), Ok(1_698_153_402_027));
/// assert!(ulid_uuid::extract_timestamp("not-an-id").is_err());
/// ```
pub fn extract_timestamp(text: &str) -> Result<u64, Error> {
    let format = Format::detect(text).ok_or(Error::InvalidFormat)?;
    codec::decode_timestamp(text, format)
}

/// Extracts the 80-bit payload from identifier text in either format.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if the text matches neither format.
pub fn extract_payload(text: &str) -> Result<u128, Error> {
    let format = Format::detect(text).ok_or(Error::InvalidFormat)?;
    codec::decode_payload(text, format)
}

/// Converts identifier text into UUID rendering.
///
/// # Errors
///
/// [`Error::InvalidFormat`] on unrecognized input.
pub fn convert_to_uuid(text: &str) -> Result<String, Error> {
    convert(text, Format::Uuid)
}

/// Converts identifier text into ULID rendering.
///
/// # Errors
///
/// [`Error::InvalidFormat`] on unrecognized input.
pub fn convert_to_ulid(text: &str) -> Result<String, Error> {
    convert(text, Format::Ulid)
}

fn fresh(timestamp: Option<u64>, format: Format) -> Result<String, Error> {
    let timestamp = match timestamp {
        Some(ts) if ts > TIMESTAMP_MAX => return Err(Error::TimestampOutOfRange),
        Some(ts) => ts,
        None => factory::current_millis()?,
    };
    let payload = factory::random_payload()?;

    Ok(codec::assemble(
        &codec::encode_timestamp(timestamp, format),
        &codec::encode_payload(payload, format),
        format,
    ))
}

#[cfg(test)]
mod tests;
