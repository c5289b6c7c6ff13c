use std::{
    fmt,
    str::FromStr,
    time::{Duration, SystemTime},
};

use crate::{codec, factory, Error, Format, PAYLOAD_BITS, PAYLOAD_MASK, TIMESTAMP_MAX};

/// A 128-bit sortable identifier with two textual renderings.
///
/// The value is a plain unsigned 128-bit integer: the upper 48 bits hold a
/// millisecond timestamp, the lower 80 bits the payload. [`Display`](fmt::Display)
/// renders the 26-character ULID form, [`Ulid::to_uuid_string`] the
/// 36-character hyphenated UUID form, and [`FromStr`] accepts either.
/// Ordering and equality follow the raw value, so identifiers sort by
/// timestamp first.
///
/// # Example
///
/// ```
/// use ulid_uuid::Ulid;
///
// cspell:disable-next-line
/// let id: Ulid = "01HDGX93NBW6AY9C60GH2TWDP4".parse()?;
///
/// assert_eq!(id.to_uuid_string(), "018B61D4-8EAB-E195-E4B0-C08445AE36C4");
/// assert_eq!(id.to_uuid_string().parse::<Ulid>()?, id);
/// # Ok::<(), ulid_uuid::Error>(())
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Ulid(u128);

impl Ulid {
    /// The smallest identifier (all bits zero).
    pub const MIN: Self = Self(0);

    /// The largest identifier (all bits one).
    pub const MAX: Self = Self(u128::MAX);

    /// Generates an identifier with the current time and a random payload.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source fails or the system clock is outside
    /// the 48-bit millisecond range. See [`Ulid::try_new`] for a variant
    /// which reports these as errors.
    #[must_use]
    pub fn new() -> Self {
        Self::try_new().expect("entropy source or system clock unavailable")
    }

    /// Generates an identifier with the current time and a random payload.
    ///
    /// # Errors
    ///
    /// [`Error::RandomnessUnavailable`] if the entropy source fails,
    /// [`Error::TimestampOutOfRange`] if the system clock cannot be
    /// expressed in 48 bits of milliseconds.
    pub fn try_new() -> Result<Self, Error> {
        Self::from_timestamp(factory::current_millis()?)
    }

    /// Generates an identifier with a caller-supplied timestamp and a
    /// random payload.
    ///
    /// # Errors
    ///
    /// [`Error::TimestampOutOfRange`] if the timestamp exceeds
    /// `2`<sup>`48`</sup>`-1`, [`Error::RandomnessUnavailable`] if the
    /// entropy source fails.
    pub fn from_timestamp(timestamp: u64) -> Result<Self, Error> {
        if timestamp > TIMESTAMP_MAX {
            return Err(Error::TimestampOutOfRange);
        }
        let payload = factory::random_payload()?;
        Ok(Self((u128::from(timestamp) << PAYLOAD_BITS) | payload))
    }

    /// Creates an identifier from timestamp and payload parts.
    ///
    /// # Errors
    ///
    /// [`Error::TimestampOutOfRange`] if the timestamp exceeds 48 bits,
    /// [`Error::InvalidSeed`] if the payload exceeds 80 bits.
    pub const fn from_parts(timestamp: u64, payload: u128) -> Result<Self, Error> {
        if timestamp > TIMESTAMP_MAX {
            Err(Error::TimestampOutOfRange)
        } else if payload > PAYLOAD_MASK {
            Err(Error::InvalidSeed)
        } else {
            Ok(Self(((timestamp as u128) << PAYLOAD_BITS) | payload))
        }
    }

    /// Returns the timestamp part in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(self) -> u64 {
        (self.0 >> PAYLOAD_BITS) as u64
    }

    /// Returns the 80-bit payload part.
    #[must_use]
    pub const fn payload(self) -> u128 {
        self.0 & PAYLOAD_MASK
    }

    /// Returns the timestamp and payload parts as a pair.
    #[must_use]
    pub const fn to_parts(self) -> (u64, u128) {
        (self.timestamp(), self.payload())
    }

    /// Returns the timestamp part as a [`SystemTime`].
    ///
    /// # Panics
    ///
    /// Panics if the timestamp cannot be represented as a [`SystemTime`]
    /// on the host platform. See [`Ulid::try_datetime`].
    #[must_use]
    pub fn datetime(self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(self.timestamp())
    }

    /// Returns the timestamp part as a [`SystemTime`], or `None` if the
    /// platform cannot represent it.
    #[must_use]
    pub fn try_datetime(self) -> Option<SystemTime> {
        SystemTime::UNIX_EPOCH.checked_add(Duration::from_millis(self.timestamp()))
    }

    /// Renders the 36-character hyphenated UUID form, uppercase.
    #[must_use]
    pub fn to_uuid_string(self) -> String {
        codec::assemble(
            &codec::encode_timestamp(self.timestamp(), Format::Uuid),
            &codec::encode_payload(self.payload(), Format::Uuid),
            Format::Uuid,
        )
    }

    /// Converts the identifier into a `u128` integer.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        self.0
    }

    /// Creates an identifier from a `u128` integer.
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(n)
    }

    /// Converts the identifier into big-endian binary bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    /// Creates an identifier from big-endian binary bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }
}

impl Default for Ulid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ulid")
            .field("string", &self.to_string())
            .field("timestamp", &self.timestamp())
            .field("payload", &format_args!("{:020X}", self.payload()))
            .finish()
    }
}

impl fmt::Display for Ulid {
    /// Renders the 26-character ULID form, uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::assemble(
            &codec::encode_timestamp(self.timestamp(), Format::Ulid),
            &codec::encode_payload(self.payload(), Format::Ulid),
            Format::Ulid,
        ))
    }
}

impl FromStr for Ulid {
    type Err = Error;

    /// Parses either textual format into the identifier value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = Format::detect(s).ok_or(Error::InvalidFormat)?;
        let timestamp = codec::decode_timestamp(s, format)?;
        let payload = codec::decode_payload(s, format)?;
        Ok(Self((u128::from(timestamp) << PAYLOAD_BITS) | payload))
    }
}

impl From<Ulid> for u128 {
    fn from(id: Ulid) -> Self {
        id.to_u128()
    }
}

impl From<u128> for Ulid {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl From<Ulid> for [u8; 16] {
    fn from(id: Ulid) -> Self {
        id.to_bytes()
    }
}

impl From<[u8; 16]> for Ulid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}
