//! Monotonic identifier factory and the crate's entropy access.

use std::time::SystemTime;

use rand::{rngs::OsRng, RngCore as _};

use crate::{codec, Error, Format, PAYLOAD_MASK, TIMESTAMP_MAX};

/// Smallest payload a factory will emit (`0x4000_8000_…`).
///
/// The bound keeps the version nibble of the UUID rendering at `4` and the
/// variant nibble in `8..=f`.
pub const DATA_MIN: u128 = 0x4000_8000_0000_0000_0000;

/// Largest payload a factory will emit (`0x4FFF_FFFF_…`).
pub const DATA_MAX: u128 = 0x4FFF_FFFF_FFFF_FFFF_FFFF;

// Incrementing across a `…7fff…`/`…8000…` boundary clears bit 63 and drops
// the variant nibble below `8`. Adding the jump realigns to the next valid
// nibble block without touching the version nibble.
const VARIANT_JUMP: u128 = 1 << 63;

const VERSION_MASK: u128 = 0xF000 << 64;
const VERSION_4: u128 = 0x4000 << 64;

/// Stateful generator of strictly increasing identifiers.
///
/// A factory owns a `(timestamp, payload)` pair and advances it
/// deterministically: the payload increments by one per identifier, skips
/// over payload blocks that would corrupt the embedded version/variant
/// markers, and rolls over into the next millisecond when it exhausts
/// [`DATA_MAX`]. Consecutive outputs of one instance compare as strictly
/// increasing 128-bit values, regardless of which rendering is requested.
///
/// Each factory is an independent sequence; create as many as needed.
/// `&mut self` makes a single instance exclusive to one caller at a time;
/// wrap it in a `Mutex` to share a sequence across threads.
///
/// # Example
///
/// ```
/// use ulid_uuid::Factory;
///
/// let mut factory = Factory::with_seed(Some(1_000), None)?;
///
/// let a = factory.next_ulid()?;
/// let b = factory.next_ulid()?;
/// assert!(a < b);
/// # Ok::<(), ulid_uuid::Error>(())
/// ```
#[derive(Debug)]
pub struct Factory {
    timestamp: u64,
    payload: u128,
}

impl Factory {
    /// Creates a factory seeded with the current time and a fresh random
    /// payload.
    ///
    /// # Errors
    ///
    /// [`Error::RandomnessUnavailable`] if the entropy source fails,
    /// [`Error::TimestampOutOfRange`] if the system clock is outside the
    /// 48-bit millisecond range.
    pub fn new() -> Result<Self, Error> {
        Self::with_seed(None, None)
    }

    /// Creates a factory from caller-supplied seeds.
    ///
    /// `None` falls back to the current time and a fresh random payload,
    /// respectively. Seeds are validated before any state is created; an
    /// error never leaves a half-built factory behind.
    ///
    /// # Errors
    ///
    /// [`Error::TimestampOutOfRange`] if the seed timestamp exceeds
    /// `2`<sup>`48`</sup>`-1`, [`Error::InvalidSeed`] if the seed payload
    /// lies outside `DATA_MIN..=DATA_MAX`, [`Error::RandomnessUnavailable`]
    /// if a fresh payload is needed and the entropy source fails.
    pub fn with_seed(timestamp: Option<u64>, payload: Option<u128>) -> Result<Self, Error> {
        let timestamp = match timestamp {
            Some(ts) if ts > TIMESTAMP_MAX => return Err(Error::TimestampOutOfRange),
            Some(ts) => ts,
            None => current_millis()?,
        };

        let payload = match payload {
            Some(p) if p < DATA_MIN || p > DATA_MAX => return Err(Error::InvalidSeed),
            Some(p) => p,
            None => random_payload()?,
        };

        Ok(Self { timestamp, payload })
    }

    /// Emits the next identifier in ULID rendering.
    ///
    /// # Errors
    ///
    /// [`Error::TimestampOverflow`] once a payload rollover would advance
    /// the timestamp past the 48-bit ceiling. This is fatal for the
    /// sequence; the factory state stays untouched.
    pub fn next_ulid(&mut self) -> Result<String, Error> {
        self.next(Format::Ulid)
    }

    /// Emits the next identifier in UUID rendering.
    ///
    /// # Errors
    ///
    /// Same contract as [`Factory::next_ulid`].
    pub fn next_uuid(&mut self) -> Result<String, Error> {
        self.next(Format::Uuid)
    }

    fn next(&mut self, format: Format) -> Result<String, Error> {
        let (timestamp, payload) = self.step()?;
        Ok(codec::assemble(
            &codec::encode_timestamp(timestamp, format),
            &codec::encode_payload(payload, format),
            format,
        ))
    }

    // Advances the sequence by one and returns the pair to emit. The
    // payload is post-incremented, so an out-of-range or misaligned state
    // left behind by the previous call is repaired here before emitting.
    fn step(&mut self) -> Result<(u64, u128), Error> {
        if self.payload > DATA_MAX {
            if self.timestamp >= TIMESTAMP_MAX {
                return Err(Error::TimestampOverflow);
            }
            self.timestamp += 1;
            self.payload = DATA_MIN;
        }

        if self.payload & VARIANT_JUMP == 0 {
            self.payload += VARIANT_JUMP;
        }

        let emitted = (self.timestamp, self.payload);
        self.payload += 1;
        Ok(emitted)
    }
}

/// Returns the current Unix time in milliseconds.
pub(crate) fn current_millis() -> Result<u64, Error> {
    let since_epoch = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|_| Error::TimestampOutOfRange)?;

    match u64::try_from(since_epoch.as_millis()) {
        Ok(millis) if millis <= TIMESTAMP_MAX => Ok(millis),
        _ => Err(Error::TimestampOutOfRange),
    }
}

/// Draws a random 80-bit payload constrained to `DATA_MIN..=DATA_MAX`.
///
/// Ten bytes of OS entropy, then the version nibble is forced to `4` and
/// bit 63 is set, which lands every draw inside the legal range by
/// construction.
pub(crate) fn random_payload() -> Result<u128, Error> {
    let mut bytes = [0; 16];
    OsRng
        .try_fill_bytes(&mut bytes[6..])
        .map_err(|_| Error::RandomnessUnavailable)?;

    let raw = u128::from_be_bytes(bytes) & PAYLOAD_MASK;
    Ok((raw & !VERSION_MASK) | VERSION_4 | VARIANT_JUMP)
}
