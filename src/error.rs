use std::fmt;

/// Errors reported by the codec, the converters, and the factories.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Error {
    /// The text matches neither the ULID nor the UUID shape.
    InvalidFormat,
    /// The timestamp lies outside `0..=2`<sup>`48`</sup>`-1`.
    TimestampOutOfRange,
    /// The factory payload seed lies outside `DATA_MIN..=DATA_MAX`.
    InvalidSeed,
    /// A payload rollover would push the factory timestamp past the 48-bit ceiling.
    TimestampOverflow,
    /// The host entropy source failed to deliver random bytes.
    RandomnessUnavailable,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    /// Formats the error message for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match *self {
            Self::InvalidFormat => "string is neither a ULID nor a UUID",
            Self::TimestampOutOfRange => "timestamp exceeds 48 bits",
            Self::InvalidSeed => "payload seed is outside the legal range",
            Self::TimestampOverflow => "timestamp rollover exceeds 48 bits",
            Self::RandomnessUnavailable => "entropy source is unavailable",
        };
        write!(f, "{message}")
    }
}
