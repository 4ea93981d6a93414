use crate::pollutant::Pollutant;

/// Errors raised by AQI calculations and lookups.
///
/// Every error is deterministic: the same input always produces the same
/// error, so none of them are worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A breakpoint table has fewer than two entries or more entries than
    /// the AQI axis it is paired with.
    #[error("malformed breakpoint table: {breakpoints} breakpoints against {levels} AQI levels")]
    MalformedTable { breakpoints: usize, levels: usize },

    /// The standard has no breakpoint table for the pollutant. Only
    /// returned when the standard is configured to fail on unsupported
    /// pollutants.
    #[error("pollutant {0} is not supported by this standard")]
    UnsupportedPollutant(Pollutant),

    /// Level outside of 1..=6.
    #[error("unknown AQI level {0}")]
    UnknownLevel(u8),

    #[error("unknown pollutant name")]
    UnknownPollutant,

    #[error("unknown pollutant code {0}")]
    UnknownPollutantCode(i32),

    #[error("unknown AQI standard")]
    UnknownStandard,
}

pub type Result<T> = core::result::Result<T, Error>;
