//! Regulatory standards
//!
//! A standard is a [`Profile`]: breakpoint tables, cutoff rules and level
//! presentation, all static data. The [`Standard`] trait runs the shared
//! calculation over a profile, so adding a standard means writing tables,
//! not code.

mod eea;
mod epa;
mod mep;

use core::str::FromStr;

pub use eea::Eea;
pub use epa::Epa;
pub use mep::Mep;

use crate::error::{Error, Result};
use crate::interpolate::locate_and_interpolate;
use crate::level::{AqiLevel, LevelTable, Rgb};
use crate::pollutant::{Pollutant, PollutantSet, Reading};
use crate::table::{Tables, AQI_CEILING};

/// Highest AQI for which no primary pollutant is reported.
pub const GOOD_AQI: u16 = 50;

/// Drops readings of `pollutant` above a concentration, because another
/// averaging window of the same species is authoritative there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoff {
    pub pollutant: Pollutant,
    pub above: f64,
}

impl Cutoff {
    pub const fn new(pollutant: Pollutant, above: f64) -> Self {
        Self { pollutant, above }
    }

    fn applies(&self, reading: &Reading) -> bool {
        self.pollutant == reading.pollutant && reading.value > self.above
    }
}

/// Everything that defines a standard.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub tables: Tables,
    pub cutoffs: &'static [Cutoff],
    pub levels: LevelTable,
}

impl Profile {
    /// Concentration table for a pollutant that carries a concentration.
    pub fn table(&self, pollutant: Pollutant) -> Option<&'static [f64]> {
        match pollutant {
            Pollutant::AQI => None,
            _ => self.tables.get(pollutant),
        }
    }

    /// Sub-index of a single reading, `None` when the reading does not
    /// take part in the calculation.
    pub fn sub_index(&self, reading: &Reading, fail_on_unsupported: bool) -> Result<Option<u16>> {
        let pollutant = reading.pollutant;
        let value = reading.value;

        let Some(breakpoints) = self.table(pollutant) else {
            if fail_on_unsupported {
                return Err(Error::UnsupportedPollutant(pollutant));
            }
            debug!("{}: skipping unsupported pollutant {}", self.name, pollutant);
            return Ok(None);
        };

        if value.is_nan() {
            warn!("{}: skipping {} reading without a value", self.name, pollutant);
            return Ok(None);
        }

        if self.cutoffs.iter().any(|cutoff| cutoff.applies(reading)) {
            debug!("{}: {} of {} is past its cutoff", self.name, pollutant, value);
            return Ok(None);
        }

        let iaqi = match breakpoints.last() {
            Some(&top) if value > top => {
                trace!("{}: {} of {} is above the table", self.name, pollutant, value);
                AQI_CEILING
            }
            _ => locate_and_interpolate(value, breakpoints, self.tables.aqi())?,
        };

        trace!("{}: {} = {} -> IAQI {}", self.name, pollutant, value, iaqi);
        Ok(Some(iaqi))
    }

    /// The AQI of a set of readings: the highest sub-index, together with
    /// every pollutant that reached it.
    pub fn calculate(&self, readings: &[Reading], fail_on_unsupported: bool) -> Result<AqiResult> {
        let mut aqi = 0;
        let mut primary_pollutants = PollutantSet::new();

        for reading in readings {
            let Some(iaqi) = self.sub_index(reading, fail_on_unsupported)? else {
                continue;
            };

            if iaqi > aqi {
                aqi = iaqi;
                primary_pollutants.clear();
                primary_pollutants.insert(reading.pollutant);
            } else if iaqi == aqi {
                primary_pollutants.insert(reading.pollutant);
            }
        }

        if aqi <= GOOD_AQI {
            primary_pollutants.clear();
        }

        debug!("{}: AQI {} from {} readings", self.name, aqi, readings.len());
        Ok(AqiResult {
            aqi,
            primary_pollutants,
        })
    }
}

/// Outcome of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AqiResult {
    pub aqi: u16,
    /// Pollutants whose sub-index equals `aqi`. Empty when the AQI is 50
    /// or below.
    pub primary_pollutants: PollutantSet,
}

impl AqiResult {
    pub const fn level(&self) -> AqiLevel {
        AqiLevel::from_aqi(self.aqi)
    }
}

/// An AQI standard.
///
/// Implementors only provide their [`Profile`] and strictness; the
/// calculation and level lookups are shared.
///
/// # Examples
///
/// ```
/// use aqi::{Epa, Pollutant, Reading, Standard};
///
/// let result = Epa::new()
///     .calculate(&[
///         Reading::new(Pollutant::PM2_5_1H, 16.0),
///         Reading::new(Pollutant::PM10_1H, 88.0),
///     ])
///     .unwrap();
///
/// assert_eq!(result.aqi, 67);
/// assert!(result.primary_pollutants.contains(Pollutant::PM10_1H));
/// assert_eq!(Epa::new().aqi_to_description(result.aqi), Ok("Moderate"));
/// ```
pub trait Standard {
    fn profile(&self) -> &'static Profile;

    /// Whether a reading without a breakpoint table is an error rather
    /// than silently skipped.
    fn fail_on_unsupported(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        self.profile().name
    }

    fn supports(&self, pollutant: Pollutant) -> bool {
        self.profile().table(pollutant).is_some()
    }

    fn table(&self, pollutant: Pollutant) -> Option<&'static [f64]> {
        self.profile().table(pollutant)
    }

    fn sub_index(&self, reading: &Reading) -> Result<Option<u16>> {
        self.profile().sub_index(reading, self.fail_on_unsupported())
    }

    fn calculate(&self, readings: &[Reading]) -> Result<AqiResult> {
        self.profile().calculate(readings, self.fail_on_unsupported())
    }

    fn aqi_to_level(&self, aqi: u16) -> AqiLevel {
        AqiLevel::from_aqi(aqi)
    }

    fn level_to_color(&self, level: AqiLevel) -> Result<Rgb> {
        self.profile().levels.color(level)
    }

    fn level_to_description(&self, level: AqiLevel) -> Result<&'static str> {
        self.profile().levels.description(level)
    }

    fn aqi_to_color(&self, aqi: u16) -> Result<Rgb> {
        self.level_to_color(self.aqi_to_level(aqi))
    }

    fn aqi_to_description(&self, aqi: u16) -> Result<&'static str> {
        self.level_to_description(self.aqi_to_level(aqi))
    }
}

/// One of the built-in standards, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyStandard {
    Epa(Epa),
    Mep(Mep),
    Eea(Eea),
}

impl AnyStandard {
    /// Looks a standard up by its [`Standard::name`].
    ///
    /// ```
    /// use aqi::{AnyStandard, Standard};
    ///
    /// let standard = AnyStandard::from_name("mep").unwrap();
    /// assert_eq!(standard.name(), "mep");
    /// assert!(AnyStandard::from_name("aqhi").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "epa" => Ok(AnyStandard::Epa(Epa::new())),
            "mep" => Ok(AnyStandard::Mep(Mep::new())),
            "eea" => Ok(AnyStandard::Eea(Eea::new())),
            _ => Err(Error::UnknownStandard),
        }
    }

    /// Makes unsupported pollutants an error.
    pub fn strict(self) -> Self {
        match self {
            AnyStandard::Epa(_) => AnyStandard::Epa(Epa::strict()),
            AnyStandard::Mep(_) => AnyStandard::Mep(Mep::strict()),
            AnyStandard::Eea(_) => AnyStandard::Eea(Eea::strict()),
        }
    }
}

impl FromStr for AnyStandard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AnyStandard::from_name(s)
    }
}

impl From<Epa> for AnyStandard {
    fn from(standard: Epa) -> Self {
        AnyStandard::Epa(standard)
    }
}

impl From<Mep> for AnyStandard {
    fn from(standard: Mep) -> Self {
        AnyStandard::Mep(standard)
    }
}

impl From<Eea> for AnyStandard {
    fn from(standard: Eea) -> Self {
        AnyStandard::Eea(standard)
    }
}

impl Standard for AnyStandard {
    fn profile(&self) -> &'static Profile {
        match self {
            AnyStandard::Epa(standard) => standard.profile(),
            AnyStandard::Mep(standard) => standard.profile(),
            AnyStandard::Eea(standard) => standard.profile(),
        }
    }

    fn fail_on_unsupported(&self) -> bool {
        match self {
            AnyStandard::Epa(standard) => standard.fail_on_unsupported(),
            AnyStandard::Mep(standard) => standard.fail_on_unsupported(),
            AnyStandard::Eea(standard) => standard.fail_on_unsupported(),
        }
    }
}
