//! Pollutant identifiers and readings
//!
//! A [`Pollutant`] names both the chemical species and the averaging
//! window of a measurement, since each window has its own breakpoint
//! table. [`PollutantSet`] is an allocation free set used to report
//! primary pollutants.

use core::fmt;
use core::str::FromStr;

use crate::convert::{self, Unit};
use crate::error::Error;

/// Chemical species, independent of averaging window.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Species {
    AQI,
    O3,
    PM2_5,
    PM10,
    SO2,
    NO2,
    CO,
}

/// A pollutant at a given averaging window.
///
/// The numeric codes returned by [`Pollutant::code`] are stable and match
/// the codes used on the wire by existing AQI feeds.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pollutant {
    /// The index axis itself. Never carries a concentration.
    AQI,
    O3_1H,
    O3_8H,
    PM2_5_1H,
    PM2_5_24H,
    PM10_1H,
    PM10_24H,
    SO2_1H,
    SO2_24H,
    NO2_1H,
    NO2_24H,
    CO_1H,
    CO_8H,
    CO_24H,
}

impl Pollutant {
    /// Every pollutant, in declaration order.
    pub const ALL: [Pollutant; 14] = [
        Pollutant::AQI,
        Pollutant::O3_1H,
        Pollutant::O3_8H,
        Pollutant::PM2_5_1H,
        Pollutant::PM2_5_24H,
        Pollutant::PM10_1H,
        Pollutant::PM10_24H,
        Pollutant::SO2_1H,
        Pollutant::SO2_24H,
        Pollutant::NO2_1H,
        Pollutant::NO2_24H,
        Pollutant::CO_1H,
        Pollutant::CO_8H,
        Pollutant::CO_24H,
    ];

    pub const fn code(self) -> i32 {
        match self {
            Pollutant::AQI => 1,
            Pollutant::O3_1H => 10,
            Pollutant::O3_8H => 11,
            Pollutant::PM2_5_1H => 20,
            Pollutant::PM2_5_24H => 21,
            Pollutant::PM10_1H => 30,
            Pollutant::PM10_24H => 31,
            Pollutant::SO2_1H => 40,
            Pollutant::SO2_24H => 41,
            Pollutant::NO2_1H => 50,
            Pollutant::NO2_24H => 51,
            Pollutant::CO_1H => 60,
            Pollutant::CO_8H => 61,
            Pollutant::CO_24H => 62,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Pollutant::AQI => "AQI",
            Pollutant::O3_1H => "O3_1H",
            Pollutant::O3_8H => "O3_8H",
            Pollutant::PM2_5_1H => "PM2_5_1H",
            Pollutant::PM2_5_24H => "PM2_5_24H",
            Pollutant::PM10_1H => "PM10_1H",
            Pollutant::PM10_24H => "PM10_24H",
            Pollutant::SO2_1H => "SO2_1H",
            Pollutant::SO2_24H => "SO2_24H",
            Pollutant::NO2_1H => "NO2_1H",
            Pollutant::NO2_24H => "NO2_24H",
            Pollutant::CO_1H => "CO_1H",
            Pollutant::CO_8H => "CO_8H",
            Pollutant::CO_24H => "CO_24H",
        }
    }

    pub const fn species(self) -> Species {
        match self {
            Pollutant::AQI => Species::AQI,
            Pollutant::O3_1H | Pollutant::O3_8H => Species::O3,
            Pollutant::PM2_5_1H | Pollutant::PM2_5_24H => Species::PM2_5,
            Pollutant::PM10_1H | Pollutant::PM10_24H => Species::PM10,
            Pollutant::SO2_1H | Pollutant::SO2_24H => Species::SO2,
            Pollutant::NO2_1H | Pollutant::NO2_24H => Species::NO2,
            Pollutant::CO_1H | Pollutant::CO_8H | Pollutant::CO_24H => Species::CO,
        }
    }

    /// Position in [`Pollutant::ALL`], used as the bit index of a
    /// [`PollutantSet`].
    const fn index(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pollutant {
    type Err = Error;

    /// Parses the canonical name, e.g. `"PM10_1H"`. Case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownPollutant)
    }
}

impl TryFrom<i32> for Pollutant {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Pollutant::ALL
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .ok_or(Error::UnknownPollutantCode(code))
    }
}

/// A single concentration measurement.
///
/// The unit of `value` is whatever the target standard's table expects
/// for `pollutant`; use [`Reading::convert`] to get there first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    pub pollutant: Pollutant,
    pub value: f64,
}

impl Reading {
    pub const fn new(pollutant: Pollutant, value: f64) -> Self {
        Self { pollutant, value }
    }

    /// Returns a copy of this reading with its value converted between
    /// concentration units. See [`convert::convert`].
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::{Pollutant, Reading, Unit};
    ///
    /// let so2 = Reading::new(Pollutant::SO2_1H, 1.0).convert(Unit::Ppm, Unit::Ppb);
    /// assert_eq!(so2.value, 1000.0);
    /// ```
    pub fn convert(self, from: Unit, to: Unit) -> Self {
        Self {
            pollutant: self.pollutant,
            value: convert::convert(self.value, from, to, self.pollutant),
        }
    }
}

/// A set of pollutants backed by a single bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollutantSet {
    bits: u16,
}

impl PollutantSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, pollutant: Pollutant) {
        self.bits |= 1u16 << pollutant.index();
    }

    pub fn remove(&mut self, pollutant: Pollutant) {
        self.bits &= !(1u16 << pollutant.index());
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    pub const fn contains(&self, pollutant: Pollutant) -> bool {
        self.bits & (1u16 << pollutant.index()) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Pollutant> {
        Pollutant::ALL
            .into_iter()
            .filter(move |p| self.contains(*p))
    }
}

impl fmt::Debug for PollutantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Pollutant> for PollutantSet {
    fn from_iter<I: IntoIterator<Item = Pollutant>>(iter: I) -> Self {
        let mut set = PollutantSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Pollutant> for PollutantSet {
    fn extend<I: IntoIterator<Item = Pollutant>>(&mut self, iter: I) {
        for pollutant in iter {
            self.insert(pollutant);
        }
    }
}

impl<const N: usize> From<[Pollutant; N]> for PollutantSet {
    fn from(pollutants: [Pollutant; N]) -> Self {
        pollutants.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PollutantSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PollutantSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> serde::de::Visitor<'de> for SetVisitor {
            type Value = PollutantSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of pollutants")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut set = PollutantSet::new();
                while let Some(pollutant) = seq.next_element::<Pollutant>()? {
                    set.insert(pollutant);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor)
    }
}
