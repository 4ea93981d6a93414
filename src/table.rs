//! Breakpoint table registry
//!
//! Every standard publishes one shared AQI axis and, per pollutant, a
//! sequence of concentration breakpoints paired with it by position. A
//! concentration table may be shorter than the axis, in which case it only
//! defines the lower part of the index.

use crate::error::{Error, Result};
use crate::pollutant::Pollutant;

/// AQI axis shared by every standard in this crate.
pub const AQI_BREAKPOINTS: [f64; 8] = [0.0, 50.0, 100.0, 150.0, 200.0, 300.0, 400.0, 500.0];

/// Sub-index reported for a concentration above the last breakpoint.
pub const AQI_CEILING: u16 = 500;

/// Immutable breakpoint tables of a single standard.
#[derive(Debug, Clone, Copy)]
pub struct Tables {
    aqi: &'static [f64],
    pollutants: &'static [(Pollutant, &'static [f64])],
}

impl Tables {
    pub const fn new(aqi: &'static [f64], pollutants: &'static [(Pollutant, &'static [f64])]) -> Self {
        Self { aqi, pollutants }
    }

    /// The AQI axis the concentration tables are paired with.
    pub const fn aqi(&self) -> &'static [f64] {
        self.aqi
    }

    /// Concentration breakpoints for `pollutant`, if the standard has any.
    /// [`Pollutant::AQI`] resolves to the AQI axis itself.
    pub fn get(&self, pollutant: Pollutant) -> Option<&'static [f64]> {
        if pollutant == Pollutant::AQI {
            return Some(self.aqi);
        }
        self.pollutants
            .iter()
            .find(|(p, _)| *p == pollutant)
            .map(|(_, breakpoints)| *breakpoints)
    }

    /// Checks every table against the AQI axis.
    pub fn validate(&self) -> Result<()> {
        for (_, breakpoints) in self.pollutants {
            check_lengths(breakpoints, self.aqi)?;
            if breakpoints.windows(2).any(|pair| pair[1] < pair[0]) {
                return Err(Error::MalformedTable {
                    breakpoints: breakpoints.len(),
                    levels: self.aqi.len(),
                });
            }
        }
        Ok(())
    }
}

/// A concentration table needs at least one segment and cannot outrun the
/// AQI axis it is paired with.
pub(crate) fn check_lengths(breakpoints: &[f64], aqi: &[f64]) -> Result<()> {
    if breakpoints.len() < 2 || breakpoints.len() > aqi.len() {
        return Err(Error::MalformedTable {
            breakpoints: breakpoints.len(),
            levels: aqi.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLES: Tables = Tables::new(
        &AQI_BREAKPOINTS,
        &[
            (Pollutant::PM10_1H, &[0.0, 50.0, 150.0]),
            (Pollutant::CO_1H, &[0.0, 5.0]),
        ],
    );

    #[test]
    fn test_lookup() {
        assert_eq!(TABLES.get(Pollutant::CO_1H), Some(&[0.0, 5.0][..]));
        assert_eq!(TABLES.get(Pollutant::AQI), Some(&AQI_BREAKPOINTS[..]));
        assert_eq!(TABLES.get(Pollutant::O3_8H), None);
    }

    #[test]
    fn test_validate() {
        assert_eq!(TABLES.validate(), Ok(()));

        static SHORT: Tables = Tables::new(&AQI_BREAKPOINTS, &[(Pollutant::CO_1H, &[0.0])]);
        assert_eq!(
            SHORT.validate(),
            Err(Error::MalformedTable {
                breakpoints: 1,
                levels: 8
            })
        );

        static DESCENDING: Tables =
            Tables::new(&[0.0, 50.0, 100.0], &[(Pollutant::CO_1H, &[0.0, 10.0, 5.0])]);
        assert_eq!(
            DESCENDING.validate(),
            Err(Error::MalformedTable {
                breakpoints: 3,
                levels: 3
            })
        );

        static LONG: Tables = Tables::new(&[0.0, 50.0], &[(Pollutant::CO_1H, &[0.0, 1.0, 2.0])]);
        assert!(LONG.validate().is_err());
    }
}
