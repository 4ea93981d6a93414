//! AQI severity levels
//!
//! Every supported standard splits the index into the same six levels.
//! Only the colors and descriptions attached to them differ, see
//! [`LevelTable`].

use crate::error::{Error, Result};

/// Severity level of an AQI value, from `Level1` (best) to `Level6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AqiLevel {
    Level1 = 1,
    Level2 = 2,
    Level3 = 3,
    Level4 = 4,
    Level5 = 5,
    Level6 = 6,
}

impl AqiLevel {
    /// Maps an AQI value to its level. The upper bounds of levels 1 to 5
    /// are 50, 100, 150, 200 and 300; anything above is level 6.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::AqiLevel;
    ///
    /// assert_eq!(AqiLevel::from_aqi(50), AqiLevel::Level1);
    /// assert_eq!(AqiLevel::from_aqi(51), AqiLevel::Level2);
    /// assert_eq!(AqiLevel::from_aqi(301), AqiLevel::Level6);
    /// ```
    pub const fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => AqiLevel::Level1,
            51..=100 => AqiLevel::Level2,
            101..=150 => AqiLevel::Level3,
            151..=200 => AqiLevel::Level4,
            201..=300 => AqiLevel::Level5,
            _ => AqiLevel::Level6,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AqiLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(AqiLevel::Level1),
            2 => Ok(AqiLevel::Level2),
            3 => Ok(AqiLevel::Level3),
            4 => Ok(AqiLevel::Level4),
            5 => Ok(AqiLevel::Level5),
            6 => Ok(AqiLevel::Level6),
            _ => Err(Error::UnknownLevel(level)),
        }
    }
}

/// An sRGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-standard presentation of the six levels.
#[derive(Debug, Clone, Copy)]
pub struct LevelTable {
    colors: &'static [Rgb],
    descriptions: &'static [&'static str],
}

impl LevelTable {
    pub const fn new(colors: &'static [Rgb], descriptions: &'static [&'static str]) -> Self {
        Self {
            colors,
            descriptions,
        }
    }

    pub fn color(&self, level: AqiLevel) -> Result<Rgb> {
        self.colors
            .get(usize::from(level.number()) - 1)
            .copied()
            .ok_or(Error::UnknownLevel(level.number()))
    }

    pub fn description(&self, level: AqiLevel) -> Result<&'static str> {
        self.descriptions
            .get(usize::from(level.number()) - 1)
            .copied()
            .ok_or(Error::UnknownLevel(level.number()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_aqi() {
        assert_eq!(AqiLevel::from_aqi(0), AqiLevel::Level1);
        assert_eq!(AqiLevel::from_aqi(25), AqiLevel::Level1);
        assert_eq!(AqiLevel::from_aqi(50), AqiLevel::Level1);
        assert_eq!(AqiLevel::from_aqi(51), AqiLevel::Level2);
        assert_eq!(AqiLevel::from_aqi(100), AqiLevel::Level2);
        assert_eq!(AqiLevel::from_aqi(101), AqiLevel::Level3);
        assert_eq!(AqiLevel::from_aqi(150), AqiLevel::Level3);
        assert_eq!(AqiLevel::from_aqi(151), AqiLevel::Level4);
        assert_eq!(AqiLevel::from_aqi(200), AqiLevel::Level4);
        assert_eq!(AqiLevel::from_aqi(201), AqiLevel::Level5);
        assert_eq!(AqiLevel::from_aqi(300), AqiLevel::Level5);
        assert_eq!(AqiLevel::from_aqi(301), AqiLevel::Level6);
        assert_eq!(AqiLevel::from_aqi(500), AqiLevel::Level6);
        assert_eq!(AqiLevel::from_aqi(999), AqiLevel::Level6);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(AqiLevel::try_from(1u8), Ok(AqiLevel::Level1));
        assert_eq!(AqiLevel::try_from(6u8), Ok(AqiLevel::Level6));
        assert_eq!(AqiLevel::try_from(0u8), Err(Error::UnknownLevel(0)));
        assert_eq!(AqiLevel::try_from(7u8), Err(Error::UnknownLevel(7)));
    }

    #[test]
    fn test_incomplete_table() {
        static PARTIAL: LevelTable = LevelTable::new(&[Rgb { r: 0, g: 255, b: 0 }], &["Good"]);

        assert_eq!(PARTIAL.color(AqiLevel::Level1), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(PARTIAL.description(AqiLevel::Level1), Ok("Good"));
        assert_eq!(PARTIAL.color(AqiLevel::Level2), Err(Error::UnknownLevel(2)));
        assert_eq!(PARTIAL.description(AqiLevel::Level6), Err(Error::UnknownLevel(6)));
    }
}
