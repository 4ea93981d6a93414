//! US EPA, as published in EPA 454/B-18-007
//!
//! Gases are in ppm (CO, O3) or ppb (SO2, NO2), particulates in µg/m³.
//! See https://www.airnow.gov/aqi/aqi-calculator-concentration/ to check
//! values.

use super::{Cutoff, Profile, Standard};
use crate::level::{LevelTable, Rgb};
use crate::pollutant::Pollutant;
use crate::table::{Tables, AQI_BREAKPOINTS};

const CO_8H: [f64; 8] = [0.0, 4.4, 9.4, 12.4, 15.4, 30.4, 40.4, 50.4];
const SO2_1H: [f64; 8] = [0.0, 35.0, 75.0, 185.0, 304.0, 604.0, 804.0, 1004.0];
const NO2_1H: [f64; 8] = [0.0, 53.0, 100.0, 360.0, 649.0, 1249.0, 1649.0, 2049.0];
// 8-hour ozone only defines the index up to 300
const O3_8H: [f64; 6] = [0.0, 0.054, 0.070, 0.085, 0.105, 0.2];
// 1-hour ozone has no "Good" band
const O3_1H: [f64; 8] = [0.0, 0.0, 0.125, 0.164, 0.204, 0.404, 0.504, 0.604];
const PM2_5: [f64; 8] = [0.0, 12.0, 35.4, 55.4, 150.4, 250.4, 350.4, 500.4];
const PM10: [f64; 8] = [0.0, 54.0, 154.0, 254.0, 354.0, 424.0, 504.0, 604.0];

const COLORS: [Rgb; 6] = [
    Rgb::new(0, 228, 0),    // Green
    Rgb::new(255, 255, 0),  // Yellow
    Rgb::new(255, 126, 0),  // Orange
    Rgb::new(255, 0, 0),    // Red
    Rgb::new(143, 63, 151), // Purple
    Rgb::new(126, 0, 35),   // Maroon
];

const DESCRIPTIONS: [&str; 6] = [
    "Good",
    "Moderate",
    "Unhealthy for Sensitive Groups",
    "Unhealthy",
    "Very Unhealthy",
    "Hazardous",
];

static PROFILE: Profile = Profile {
    name: "epa",
    tables: Tables::new(
        &AQI_BREAKPOINTS,
        &[
            (Pollutant::CO_8H, &CO_8H),
            (Pollutant::SO2_1H, &SO2_1H),
            (Pollutant::NO2_1H, &NO2_1H),
            (Pollutant::O3_8H, &O3_8H),
            (Pollutant::O3_1H, &O3_1H),
            (Pollutant::PM2_5_1H, &PM2_5),
            (Pollutant::PM2_5_24H, &PM2_5),
            (Pollutant::PM10_1H, &PM10),
            (Pollutant::PM10_24H, &PM10),
        ],
    ),
    cutoffs: &[
        // 8-hour O3 does not define AQI values of 301 or higher, those
        // come from 1-hour O3
        Cutoff::new(Pollutant::O3_8H, 0.2),
        // 1-hour SO2 does not define AQI values of 200 or higher, those
        // come from 24-hour SO2
        Cutoff::new(Pollutant::SO2_1H, 304.0),
    ],
    levels: LevelTable::new(&COLORS, &DESCRIPTIONS),
};

/// The US EPA AQI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Epa {
    pub fail_on_unsupported: bool,
}

impl Epa {
    pub const fn new() -> Self {
        Self {
            fail_on_unsupported: false,
        }
    }

    /// Fails on pollutants without an EPA breakpoint table instead of
    /// skipping them.
    pub const fn strict() -> Self {
        Self {
            fail_on_unsupported: true,
        }
    }
}

impl Standard for Epa {
    fn profile(&self) -> &'static Profile {
        &PROFILE
    }

    fn fail_on_unsupported(&self) -> bool {
        self.fail_on_unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::level::AqiLevel;
    use crate::pollutant::{PollutantSet, Reading};

    #[test]
    fn test_tables_are_well_formed() {
        assert_eq!(PROFILE.tables.validate(), Ok(()));
    }

    #[test]
    fn test_calculate() {
        let result = Epa::new()
            .calculate(&[
                Reading::new(Pollutant::PM2_5_1H, 16.0),
                Reading::new(Pollutant::PM10_1H, 88.0),
            ])
            .unwrap();

        assert_eq!(result.aqi, 67);
        assert_eq!(result.primary_pollutants, PollutantSet::from([Pollutant::PM10_1H]));
    }

    #[test]
    fn test_pm25_breakpoints() {
        let epa = Epa::new();
        let iaqi = |value| epa.sub_index(&Reading::new(Pollutant::PM2_5_24H, value));

        assert_eq!(iaqi(0.0), Ok(Some(0)));
        assert_eq!(iaqi(6.0), Ok(Some(25)));
        assert_eq!(iaqi(12.0), Ok(Some(50)));
        assert_eq!(iaqi(500.4), Ok(Some(500)));
        assert_eq!(iaqi(650.0), Ok(Some(500)));
    }

    #[test]
    fn test_ozone_cutoff() {
        let epa = Epa::new();
        assert_eq!(epa.sub_index(&Reading::new(Pollutant::O3_8H, 0.2)), Ok(Some(300)));
        assert_eq!(epa.sub_index(&Reading::new(Pollutant::O3_8H, 0.25)), Ok(None));
        // 1-hour ozone takes over
        assert_eq!(epa.sub_index(&Reading::new(Pollutant::O3_1H, 0.504)), Ok(Some(400)));
    }

    #[test]
    fn test_so2_cutoff() {
        let epa = Epa::new();
        assert_eq!(epa.sub_index(&Reading::new(Pollutant::SO2_1H, 304.0)), Ok(Some(200)));
        assert_eq!(epa.sub_index(&Reading::new(Pollutant::SO2_1H, 305.0)), Ok(None));

        let result = epa
            .calculate(&[
                Reading::new(Pollutant::SO2_1H, 500.0),
                Reading::new(Pollutant::PM10_1H, 54.0),
            ])
            .unwrap();
        assert_eq!(result.aqi, 50);
        assert!(result.primary_pollutants.is_empty());
    }

    #[test]
    fn test_unsupported() {
        let readings = [
            Reading::new(Pollutant::PM10_24H, 104.0),
            Reading::new(Pollutant::CO_1H, 3.0),
        ];

        let result = Epa::new().calculate(&readings).unwrap();
        assert_eq!(result.aqi, 75);

        assert_eq!(
            Epa::strict().calculate(&readings),
            Err(Error::UnsupportedPollutant(Pollutant::CO_1H))
        );
        assert!(!Epa::new().supports(Pollutant::CO_24H));
        assert!(Epa::new().supports(Pollutant::CO_8H));
    }

    #[test]
    fn test_levels() {
        let epa = Epa::new();
        assert_eq!(epa.name(), "epa");
        assert_eq!(epa.aqi_to_color(33), Ok(Rgb::new(0, 228, 0)));
        assert_eq!(epa.aqi_to_description(33), Ok("Good"));
        assert_eq!(
            epa.level_to_description(AqiLevel::Level3),
            Ok("Unhealthy for Sensitive Groups")
        );
        assert_eq!(epa.level_to_color(AqiLevel::Level6), Ok(Rgb::new(126, 0, 35)));
    }
}
