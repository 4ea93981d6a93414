//! China MEP, HJ 633-2012
//!
//! MEP is the former Ministry of Environmental Protection, merged into the
//! Ministry of Ecology and Environment in 2018. The tables here are the
//! real-time report variant, which rates PM2.5 and PM10 on 1-hour values.
//!
//! Every table is in µg/m³, except CO in mg/m³.

use super::{Cutoff, Profile, Standard};
use crate::level::{LevelTable, Rgb};
use crate::pollutant::Pollutant;
use crate::table::{Tables, AQI_BREAKPOINTS};

const CO_1H: [f64; 8] = [0.0, 5.0, 10.0, 35.0, 60.0, 90.0, 120.0, 150.0];
const CO_24H: [f64; 8] = [0.0, 2.0, 4.0, 14.0, 24.0, 36.0, 48.0, 60.0];
const SO2_24H: [f64; 8] = [0.0, 50.0, 150.0, 475.0, 800.0, 1600.0, 2100.0, 2620.0];
const SO2_1H: [f64; 5] = [0.0, 150.0, 500.0, 650.0, 800.0];
const NO2_24H: [f64; 8] = [0.0, 40.0, 80.0, 180.0, 280.0, 565.0, 750.0, 940.0];
const NO2_1H: [f64; 8] = [0.0, 100.0, 200.0, 700.0, 1200.0, 2340.0, 3090.0, 3840.0];
const O3_1H: [f64; 8] = [0.0, 160.0, 200.0, 300.0, 400.0, 800.0, 1000.0, 1200.0];
const O3_8H: [f64; 6] = [0.0, 100.0, 160.0, 215.0, 265.0, 800.0];
const PM10: [f64; 8] = [0.0, 50.0, 150.0, 250.0, 350.0, 420.0, 500.0, 600.0];
const PM2_5: [f64; 8] = [0.0, 35.0, 75.0, 115.0, 150.0, 250.0, 350.0, 500.0];

const COLORS: [Rgb; 6] = [
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 126, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(153, 0, 76),
    Rgb::new(126, 0, 35),
];

const DESCRIPTIONS: [&str; 6] = ["优", "良", "轻度污染", "中度污染", "重度污染", "严重污染"];

static PROFILE: Profile = Profile {
    name: "mep",
    tables: Tables::new(
        &AQI_BREAKPOINTS,
        &[
            (Pollutant::CO_1H, &CO_1H),
            (Pollutant::CO_24H, &CO_24H),
            (Pollutant::SO2_24H, &SO2_24H),
            (Pollutant::SO2_1H, &SO2_1H),
            (Pollutant::NO2_24H, &NO2_24H),
            (Pollutant::NO2_1H, &NO2_1H),
            (Pollutant::O3_1H, &O3_1H),
            (Pollutant::O3_8H, &O3_8H),
            (Pollutant::PM10_1H, &PM10),
            (Pollutant::PM10_24H, &PM10),
            (Pollutant::PM2_5_1H, &PM2_5),
            (Pollutant::PM2_5_24H, &PM2_5),
        ],
    ),
    cutoffs: &[
        // Above 800 µg/m³ SO2 is reported from the 24-hour average
        Cutoff::new(Pollutant::SO2_1H, 800.0),
        // Above 800 µg/m³ O3 is reported from the 1-hour average
        Cutoff::new(Pollutant::O3_8H, 800.0),
    ],
    levels: LevelTable::new(&COLORS, &DESCRIPTIONS),
};

/// The China MEP AQI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mep {
    pub fail_on_unsupported: bool,
}

impl Mep {
    pub const fn new() -> Self {
        Self {
            fail_on_unsupported: false,
        }
    }

    pub const fn strict() -> Self {
        Self {
            fail_on_unsupported: true,
        }
    }
}

impl Standard for Mep {
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
    use crate::level::AqiLevel;
    use crate::pollutant::{PollutantSet, Reading};

    #[test]
    fn test_tables_are_well_formed() {
        assert_eq!(PROFILE.tables.validate(), Ok(()));
    }

    #[test]
    fn test_calculate() {
        let result = Mep::new()
            .calculate(&[
                Reading::new(Pollutant::PM2_5_1H, 16.0),
                Reading::new(Pollutant::PM10_1H, 88.0),
                Reading::new(Pollutant::CO_1H, 0.2),
                Reading::new(Pollutant::SO2_1H, 3.0),
                Reading::new(Pollutant::NO2_1H, 11.0),
                Reading::new(Pollutant::O3_1H, 75.0),
            ])
            .unwrap();

        assert_eq!(result.aqi, 69);
        assert_eq!(result.primary_pollutants, PollutantSet::from([Pollutant::PM10_1H]));
    }

    #[test]
    fn test_sub_indices() {
        let mep = Mep::new();
        let iaqi = |pollutant, value| mep.sub_index(&Reading::new(pollutant, value));

        assert_eq!(iaqi(Pollutant::PM2_5_1H, 16.0), Ok(Some(22)));
        assert_eq!(iaqi(Pollutant::CO_1H, 0.2), Ok(Some(2)));
        assert_eq!(iaqi(Pollutant::SO2_1H, 3.0), Ok(Some(1)));
        assert_eq!(iaqi(Pollutant::NO2_1H, 11.0), Ok(Some(5)));
        assert_eq!(iaqi(Pollutant::O3_1H, 75.0), Ok(Some(23)));
    }

    #[test]
    fn test_so2_cutoff() {
        let mep = Mep::new();
        assert_eq!(mep.sub_index(&Reading::new(Pollutant::SO2_1H, 800.0)), Ok(Some(200)));
        assert_eq!(mep.sub_index(&Reading::new(Pollutant::SO2_1H, 900.0)), Ok(None));

        let result = mep
            .calculate(&[
                Reading::new(Pollutant::SO2_1H, 900.0),
                Reading::new(Pollutant::SO2_24H, 900.0),
            ])
            .unwrap();
        assert_eq!(result.aqi, 212);
        assert_eq!(result.primary_pollutants, PollutantSet::from([Pollutant::SO2_24H]));
    }

    #[test]
    fn test_ozone_cutoff() {
        let mep = Mep::new();
        assert_eq!(mep.sub_index(&Reading::new(Pollutant::O3_8H, 800.0)), Ok(Some(300)));
        assert_eq!(mep.sub_index(&Reading::new(Pollutant::O3_8H, 801.0)), Ok(None));
    }

    #[test]
    fn test_levels() {
        let mep = Mep::new();
        assert_eq!(mep.name(), "mep");
        assert_eq!(mep.aqi_to_color(33), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(mep.aqi_to_description(33), Ok("优"));
        assert_eq!(mep.level_to_description(AqiLevel::Level6), Ok("严重污染"));
        assert_eq!(mep.level_to_color(AqiLevel::Level5), Ok(Rgb::new(153, 0, 76)));
    }
}
