//! EU EEA
//!
//! Shares the six-level 0-500 index with the other standards, with its own
//! colors and level names. Tables are in µg/m³; CO is not rated.
//!
//! NO2, O3 and SO2 are rated on hourly concentrations. PM10 and PM2.5 are
//! normally rated on the 24-hour running mean, available once at least 18
//! of the past 24 hours have values.
//!
//! References:
//!
//! - https://www.eea.europa.eu/themes/air/air-quality-index
//! - https://airindex.eea.europa.eu/Map/AQI/Viewer/

use super::{Cutoff, Profile, Standard};
use crate::level::{LevelTable, Rgb};
use crate::pollutant::Pollutant;
use crate::table::{Tables, AQI_BREAKPOINTS};

const SO2_1H: [f64; 5] = [0.0, 150.0, 500.0, 650.0, 800.0];
const NO2_1H: [f64; 8] = [0.0, 100.0, 200.0, 700.0, 1200.0, 2340.0, 3090.0, 3840.0];
const O3_1H: [f64; 8] = [0.0, 160.0, 200.0, 300.0, 400.0, 800.0, 1000.0, 1200.0];
const PM10: [f64; 8] = [0.0, 50.0, 150.0, 250.0, 350.0, 420.0, 500.0, 600.0];
const PM2_5: [f64; 8] = [0.0, 35.0, 75.0, 115.0, 150.0, 250.0, 350.0, 500.0];

const COLORS: [Rgb; 6] = [
    Rgb::new(104, 233, 226), // Good
    Rgb::new(95, 193, 162),  // Fair
    Rgb::new(238, 224, 85),  // Moderate
    Rgb::new(241, 84, 76),   // Poor
    Rgb::new(131, 27, 45),   // Very poor
    Rgb::new(106, 40, 104),  // Extremely poor
];

const DESCRIPTIONS: [&str; 6] = [
    "Good",
    "Fair",
    "Moderate",
    "Poor",
    "Very poor",
    "Extremely poor",
];

static PROFILE: Profile = Profile {
    name: "eea",
    tables: Tables::new(
        &AQI_BREAKPOINTS,
        &[
            (Pollutant::SO2_1H, &SO2_1H),
            (Pollutant::NO2_1H, &NO2_1H),
            (Pollutant::O3_1H, &O3_1H),
            (Pollutant::PM10_1H, &PM10),
            (Pollutant::PM10_24H, &PM10),
            (Pollutant::PM2_5_1H, &PM2_5),
            (Pollutant::PM2_5_24H, &PM2_5),
        ],
    ),
    // Same threshold as the EPA hourly SO2 cutoff, applied to the µg/m³
    // table as is
    cutoffs: &[Cutoff::new(Pollutant::SO2_1H, 304.0)],
    levels: LevelTable::new(&COLORS, &DESCRIPTIONS),
};

/// The EU EEA AQI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eea {
    pub fail_on_unsupported: bool,
}

impl Eea {
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

impl Standard for Eea {
    fn profile(&self) -> &'static Profile {
        &PROFILE
    }

    fn fail_on_unsupported(&self) -> bool {
        self.fail_on_unsupported
    }
}
