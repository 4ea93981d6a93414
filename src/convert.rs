//! Concentration unit conversions
//!
//! Gas concentrations are reported either as a volume ratio (ppm, ppb) or
//! as a mass concentration (mg/m³, µg/m³). Moving between the two needs
//! the pollutant's molecular weight and assumes 25 °C at 1 atm, where one
//! mole of gas occupies 24.45 L.
//!
//! None of these functions fail. A pollutant without a known molecular
//! weight (particulates, the AQI axis) passes through volume/mass
//! conversions unchanged.

use crate::pollutant::{Pollutant, Species};

/// Molar volume in litres at 25 °C and 1 atm.
const MOLAR_VOLUME: f64 = 24.45;

/// `1 / MOLAR_VOLUME`, rounded the way the published conversion formula
/// rounds it.
const INVERSE_MOLAR_VOLUME: f64 = 0.0409;

/// Concentration units accepted by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Parts per million by volume
    Ppm,
    /// Parts per billion by volume
    Ppb,
    /// Milligrams per cubic metre
    MgPerM3,
    /// Micrograms per cubic metre
    UgPerM3,
}

impl Unit {
    const fn is_volume_ratio(self) -> bool {
        matches!(self, Unit::Ppm | Unit::Ppb)
    }
}

/// Molecular weight in g/mol for gaseous pollutants, shared by every
/// averaging window of the same species.
pub const fn molecular_weight(pollutant: Pollutant) -> Option<f64> {
    match pollutant.species() {
        Species::CO => Some(28.01),
        Species::NO2 => Some(46.0055),
        Species::O3 => Some(48.00),
        Species::SO2 => Some(64.066),
        Species::AQI | Species::PM2_5 | Species::PM10 => None,
    }
}

pub fn ppm_to_ppb(value: f64) -> f64 {
    value * 1000.0
}

pub fn ppb_to_ppm(value: f64) -> f64 {
    value / 1000.0
}

pub fn ppm_to_mg_per_m3(pollutant: Pollutant, value: f64) -> f64 {
    match molecular_weight(pollutant) {
        Some(weight) => INVERSE_MOLAR_VOLUME * value * weight,
        None => value,
    }
}

pub fn mg_per_m3_to_ppm(pollutant: Pollutant, value: f64) -> f64 {
    match molecular_weight(pollutant) {
        Some(weight) => MOLAR_VOLUME * value / weight,
        None => value,
    }
}

pub fn ug_per_m3_to_mg_per_m3(value: f64) -> f64 {
    value / 1000.0
}

pub fn mg_per_m3_to_ug_per_m3(value: f64) -> f64 {
    value * 1000.0
}

pub fn ug_per_m3_to_ppm(pollutant: Pollutant, value: f64) -> f64 {
    mg_per_m3_to_ppm(pollutant, ug_per_m3_to_mg_per_m3(value))
}

pub fn ug_per_m3_to_ppb(pollutant: Pollutant, value: f64) -> f64 {
    ppm_to_ppb(ug_per_m3_to_ppm(pollutant, value))
}

pub fn mg_per_m3_to_ppb(pollutant: Pollutant, value: f64) -> f64 {
    ppm_to_ppb(mg_per_m3_to_ppm(pollutant, value))
}

pub fn ppm_to_ug_per_m3(pollutant: Pollutant, value: f64) -> f64 {
    mg_per_m3_to_ug_per_m3(ppm_to_mg_per_m3(pollutant, value))
}

pub fn ppb_to_mg_per_m3(pollutant: Pollutant, value: f64) -> f64 {
    ppm_to_mg_per_m3(pollutant, ppb_to_ppm(value))
}

pub fn ppb_to_ug_per_m3(pollutant: Pollutant, value: f64) -> f64 {
    mg_per_m3_to_ug_per_m3(ppb_to_mg_per_m3(pollutant, value))
}

/// Converts `value` of `pollutant` from one concentration unit to another.
///
/// Conversions within the same family (ppm/ppb, or mg/µg) are plain
/// scalings. Crossing between volume ratio and mass concentration goes
/// through the pollutant's molecular weight, and is the identity when that
/// weight is unknown.
///
/// # Examples
///
/// ```
/// use aqi::{convert, Pollutant, Unit};
///
/// let ppb = convert(0.035, Unit::Ppm, Unit::Ppb, Pollutant::SO2_1H);
/// assert_eq!(ppb, 35.0);
///
/// // Particulates have no molecular weight, so only the scaling applies
/// let pm = convert(12.0, Unit::UgPerM3, Unit::Ppm, Pollutant::PM2_5_24H);
/// assert_eq!(pm, 12.0 / 1000.0);
/// ```
pub fn convert(value: f64, from: Unit, to: Unit, pollutant: Pollutant) -> f64 {
    if crosses_families(from, to) && molecular_weight(pollutant).is_none() {
        trace!("no molecular weight for {}, scaling only", pollutant);
    }

    match (from, to) {
        (Unit::Ppm, Unit::Ppb) => ppm_to_ppb(value),
        (Unit::Ppb, Unit::Ppm) => ppb_to_ppm(value),
        (Unit::MgPerM3, Unit::UgPerM3) => mg_per_m3_to_ug_per_m3(value),
        (Unit::UgPerM3, Unit::MgPerM3) => ug_per_m3_to_mg_per_m3(value),

        (Unit::Ppm, Unit::MgPerM3) => ppm_to_mg_per_m3(pollutant, value),
        (Unit::Ppm, Unit::UgPerM3) => ppm_to_ug_per_m3(pollutant, value),
        (Unit::Ppb, Unit::MgPerM3) => ppb_to_mg_per_m3(pollutant, value),
        (Unit::Ppb, Unit::UgPerM3) => ppb_to_ug_per_m3(pollutant, value),

        (Unit::MgPerM3, Unit::Ppm) => mg_per_m3_to_ppm(pollutant, value),
        (Unit::MgPerM3, Unit::Ppb) => mg_per_m3_to_ppb(pollutant, value),
        (Unit::UgPerM3, Unit::Ppm) => ug_per_m3_to_ppm(pollutant, value),
        (Unit::UgPerM3, Unit::Ppb) => ug_per_m3_to_ppb(pollutant, value),

        (Unit::Ppm, Unit::Ppm)
        | (Unit::Ppb, Unit::Ppb)
        | (Unit::MgPerM3, Unit::MgPerM3)
        | (Unit::UgPerM3, Unit::UgPerM3) => value,
    }
}

/// Volume ratio to mass concentration or back.
const fn crosses_families(from: Unit, to: Unit) -> bool {
    from.is_volume_ratio() != to.is_volume_ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_ppb() {
        assert_eq!(ppm_to_ppb(0.054), 54.0);
        assert_eq!(ppb_to_ppm(304.0), 0.304);
        assert_eq!(ppb_to_ppm(ppm_to_ppb(0.125)), 0.125);
    }

    #[test]
    fn test_mass_scaling() {
        assert_eq!(ug_per_m3_to_mg_per_m3(150.0), 0.15);
        assert_eq!(mg_per_m3_to_ug_per_m3(2.5), 2500.0);
    }

    #[test]
    fn test_molecular_weight() {
        assert_eq!(molecular_weight(Pollutant::CO_1H), Some(28.01));
        assert_eq!(molecular_weight(Pollutant::CO_24H), Some(28.01));
        assert_eq!(molecular_weight(Pollutant::SO2_24H), Some(64.066));
        assert_eq!(molecular_weight(Pollutant::PM10_1H), None);
        assert_eq!(molecular_weight(Pollutant::AQI), None);
    }

    #[test]
    fn test_unknown_weight_is_identity() {
        assert_eq!(ppm_to_mg_per_m3(Pollutant::PM2_5_1H, 42.0), 42.0);
        assert_eq!(mg_per_m3_to_ppm(Pollutant::PM10_24H, 42.0), 42.0);
        assert_eq!(
            convert(42.0, Unit::MgPerM3, Unit::Ppm, Pollutant::AQI),
            42.0
        );
    }

    #[test]
    fn test_same_family_skips_weight() {
        assert!(!crosses_families(Unit::Ppm, Unit::Ppb));
        assert!(!crosses_families(Unit::UgPerM3, Unit::MgPerM3));
        assert!(crosses_families(Unit::UgPerM3, Unit::Ppb));

        assert_eq!(convert(75.0, Unit::Ppb, Unit::Ppm, Pollutant::SO2_1H), 0.075);
        assert_eq!(
            convert(800.0, Unit::UgPerM3, Unit::MgPerM3, Pollutant::O3_8H),
            0.8
        );
        assert_eq!(convert(3.0, Unit::Ppb, Unit::Ppb, Pollutant::NO2_1H), 3.0);
    }

    #[test]
    fn test_co_mass_to_volume() {
        // 24.45 * 0.2 / 28.01
        let ppm = convert(0.2, Unit::MgPerM3, Unit::Ppm, Pollutant::CO_1H);
        assert!((ppm - 0.174580506962).abs() < 1e-9);
    }
}
