//! Piecewise-linear interpolation over breakpoint tables

use crate::error::{Error, Result};
use crate::table::check_lengths;

/// A bracketing segment of a breakpoint table, identified by the position
/// of its lower breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub low: usize,
    pub high: usize,
}

/// Finds the segment `(low, high]` holding `value`.
///
/// When no segment holds the value, the last segment of the table is
/// returned so the caller can extrapolate along its slope. Returns `None`
/// only for tables with fewer than two breakpoints.
pub fn locate(value: f64, breakpoints: &[f64]) -> Option<Segment> {
    if breakpoints.len() < 2 {
        return None;
    }

    let bracket = breakpoints
        .windows(2)
        .position(|pair| pair[0] < value && value <= pair[1]);

    let low = bracket.unwrap_or(breakpoints.len() - 2);
    Some(Segment { low, high: low + 1 })
}

/// Calculates the sub-index of `value` against a concentration table and
/// the AQI axis it is paired with.
///
/// # Arguments
///
/// * `value` - The concentration, in the unit of the table
/// * `breakpoints` - Concentration breakpoints, in increasing order
/// * `aqi` - AQI breakpoints at the same positions
///
/// # Returns
///
/// The interpolated sub-index, truncated toward zero. Values at or below
/// the first breakpoint sit on the floor of the index. Values above the
/// last breakpoint are extrapolated along the last segment, so callers
/// that want a ceiling must clamp first.
///
/// # Errors
///
/// [`Error::MalformedTable`] when the table has fewer than two breakpoints
/// or more breakpoints than the AQI axis.
///
/// # Examples
///
/// ```
/// use aqi::interpolate::locate_and_interpolate;
/// use aqi::table::AQI_BREAKPOINTS;
///
/// let pm10 = [0.0, 54.0, 154.0, 254.0, 354.0, 424.0, 504.0, 604.0];
/// assert_eq!(locate_and_interpolate(88.0, &pm10, &AQI_BREAKPOINTS), Ok(67));
/// ```
pub fn locate_and_interpolate(value: f64, breakpoints: &[f64], aqi: &[f64]) -> Result<u16> {
    check_lengths(breakpoints, aqi)?;

    if value <= breakpoints[0] {
        return Ok(truncate(aqi[0]));
    }

    let Segment { low, high } = locate(value, breakpoints).ok_or(Error::MalformedTable {
        breakpoints: breakpoints.len(),
        levels: aqi.len(),
    })?;

    let (p_lo, p_hi) = (breakpoints[low], breakpoints[high]);
    let (iaqi_lo, iaqi_hi) = (aqi[low], aqi[high]);

    // IAQI = (IAQIhi - IAQIlo) / (BPhi - BPlo) * (Cp - BPlo) + IAQIlo
    let iaqi = (iaqi_hi - iaqi_lo) / (p_hi - p_lo) * (value - p_lo) + iaqi_lo;
    Ok(truncate(iaqi))
}

/// Truncates toward zero. Saturates at the bounds of `u16`, NaN maps to 0.
fn truncate(iaqi: f64) -> u16 {
    libm::trunc(iaqi) as u16
}
