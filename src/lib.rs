//! AQI library
//!
//! This library calculates the Air Quality Index of a set of pollutant
//! readings under the US EPA, China MEP and EU EEA standards, and maps the
//! result to the standard's severity levels, colors and descriptions. It
//! supports both std and no_std environments and never allocates.
//!
//! Readings must be in the unit of the chosen standard's tables. The
//! [`convert`] module moves concentrations between ppm, ppb, mg/m³ and
//! µg/m³ first if needed.
//!
//! # Examples
//!
//! ```
//! use aqi::{Mep, Pollutant, Reading, Standard};
//!
//! let mep = Mep::new();
//! let result = mep
//!     .calculate(&[
//!         Reading::new(Pollutant::PM2_5_1H, 16.0),
//!         Reading::new(Pollutant::PM10_1H, 88.0),
//!         Reading::new(Pollutant::O3_1H, 75.0),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(result.aqi, 69);
//! assert_eq!(mep.aqi_to_description(result.aqi), Ok("良"));
//! ```
//!
//! # Feature flags
//!
//! - `std`: standard library support
//! - `defmt`: log calculation steps through `defmt`
//! - `log`: log calculation steps through `log`
//! - `serde`: serialization of readings, results and levels

#![cfg_attr(not(feature = "std"), no_std)]

// This must go first so the logging macros are visible to the other modules
#[macro_use]
mod fmt;

pub mod convert;
mod error;
pub mod interpolate;
pub mod level;
pub mod pollutant;
pub mod standard;
pub mod table;

pub use convert::{convert, Unit};
pub use error::{Error, Result};
pub use level::{AqiLevel, Rgb};
pub use pollutant::{Pollutant, PollutantSet, Reading, Species};
pub use standard::{AnyStandard, AqiResult, Eea, Epa, Mep, Standard};
