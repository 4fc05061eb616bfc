//! Device models for krets.
//!
//! Currently this is the ideal junction diode evaluated with the Shockley
//! equation.

pub mod diode;
pub mod error;

pub use diode::{DiodeParams, diode_current, small_signal_conductance, thermal_voltage};
pub use error::{Error, Result};
