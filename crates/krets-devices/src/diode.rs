//! Ideal diode evaluated with the Shockley equation.

use krets_core::constants::{K_BOLTZMANN, Q_ELECTRON, T_NOMINAL};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Diode bias point and model parameters.
///
/// Missing fields take their default when deserialized, so a parameter file
/// only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiodeParams {
    /// Saturation current Is (A). Default: 1e-12.
    pub saturation_current: f64,
    /// Voltage across the junction Vd (V). Default: 0.0.
    pub diode_voltage: f64,
    /// Junction temperature (K). Default: 300.0.
    pub temperature: f64,
    /// Series resistance Rs (ohms). Default: 0.0.
    ///
    /// Placeholder for a series-resistance model; not used by the equations
    /// in this module.
    pub parasitic_resistance: f64,
    /// Emission coefficient N. Default: 1.0.
    ///
    /// Placeholder for a non-ideal junction model; not used by the equations
    /// in this module.
    pub emission_coefficient: f64,
}

impl Default for DiodeParams {
    fn default() -> Self {
        Self {
            saturation_current: 1e-12,
            diode_voltage: 0.0,
            temperature: T_NOMINAL,
            parasitic_resistance: 0.0,
            emission_coefficient: 1.0,
        }
    }
}

impl DiodeParams {
    /// Check that every parameter is a usable number.
    ///
    /// This is a numeric domain check only, not a plausibility check.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("saturation_current", self.saturation_current),
            ("diode_voltage", self.diode_voltage),
            ("temperature", self.temperature),
            ("parasitic_resistance", self.parasitic_resistance),
            ("emission_coefficient", self.emission_coefficient),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidValue {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if self.temperature <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "temperature must be above 0 K, got {}",
                self.temperature
            )));
        }
        if self.saturation_current <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "saturation current must be positive, got {}",
                self.saturation_current
            )));
        }
        Ok(())
    }

    /// Thermal voltage at this parameter set's temperature.
    pub fn thermal_voltage(&self) -> f64 {
        thermal_voltage(self.temperature)
    }
}

/// Thermal voltage kT/q at a given temperature.
pub fn thermal_voltage(temp_k: f64) -> f64 {
    K_BOLTZMANN * temp_k / Q_ELECTRON
}

/// Small-signal conductance dI/dV at the bias point.
///
/// `g = Is / Vt * exp(Vd / Vt)`. Large bias voltages overflow to infinity
/// following IEEE-754 rather than failing.
pub fn small_signal_conductance(params: &DiodeParams) -> f64 {
    let vt = params.thermal_voltage();
    let g = (params.saturation_current / vt) * (params.diode_voltage / vt).exp();
    log::debug!(
        "diode Vt = {:e} V, Vd = {} V, g = {:e} S",
        vt,
        params.diode_voltage,
        g
    );
    g
}

/// Junction current at the bias point: `Is * (exp(Vd / Vt) - 1)`.
pub fn diode_current(params: &DiodeParams) -> f64 {
    let vt = params.thermal_voltage();
    params.saturation_current * (params.diode_voltage / vt).exp_m1()
}
