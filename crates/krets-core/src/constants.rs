//! Physical constants (CODATA 2018 exact SI values).

/// Boltzmann constant in J/K.
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Elementary charge in C.
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Reference temperature in Kelvin.
pub const T_NOMINAL: f64 = 300.0;
