//! # Krets
//!
//! Small utilities for circuit simulation workflows:
//! - resistor ladder netlist generation for a circuit simulator
//! - ideal diode small-signal conductance from the Shockley equation
//!
//! ## Quick Start
//!
//! ```rust
//! use krets::prelude::*;
//!
//! let ladder = generate_resistor_ladder(1).unwrap();
//! assert_eq!(ladder.to_string(), "% N-sized resistor ladder\nV1 1 0 1\nR1 1 0 1000");
//!
//! let g = small_signal_conductance(&DiodeParams::default());
//! println!("g = {:e} S", g);
//! ```

// Re-export member crates
pub use krets_core as core;
pub use krets_devices as devices;
pub use krets_netlist as netlist;

// ============================================================================
// Convenient re-exports from krets_core
// ============================================================================

pub use krets_core::{Error as CoreError, NodeId};

// ============================================================================
// Convenient re-exports from krets_netlist
// ============================================================================

pub use krets_netlist::{
    Error as NetlistError,
    LadderSpec,
    Netlist,
    Resistor,
    Statement,
    VoltageSource,
    generate_resistor_ladder,
    ladder_output_path,
    write_resistor_ladder,
};

// ============================================================================
// Convenient re-exports from krets_devices
// ============================================================================

pub use krets_devices::{
    DiodeParams,
    Error as DeviceError,
    diode_current,
    small_signal_conductance,
    thermal_voltage,
};

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use krets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::NodeId;

    pub use crate::{LadderSpec, Netlist, Statement, generate_resistor_ladder, write_resistor_ladder};

    pub use crate::{DiodeParams, small_signal_conductance, thermal_voltage};
}
