//! Netlist model and resistor ladder generation.
//!
//! A [`Netlist`] is an ordered list of [`Statement`]s rendered one per line in
//! the simulator input format. The [`ladder`] module builds the netlist of an
//! N-resistor ladder and writes it under a circuits directory.

pub mod element;
pub mod error;
pub mod ladder;
pub mod netlist;

pub use element::{Resistor, Statement, VoltageSource};
pub use error::{Error, Result};
pub use ladder::{LadderSpec, generate_resistor_ladder, ladder_output_path, write_resistor_ladder};
pub use netlist::Netlist;
