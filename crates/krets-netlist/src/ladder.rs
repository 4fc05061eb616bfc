//! Resistor ladder netlists.
//!
//! A ladder of size N is a 1 V source driving a chain of N resistors: `Ri`
//! joins node i to node i+1 and the last resistor returns to ground.
//!
//! ```
//! use krets_netlist::generate_resistor_ladder;
//!
//! let netlist = generate_resistor_ladder(2).unwrap();
//! assert_eq!(
//!     netlist.to_string(),
//!     "% N-sized resistor ladder\nV1 1 0 1\nR1 1 2 1000\nR2 2 0 1000"
//! );
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use krets_core::NodeId;

use crate::element::{Resistor, Statement, VoltageSource};
use crate::error::{Error, Result};
use crate::netlist::Netlist;

/// Header comment written at the top of every ladder.
pub const LADDER_HEADER: &str = "N-sized resistor ladder";

/// Extension of generated circuit files.
pub const CIRCUIT_EXTENSION: &str = "cir";

/// Parameters of a resistor ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderSpec {
    /// Number of resistors. Must be at least 1.
    pub size: i64,
    /// Value of every resistor (ohms). Default: 1000.0.
    pub resistance: f64,
    /// DC value of the driving source (V). Default: 1.0.
    pub source_voltage: f64,
}

impl LadderSpec {
    /// A ladder of `size` resistors with default element values.
    pub fn new(size: i64) -> Self {
        Self {
            size,
            resistance: 1000.0,
            source_voltage: 1.0,
        }
    }

    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn with_source_voltage(mut self, voltage: f64) -> Self {
        self.source_voltage = voltage;
        self
    }

    /// Validate the parameters and return the size as a node count.
    pub fn validate(&self) -> Result<u32> {
        if self.size < 1 {
            return Err(Error::InvalidArgument(format!(
                "the number of resistors must be at least 1, got {}",
                self.size
            )));
        }
        // The last node index is `size`, so it has to fit a NodeId.
        let size = u32::try_from(self.size).map_err(|_| {
            Error::InvalidArgument(format!("ladder size {} is too large", self.size))
        })?;
        if !(self.resistance.is_finite() && self.resistance > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "resistance must be positive and finite, got {}",
                self.resistance
            )));
        }
        if !self.source_voltage.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "source voltage must be finite, got {}",
                self.source_voltage
            )));
        }
        Ok(size)
    }

    /// Build the ladder netlist.
    pub fn generate(&self) -> Result<Netlist> {
        let n = self.validate()?;

        let mut netlist = Netlist::with_capacity(n as usize + 2);
        netlist.push(Statement::Comment(LADDER_HEADER.to_string()));
        netlist.push(VoltageSource::new(
            "V1",
            NodeId::new(1),
            NodeId::GROUND,
            self.source_voltage,
        ));

        for i in 1..=n {
            let node = NodeId::new(i);
            let next = if i == n { NodeId::GROUND } else { node.next() };
            netlist.push(Resistor::new(format!("R{}", i), node, next, self.resistance));
        }

        Ok(netlist)
    }
}

/// Generate the netlist of an `n`-resistor ladder with default values.
pub fn generate_resistor_ladder(n: i64) -> Result<Netlist> {
    LadderSpec::new(n).generate()
}

/// Where a ladder of the given size is written below `root`:
/// `root/resistor_ladder_{n}/resistor_ladder_{n}.cir`.
pub fn ladder_output_path(root: impl AsRef<Path>, size: u32) -> PathBuf {
    let stem = format!("resistor_ladder_{}", size);
    root.as_ref()
        .join(&stem)
        .join(format!("{}.{}", stem, CIRCUIT_EXTENSION))
}

/// Generate a ladder and write it below `root`, returning the file path.
///
/// Missing directories are created and an existing file is overwritten.
/// Nothing touches the filesystem if the parameters are invalid.
pub fn write_resistor_ladder(root: impl AsRef<Path>, spec: &LadderSpec) -> Result<PathBuf> {
    let size = spec.validate()?;
    let netlist = spec.generate()?;
    let path = ladder_output_path(root, size);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
        log::debug!("created circuit directory {}", dir.display());
    }

    fs::write(&path, netlist.to_string())?;
    log::info!(
        "wrote {}-resistor ladder ({} lines) to {}",
        size,
        netlist.num_lines(),
        path.display()
    );

    Ok(path)
}
