//! Netlist statements: comments, voltage sources and resistors.

use std::fmt;
use std::str::FromStr;

use krets_core::NodeId;
use krets_core::units::parse_value;

use crate::error::{Error, Result};

/// A resistor line, e.g. `R1 1 2 1000`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    /// Device name (e.g., "R1").
    pub name: String,
    pub node_pos: NodeId,
    pub node_neg: NodeId,
    /// Resistance in ohms.
    pub resistance: f64,
}

impl Resistor {
    pub fn new(
        name: impl Into<String>,
        node_pos: NodeId,
        node_neg: NodeId,
        resistance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos,
            node_neg,
            resistance,
        }
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.resistance
        )
    }
}

/// An independent DC voltage source line, e.g. `V1 1 0 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource {
    /// Device name (e.g., "V1").
    pub name: String,
    pub node_pos: NodeId,
    pub node_neg: NodeId,
    /// DC voltage in volts.
    pub voltage: f64,
}

impl VoltageSource {
    pub fn new(name: impl Into<String>, node_pos: NodeId, node_neg: NodeId, voltage: f64) -> Self {
        Self {
            name: name.into(),
            node_pos,
            node_neg,
            voltage,
        }
    }
}

impl fmt::Display for VoltageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.voltage
        )
    }
}

/// One line of a netlist.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Comment text, written after a leading `% `.
    Comment(String),
    VoltageSource(VoltageSource),
    Resistor(Resistor),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Comment(text) => write!(f, "% {}", text),
            Statement::VoltageSource(v) => fmt::Display::fmt(v, f),
            Statement::Resistor(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl From<Resistor> for Statement {
    fn from(r: Resistor) -> Self {
        Statement::Resistor(r)
    }
}

impl From<VoltageSource> for Statement {
    fn from(v: VoltageSource) -> Self {
        Statement::VoltageSource(v)
    }
}

impl FromStr for Statement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim();

        if let Some(text) = line.strip_prefix(['%', '*']) {
            return Ok(Statement::Comment(text.trim().to_string()));
        }

        // Trailing `%` comments are allowed after an element.
        let body = line.split('%').next().unwrap_or_default().trim();
        let tokens: Vec<&str> = body.split_whitespace().collect();
        let &[name, pos, neg, value] = tokens.as_slice() else {
            return Err(Error::InvalidStatement(format!(
                "expected `<name> <node> <node> <value>`, got '{}'",
                line
            )));
        };

        let node_pos: NodeId = pos.parse()?;
        let node_neg: NodeId = neg.parse()?;
        let value = parse_value(value)?;

        match name.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('R') if name.len() > 1 => {
                if value <= 0.0 {
                    return Err(Error::InvalidStatement(format!(
                        "resistor {} must have a positive value, got {}",
                        name, value
                    )));
                }
                Ok(Resistor::new(name, node_pos, node_neg, value).into())
            }
            Some('V') if name.len() > 1 => {
                Ok(VoltageSource::new(name, node_pos, node_neg, value).into())
            }
            _ => Err(Error::InvalidStatement(format!(
                "unsupported element '{}'",
                name
            ))),
        }
    }
}
