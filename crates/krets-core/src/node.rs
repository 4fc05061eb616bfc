//! Numbered circuit nodes.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a numbered node in a netlist.
///
/// Node 0 is ground. Nodes are written and read as plain decimal numbers,
/// which is what the simulator input format expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The ground node (node 0).
    pub const GROUND: NodeId = NodeId(0);

    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn is_ground(self) -> bool {
        self.0 == 0
    }

    /// The node following this one in a chain.
    pub fn next(self) -> Self {
        NodeId(self.0 + 1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("gnd") {
            return Ok(NodeId::GROUND);
        }
        s.parse::<u32>()
            .map(NodeId)
            .map_err(|_| Error::InvalidNode(s.to_string()))
    }
}
