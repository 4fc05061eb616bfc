//! Netlist: an ordered list of statements.

use std::fmt;

use krets_core::NodeId;

use crate::element::Statement;
use crate::error::{Error, Result};

/// A circuit description in simulator input format.
///
/// Rendering joins statements with `\n` and adds no trailing newline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Netlist {
    statements: Vec<Statement>,
}

impl Netlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            statements: Vec::with_capacity(capacity),
        }
    }

    /// Parse a netlist, skipping blank lines.
    ///
    /// Line numbers in errors are 1-based.
    pub fn parse(input: &str) -> Result<Self> {
        let mut netlist = Netlist::new();
        for (idx, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let stmt = line.parse::<Statement>().map_err(|e| Error::Parse {
                line: idx + 1,
                message: e.to_string(),
            })?;
            netlist.push(stmt);
        }
        Ok(netlist)
    }

    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of lines the netlist renders to.
    pub fn num_lines(&self) -> usize {
        self.statements.len()
    }

    pub fn num_resistors(&self) -> usize {
        self.statements
            .iter()
            .filter(|s| matches!(s, Statement::Resistor(_)))
            .count()
    }

    /// Check that this is a resistor ladder.
    ///
    /// A ladder is a header comment, a source from node 1 to ground, then
    /// resistors `R1..Rn` where `Ri` joins node i to node i+1 and `Rn` joins
    /// node n to ground.
    pub fn is_ladder(&self) -> bool {
        let [Statement::Comment(_), Statement::VoltageSource(source), resistors @ ..] =
            self.statements.as_slice()
        else {
            return false;
        };

        if source.node_pos != NodeId::new(1) || !source.node_neg.is_ground() {
            return false;
        }
        if resistors.is_empty() {
            return false;
        }

        let n = resistors.len();
        resistors.iter().enumerate().all(|(idx, stmt)| {
            let Statement::Resistor(r) = stmt else {
                return false;
            };
            let i = idx as u32 + 1;
            let expected_neg = if idx + 1 == n {
                NodeId::GROUND
            } else {
                NodeId::new(i + 1)
            };
            r.name.eq_ignore_ascii_case(&format!("R{}", i))
                && r.node_pos == NodeId::new(i)
                && r.node_neg == expected_neg
        })
    }
}

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, stmt) in self.statements.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl FromIterator<Statement> for Netlist {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Resistor, VoltageSource};

    fn divider() -> Netlist {
        let mut netlist = Netlist::new();
        netlist.push(Statement::Comment("divider".to_string()));
        netlist.push(VoltageSource::new("V1", NodeId::new(1), NodeId::GROUND, 10.0));
        netlist.push(Resistor::new("R1", NodeId::new(1), NodeId::new(2), 1000.0));
        netlist.push(Resistor::new("R2", NodeId::new(2), NodeId::GROUND, 1000.0));
        netlist
    }

    #[test]
    fn test_empty_netlist() {
        let netlist = Netlist::new();
        assert_eq!(netlist.num_lines(), 0);
        assert_eq!(netlist.to_string(), "");
        assert!(!netlist.is_ladder());
    }

    #[test]
    fn test_render_without_trailing_newline() {
        assert_eq!(
            divider().to_string(),
            "% divider\nV1 1 0 10\nR1 1 2 1000\nR2 2 0 1000"
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let netlist = Netlist::parse("% divider\n\nV1 1 0 10\nR1 1 2 1k\nR2 2 0 1k\n").unwrap();
        assert_eq!(netlist, divider());
        assert_eq!(netlist.num_resistors(), 2);
        assert!(netlist.is_ladder());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = Netlist::parse("% title\nV1 1 0 1\nR1 1 oops 1000").unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_broken_chain_is_not_ladder() {
        let netlist = Netlist::parse("% t\nV1 1 0 1\nR1 1 3 1000\nR2 3 0 1000").unwrap();
        assert!(!netlist.is_ladder());

        let open_end = Netlist::parse("% t\nV1 1 0 1\nR1 1 2 1000\nR2 2 3 1000").unwrap();
        assert!(!open_end.is_ladder());

        let no_resistors = Netlist::parse("% t\nV1 1 0 1").unwrap();
        assert!(!no_resistors.is_ladder());
    }
}
