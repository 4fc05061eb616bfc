//! Core building blocks shared by the krets tools.
//!
//! This crate provides node identifiers, the physical constants used by the
//! device models, and parsing/formatting of SPICE-style numeric values.

pub mod constants;
pub mod error;
pub mod node;
pub mod units;

pub use error::{Error, Result};
pub use node::NodeId;
