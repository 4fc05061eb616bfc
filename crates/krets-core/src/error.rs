//! Error types for krets-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid node: {0}")]
    InvalidNode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
