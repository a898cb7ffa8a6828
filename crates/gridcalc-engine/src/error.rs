//! Error types for the Gridcalc engine.

use thiserror::Error;

/// Errors raised by the engine.
///
/// Malformed formulas are never errors; these only signal a broken contract
/// between the engine and the host table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid cell address {row},{col}")]
    InvalidAddress { row: usize, col: usize },

    #[error("Malformed cell address: {0:?}")]
    MalformedAddress(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
