//! gridcalc_engine - Formula parsing, evaluation and recalculation.

pub mod engine;
pub mod error;

pub use error::{EngineError, Result};
