//! Error types for Gridcalc core.

use gridcalc_engine::EngineError;
use thiserror::Error;

/// Errors that can occur while driving a sheet
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `origin` is the config file path, or `<inline>` for parsed strings.
    #[error("Config error in {origin}: {message}")]
    Config { origin: String, message: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
