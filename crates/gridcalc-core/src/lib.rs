//! gridcalc-core - Sheet model around the formula engine.

pub mod config;
pub mod error;
pub mod sheet;
pub mod table;

pub use config::{SheetConfig, load_config};
pub use error::{GridcalcError, Result};
pub use sheet::Sheet;
pub use table::Table;

pub use gridcalc_engine::engine::{CellAddress, CellValue};
