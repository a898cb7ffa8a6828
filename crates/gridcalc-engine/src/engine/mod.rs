//! Formula engine API.
//!
//! - [`CellAddress`] - 1-indexed `row,col` cell addresses
//! - [`CellValue`] - Values held by the host table and their numeric coercion
//! - [`extract_dependencies`] - Parse the cells a formula reads
//! - [`evaluate`] - Evaluate a formula left to right against the table
//! - [`FormulaRegistry`] - Which cells hold formulas and what they read
//! - [`on_cell_changed`] - Recompute the formulas that read a changed cell
//! - [`format_number`] - Format numbers for display

mod cell;
mod cell_ref;
mod deps;
mod eval;
mod format;
mod propagate;
mod registry;

pub use cell::CellValue;
pub use cell_ref::CellAddress;
pub use deps::extract_dependencies;
pub use eval::{Operator, evaluate};
pub use format::format_number;
pub use propagate::{CellTable, dependent_results, on_cell_changed, write_results};
pub use registry::{FormulaEntry, FormulaRegistry};
