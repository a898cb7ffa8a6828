//! gridcalc - Cell formulas with dependency tracking and recalculation.
//!
//! Formulas are flat chains of `+ - * /` over integer literals and `row,col`
//! cell references, evaluated left to right without precedence. When a cell
//! changes, the formulas that read it directly are recomputed.
//!
//! ```
//! use gridcalc::{CellAddress, CellValue, Sheet};
//!
//! let a = CellAddress::new(1, 1).unwrap();
//! let b = CellAddress::new(1, 2).unwrap();
//! let total = CellAddress::new(1, 3).unwrap();
//!
//! let mut sheet = Sheet::new();
//! sheet.set_cell_from_input(a, "4").unwrap();
//! sheet.apply_formula(total, "1,1 + 1,2 * 2").unwrap();
//! sheet.set_cell_from_input(b, "6").unwrap();
//! assert_eq!(sheet.cell_value(&total), CellValue::Number(20.0));
//! ```

pub use gridcalc_core::{
    CellAddress, CellValue, GridcalcError, Result, Sheet, SheetConfig, Table, load_config,
};
pub use gridcalc_engine::EngineError;
pub use gridcalc_engine::engine;
