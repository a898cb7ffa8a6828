//! Bounded sparse storage for displayed cell values.

use std::collections::HashMap;

use gridcalc_engine::EngineError;
use gridcalc_engine::engine::{CellAddress, CellTable, CellValue};

use crate::config::SheetConfig;

/// The cell table: a sparse map of values inside a `rows x columns` grid.
///
/// Reads outside the grid see an empty cell; writes outside it are rejected.
#[derive(Clone, Debug)]
pub struct Table {
    cells: HashMap<CellAddress, CellValue>,
    rows: usize,
    columns: usize,
}

impl Table {
    pub fn new(config: &SheetConfig) -> Self {
        Table {
            cells: HashMap::new(),
            rows: config.rows,
            columns: config.columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether `addr` lies inside the grid.
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row() <= self.rows && addr.col() <= self.columns
    }

    pub(crate) fn check_bounds(&self, addr: &CellAddress) -> Result<(), EngineError> {
        if self.contains(addr) {
            Ok(())
        } else {
            Err(EngineError::InvalidAddress {
                row: addr.row(),
                col: addr.col(),
            })
        }
    }

    pub fn get(&self, addr: &CellAddress) -> CellValue {
        self.cells.get(addr).cloned().unwrap_or_default()
    }

    /// Store `value` at `addr`. Storing [`CellValue::Empty`] frees the slot.
    pub fn set(&mut self, addr: &CellAddress, value: CellValue) -> Result<(), EngineError> {
        self.check_bounds(addr)?;
        if value.is_empty() {
            self.cells.remove(addr);
        } else {
            self.cells.insert(*addr, value);
        }
        Ok(())
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl CellTable for Table {
    fn read_cell(&self, addr: &CellAddress) -> CellValue {
        self.get(addr)
    }

    fn write_cell(&mut self, addr: &CellAddress, value: f64) -> gridcalc_engine::Result<()> {
        self.set(addr, CellValue::Number(value))
    }
}
