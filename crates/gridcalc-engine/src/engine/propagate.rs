//! Recalculation after a cell changes.
//!
//! Propagation reaches only formulas that reference the changed cell
//! directly. Cells written here are not rescanned, so a formula that reads
//! another formula cell refreshes only when the host reports that cell's
//! change. Every change scans the whole registry.

use std::collections::HashMap;

use super::cell::CellValue;
use super::cell_ref::CellAddress;
use super::eval::evaluate;
use super::registry::FormulaRegistry;
use crate::error::Result;

/// Read/write access to the host's table of cell values.
pub trait CellTable {
    /// Current value at `addr`. Missing cells are [`CellValue::Empty`].
    fn read_cell(&self, addr: &CellAddress) -> CellValue;

    /// Replace the value at `addr` with a computed result.
    fn write_cell(&mut self, addr: &CellAddress, value: f64) -> Result<()>;
}

/// Unbounded scratch table.
impl CellTable for HashMap<CellAddress, CellValue> {
    fn read_cell(&self, addr: &CellAddress) -> CellValue {
        self.get(addr).cloned().unwrap_or_default()
    }

    fn write_cell(&mut self, addr: &CellAddress, value: f64) -> Result<()> {
        self.insert(*addr, CellValue::Number(value));
        Ok(())
    }
}

/// Recompute every formula whose dependencies include `changed` and write
/// the results into `table`.
///
/// Every formula reads the table as it was before this pass, so the results
/// do not depend on registry order. A failed write is logged and does not
/// stop the remaining formulas.
pub fn on_cell_changed<T>(registry: &FormulaRegistry, changed: &CellAddress, table: &mut T)
where
    T: CellTable + ?Sized,
{
    let results = dependent_results(registry, changed, &*table);
    let written = write_results(table, &results);
    log::debug!("change at {} recomputed {} formula(s)", changed, written);
}

/// Evaluate the formulas that read `changed` without writing anything.
pub fn dependent_results<T>(
    registry: &FormulaRegistry,
    changed: &CellAddress,
    table: &T,
) -> Vec<(CellAddress, f64)>
where
    T: CellTable + ?Sized,
{
    registry
        .iter()
        .filter(|(_, entry)| entry.depends_on(changed))
        .map(|(addr, entry)| {
            let value = evaluate(&entry.formula_text, |dep| table.read_cell(dep));
            (*addr, value)
        })
        .collect()
}

/// Write computed results, skipping (and logging) the ones the table
/// refuses. Returns how many were written.
pub fn write_results<T>(table: &mut T, results: &[(CellAddress, f64)]) -> usize
where
    T: CellTable + ?Sized,
{
    let mut written = 0usize;
    for (addr, value) in results {
        match table.write_cell(addr, *value) {
            Ok(()) => written += 1,
            Err(e) => log::warn!("failed to write result for {}: {}", addr, e),
        }
    }
    written
}
