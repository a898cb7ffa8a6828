use super::Sheet;
use crate::error::Result;
use gridcalc_engine::engine::{
    CellAddress, CellTable, CellValue, FormulaEntry, dependent_results, evaluate,
    on_cell_changed, write_results,
};

impl Sheet {
    /// Commit a formula to a cell.
    ///
    /// The formula is registered first, then formulas reading `addr` are
    /// refreshed, then the new formula's own result is written to `addr`.
    /// Every result is computed from the table as it was before the edit, so
    /// a formula reading its own cell is applied once.
    /// Empty formula text is ignored and returns `Ok(false)`.
    pub fn apply_formula(&mut self, addr: CellAddress, formula: &str) -> Result<bool> {
        self.table.check_bounds(&addr)?;
        if formula.is_empty() {
            return Ok(false);
        }

        self.registry.set_formula(addr, formula);
        let refreshed = dependent_results(&self.registry, &addr, &self.table);
        let value = evaluate(formula, |dep| self.table.read_cell(dep));

        write_results(&mut self.table, &refreshed);
        self.table.write_cell(&addr, value)?;
        Ok(true)
    }

    /// Formula text for a focused cell, if it holds a formula.
    pub fn formula_text(&self, addr: &CellAddress) -> Option<&str> {
        self.registry.formula_text(addr)
    }

    /// Stop treating `addr` as a formula. Its displayed value is kept.
    pub fn clear_formula(&mut self, addr: &CellAddress) -> Option<FormulaEntry> {
        self.registry.remove(addr)
    }

    /// Directly edit a cell's value and refresh the formulas that read it.
    ///
    /// A formula registered at `addr` stays registered and overwrites the
    /// value the next time one of its dependencies changes.
    pub fn set_cell_value(&mut self, addr: CellAddress, value: CellValue) -> Result<()> {
        self.table.set(&addr, value)?;
        self.on_cell_changed(&addr);
        Ok(())
    }

    /// Directly edit a cell from user input (see [`CellValue::from_input`]).
    pub fn set_cell_from_input(&mut self, addr: CellAddress, input: &str) -> Result<()> {
        self.set_cell_value(addr, CellValue::from_input(input))
    }

    /// Recompute the formulas that read `addr`. Hosts that write to the
    /// table by other means must call this after each write.
    pub fn on_cell_changed(&mut self, addr: &CellAddress) {
        on_cell_changed(&self.registry, addr, &mut self.table);
    }

    pub fn cell_value(&self, addr: &CellAddress) -> CellValue {
        self.table.get(addr)
    }

    /// The string a grid would show for `addr`.
    pub fn display_value(&self, addr: &CellAddress) -> String {
        self.table.get(addr).to_string()
    }
}
