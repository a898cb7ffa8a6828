//! Formula registry.
//!
//! Records which cells hold formulas, the formula text as the user typed it,
//! and the cells each formula reads.

use std::collections::HashMap;

use super::cell_ref::CellAddress;
use super::deps::extract_dependencies;

/// A formula applied to a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaEntry {
    /// The formula exactly as entered.
    pub formula_text: String,
    /// Referenced cells, in order of appearance.
    pub dependencies: Vec<CellAddress>,
}

impl FormulaEntry {
    pub fn new(formula_text: &str) -> FormulaEntry {
        FormulaEntry {
            dependencies: extract_dependencies(formula_text),
            formula_text: formula_text.to_string(),
        }
    }

    pub fn depends_on(&self, addr: &CellAddress) -> bool {
        self.dependencies.contains(addr)
    }
}

/// Mapping from formula cells to their entries.
///
/// Entries iterate in insertion order; overwriting a formula keeps its
/// position.
#[derive(Clone, Debug, Default)]
pub struct FormulaRegistry {
    entries: Vec<(CellAddress, FormulaEntry)>,
    index: HashMap<CellAddress, usize>,
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `formula_text` and store it for `addr`, replacing any previous
    /// entry wholesale.
    pub fn set_formula(&mut self, addr: CellAddress, formula_text: &str) {
        let entry = FormulaEntry::new(formula_text);
        log::debug!(
            "formula at {} reads {} cell(s): {:?}",
            addr,
            entry.dependencies.len(),
            formula_text
        );
        match self.index.get(&addr) {
            Some(&pos) => self.entries[pos].1 = entry,
            None => {
                self.index.insert(addr, self.entries.len());
                self.entries.push((addr, entry));
            }
        }
    }

    pub fn get(&self, addr: &CellAddress) -> Option<&FormulaEntry> {
        self.index.get(addr).map(|&pos| &self.entries[pos].1)
    }

    /// The formula text for a cell, used to fill the edit field on focus.
    pub fn formula_text(&self, addr: &CellAddress) -> Option<&str> {
        self.get(addr).map(|entry| entry.formula_text.as_str())
    }

    pub fn contains(&self, addr: &CellAddress) -> bool {
        self.index.contains_key(addr)
    }

    /// Clear the formula at `addr`, returning it.
    pub fn remove(&mut self, addr: &CellAddress) -> Option<FormulaEntry> {
        let pos = self.index.remove(addr)?;
        let (_, entry) = self.entries.remove(pos);
        for (later, _) in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(later) {
                *slot -= 1;
            }
        }
        Some(entry)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellAddress, &FormulaEntry)> {
        self.entries.iter().map(|(addr, entry)| (addr, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addr(row: usize, col: usize) -> CellAddress {
        CellAddress::new(row, col).unwrap()
    }

    #[test]
    fn test_set_formula_round_trip() {
        let mut registry = FormulaRegistry::new();
        registry.set_formula(addr(3, 3), "2,3 +  5,1");
        assert_eq!(registry.formula_text(&addr(3, 3)), Some("2,3 +  5,1"));
        assert_eq!(
            registry.get(&addr(3, 3)).unwrap().dependencies,
            vec![addr(2, 3), addr(5, 1)]
        );
        assert_eq!(registry.formula_text(&addr(1, 1)), None);
    }

    #[test]
    fn test_set_formula_replaces_entry() {
        let mut registry = FormulaRegistry::new();
        registry.set_formula(addr(1, 1), "2,2 + 3,3");
        registry.set_formula(addr(1, 1), "4,4");
        assert_eq!(registry.len(), 1);
        let entry = registry.get(&addr(1, 1)).unwrap();
        assert_eq!(entry.dependencies, vec![addr(4, 4)]);
        assert!(!entry.depends_on(&addr(2, 2)));
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut registry = FormulaRegistry::new();
        registry.set_formula(addr(5, 5), "1");
        registry.set_formula(addr(1, 1), "2");
        registry.set_formula(addr(3, 3), "3");
        registry.set_formula(addr(5, 5), "4");

        let order: Vec<CellAddress> = registry.iter().map(|(a, _)| *a).collect();
        assert_eq!(order, vec![addr(5, 5), addr(1, 1), addr(3, 3)]);
    }

    #[test]
    fn test_remove_keeps_lookup_consistent() {
        let mut registry = FormulaRegistry::new();
        registry.set_formula(addr(1, 1), "1,2");
        registry.set_formula(addr(2, 1), "2,2");
        registry.set_formula(addr(3, 1), "3,2");

        let removed = registry.remove(&addr(1, 1)).unwrap();
        assert_eq!(removed.formula_text, "1,2");
        assert!(registry.remove(&addr(1, 1)).is_none());
        assert!(!registry.contains(&addr(1, 1)));
        assert_eq!(registry.formula_text(&addr(2, 1)), Some("2,2"));
        assert_eq!(registry.formula_text(&addr(3, 1)), Some("3,2"));

        registry.set_formula(addr(2, 1), "9");
        assert_eq!(registry.formula_text(&addr(2, 1)), Some("9"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut registry = FormulaRegistry::new();
        registry.set_formula(addr(1, 1), "1");
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.formula_text(&addr(1, 1)), None);
    }
}
