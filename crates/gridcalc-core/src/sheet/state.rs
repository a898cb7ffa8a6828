use gridcalc_engine::engine::FormulaRegistry;
use std::path::PathBuf;

use crate::config::{SheetConfig, load_config};
use crate::table::Table;

/// One sheet session: the cell table plus the registry of formula cells.
///
/// The registry lives exactly as long as the sheet and is only emptied by
/// [`Sheet::reset`]. Every edit takes `&mut self`; a multi-threaded host
/// should put the whole sheet behind one lock.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Displayed cell values
    pub(crate) table: Table,
    /// Formula cells and the cells they read
    pub(crate) registry: FormulaRegistry,
    pub(crate) config: SheetConfig,
}

impl Sheet {
    /// Create an empty sheet with default dimensions.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Self::with_config(SheetConfig::default())
    }

    pub fn with_config(config: SheetConfig) -> Self {
        Sheet {
            table: Table::new(&config),
            registry: FormulaRegistry::new(),
            config,
        }
    }

    /// Create a sheet sized by the user's configuration, or by
    /// `config_file` when given. Returns any configuration warnings.
    pub fn with_config_file(config_file: Option<&PathBuf>) -> (Self, Vec<String>) {
        let (config, warnings) = load_config(config_file);
        (Self::with_config(config), warnings)
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn registry(&self) -> &FormulaRegistry {
        &self.registry
    }

    /// Drop every value and formula, keeping the dimensions.
    pub fn reset(&mut self) {
        log::debug!(
            "resetting sheet ({} values, {} formulas)",
            self.table.len(),
            self.registry.len()
        );
        self.table.clear();
        self.registry.clear();
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
