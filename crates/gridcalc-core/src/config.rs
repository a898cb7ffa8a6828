//! Sheet configuration.
//!
//! Read from `sheet.toml` in the user's config directory, or from a file the
//! host names explicitly:
//!
//! ```toml
//! rows = 3000
//! columns = 3000
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GridcalcError, Result};

const MAX_CONFIG_FILE_BYTES: u64 = 64 * 1024;

/// Default sheet dimensions.
pub const DEFAULT_ROWS: usize = 3000;
pub const DEFAULT_COLUMNS: usize = 3000;

/// Dimensions of the cell table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl SheetConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let config: SheetConfig = toml::from_str(content).map_err(|e| GridcalcError::Config {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        if config.rows == 0 || config.columns == 0 {
            return Err(GridcalcError::Config {
                origin: origin.to_string(),
                message: format!(
                    "sheet must have at least one row and column (got {}x{})",
                    config.rows, config.columns
                ),
            });
        }
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let meta = std::fs::metadata(path)?;
        if meta.len() > MAX_CONFIG_FILE_BYTES {
            return Err(GridcalcError::Config {
                origin,
                message: format!(
                    "file too large ({} bytes, max {})",
                    meta.len(),
                    MAX_CONFIG_FILE_BYTES
                ),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &origin)
    }
}

/// Load the sheet configuration, falling back to defaults.
///
/// Uses `config_file` when given, else `sheet.toml` in the user config
/// directory. Returns the configuration and any warnings; a missing default
/// file is not a warning.
pub fn load_config(config_file: Option<&PathBuf>) -> (SheetConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file.cloned().or_else(user_config_path);

    let config = match config_path.as_ref() {
        Some(path) if path.exists() => match SheetConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                warnings.push(format!("Failed to load {}: {}", path.display(), err));
                SheetConfig::default()
            }
        },
        Some(path) if config_file.is_some() => {
            warnings.push(format!("Config file not found: {}", path.display()));
            SheetConfig::default()
        }
        _ => SheetConfig::default(),
    };

    for warning in &warnings {
        log::warn!("{}", warning);
    }
    (config, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridcalc")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("sheet.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_str_reads_dimensions() {
        let config = SheetConfig::from_toml_str("rows = 10\ncolumns = 4\n").unwrap();
        assert_eq!(config, SheetConfig { rows: 10, columns: 4 });
    }

    #[test]
    fn from_toml_str_fills_missing_keys() {
        let config = SheetConfig::from_toml_str("rows = 12").unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(SheetConfig::from_toml_str("").unwrap(), SheetConfig::default());
    }

    #[test]
    fn from_toml_str_rejects_zero_dimensions() {
        let err = SheetConfig::from_toml_str("rows = 0").unwrap_err();
        assert!(matches!(err, GridcalcError::Config { .. }));
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        assert!(SheetConfig::from_toml_str("rowz = 3").is_err());
        assert!(SheetConfig::from_toml_str("rows = \"many\"").is_err());
    }

    #[test]
    fn load_config_reads_explicit_file() {
        let temp_path = std::env::temp_dir().join("gridcalc_sheet_config_ok.toml");
        std::fs::write(&temp_path, "rows = 50\ncolumns = 26\n").expect("write temp config");

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config, SheetConfig { rows: 50, columns: 26 });
        assert!(warnings.is_empty());

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn load_config_falls_back_with_warning() {
        let temp_path = std::env::temp_dir().join("gridcalc_sheet_config_bad.toml");
        std::fs::write(&temp_path, "rows = [").expect("write temp config");

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config, SheetConfig::default());
        assert_eq!(warnings.len(), 1);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn load_config_warns_on_missing_explicit_file() {
        let temp_path = std::env::temp_dir().join("gridcalc_sheet_config_missing.toml");
        let _ = std::fs::remove_file(&temp_path);

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config, SheetConfig::default());
        assert!(warnings[0].contains("not found"));
    }

    #[test]
    fn load_config_rejects_oversized_file() {
        let temp_path = std::env::temp_dir().join("gridcalc_sheet_config_large.toml");
        let content = format!("# {}\nrows = 5\n", "x".repeat(MAX_CONFIG_FILE_BYTES as usize));
        std::fs::write(&temp_path, content).expect("write temp config");

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config, SheetConfig::default());
        assert!(warnings[0].contains("too large"));

        let _ = std::fs::remove_file(&temp_path);
    }
}
