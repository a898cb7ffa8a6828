//! Cell addresses.
//!
//! Formulas refer to cells as `row,col`, both 1-indexed, rather than the
//! spreadsheet-style `A1` notation.
//!
//! # Examples
//!
//! ```
//! use gridcalc_engine::engine::CellAddress;
//!
//! let addr: CellAddress = "2,3".parse().unwrap();
//! assert_eq!(addr.row(), 2);
//! assert_eq!(addr.col(), 3);
//! assert_eq!(addr.to_string(), "2,3");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, Result};

/// A reference to a cell by row and column (1-indexed).
///
/// Ordering is row-major.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct CellAddress {
    row: usize,
    col: usize,
}

impl CellAddress {
    /// Create an address, rejecting zero rows or columns.
    pub fn new(row: usize, col: usize) -> Result<CellAddress> {
        if row == 0 || col == 0 {
            return Err(EngineError::InvalidAddress { row, col });
        }
        Ok(CellAddress { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl FromStr for CellAddress {
    type Err = EngineError;

    /// Strict parse of `"<row>,<col>"`. Formula tokens use the lenient reader
    /// in the parser instead.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || EngineError::MalformedAddress(s.to_string());
        let (row, col) = s.trim().split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse::<usize>().map_err(|_| malformed())?;
        let col = col.trim().parse::<usize>().map_err(|_| malformed())?;
        CellAddress::new(row, col)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
