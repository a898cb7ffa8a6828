//! Values stored in the host table.

use std::fmt;

use super::format::format_number;

/// The value displayed in a cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Classify user input.
    /// - Empty string or whitespace -> Empty
    /// - Valid number -> Number
    /// - Otherwise -> Text (kept verbatim)
    pub fn from_input(input: &str) -> CellValue {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if !n.is_nan() => CellValue::Number(n),
            _ => CellValue::Text(input.to_string()),
        }
    }

    /// Numeric value used by formulas.
    ///
    /// Coercion is permissive: empty cells and text that is not a number read
    /// as 0. Text holding a number (surrounding whitespace allowed, infinity
    /// spellings included) reads as that number. `"NaN"` text reads as 0.
    pub fn as_number(&self) -> f64 {
        match self {
            CellValue::Empty => 0.0,
            CellValue::Number(n) => *n,
            CellValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if !n.is_nan() => n,
                _ => 0.0,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(CellValue::from_input("   "), CellValue::Empty);
        assert_eq!(CellValue::from_input(" 42 "), CellValue::Number(42.0));
        assert_eq!(CellValue::from_input("-1.5"), CellValue::Number(-1.5));
        assert_eq!(CellValue::from_input("total"), CellValue::Text("total".into()));
        assert_eq!(CellValue::from_input("NaN"), CellValue::Text("NaN".into()));
    }

    #[test]
    fn test_as_number_coerces_to_zero() {
        assert_eq!(CellValue::Empty.as_number(), 0.0);
        assert_eq!(CellValue::from("abc").as_number(), 0.0);
        assert_eq!(CellValue::from("").as_number(), 0.0);
        assert_eq!(CellValue::from("NaN").as_number(), 0.0);
    }

    #[test]
    fn test_as_number_reads_numeric_text() {
        assert_eq!(CellValue::from(" 12 ").as_number(), 12.0);
        assert_eq!(CellValue::from("2.5").as_number(), 2.5);
        assert_eq!(CellValue::from("Infinity").as_number(), f64::INFINITY);
        assert_eq!(CellValue::Number(-3.0).as_number(), -3.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Number(10.0).to_string(), "10");
        assert_eq!(CellValue::from("hi").to_string(), "hi");
    }
}
