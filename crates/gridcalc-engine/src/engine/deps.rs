//! Dependency extraction.
//!
//! A formula is a flat chain of operands joined by `+ - * /`. Operands are
//! either integer literals or `row,col` cell references.

use regex::Regex;
use std::sync::OnceLock;

use super::cell_ref::CellAddress;

/// Extract every cell reference in a formula, in order of appearance.
///
/// Tokens that look like references but do not hold two readable, non-zero
/// integers are dropped without error. Duplicates are kept.
pub fn extract_dependencies(formula: &str) -> Vec<CellAddress> {
    let mut deps = Vec::new();

    for token in operand_split_re().split(formula) {
        let token = token.trim();
        if !token.contains(',') {
            continue;
        }
        match parse_reference(token) {
            Some(addr) => deps.push(addr),
            None => log::trace!("dropping malformed reference {:?}", token),
        }
    }

    deps
}

fn operand_split_re() -> &'static Regex {
    static SPLIT_RE: OnceLock<Regex> = OnceLock::new();
    SPLIT_RE.get_or_init(|| {
        Regex::new(r"[\s+\-*/]+").expect("operand separator regex must compile")
    })
}

/// Read a `row,col` token. Parts after the second comma are ignored.
pub(crate) fn parse_reference(token: &str) -> Option<CellAddress> {
    let mut parts = token.split(',');
    let row = parse_leading_int(parts.next()?)?;
    let col = parse_leading_int(parts.next()?)?;
    CellAddress::new(row, col).ok()
}

/// Read the run of digits at the start of `s`, after leading whitespace.
/// Trailing characters are ignored, so `"3abc"` reads as 3. A run too large
/// for `usize` is not an address part.
pub(crate) fn parse_leading_int(s: &str) -> Option<usize> {
    leading_digits(s)?.parse().ok()
}

/// Like [`parse_leading_int`], but for literals: any digit run reads as a
/// number, rounding once it exceeds `f64` precision.
pub(crate) fn parse_leading_number(s: &str) -> Option<f64> {
    leading_digits(s)?.parse().ok()
}

fn leading_digits(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    Some(&s[..digits])
}
