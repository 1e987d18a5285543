//! Line parsers for the matrix text format
//!
//! Pure functions over single lines. Callers supply the 1-based line number
//! so errors can point at the offending line.

use crate::format::constants::{
    COLS_KEY, ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR, HEADER_SEPARATOR, ROWS_KEY,
};
use crate::{MatrixElement, MatrixError, Result};

/// Parse a `key=value` header line and return its value
///
/// The key must equal `key` after trimming; the value must be a
/// non-negative integer.
pub fn parse_header(line_number: usize, line: &str, key: &'static str) -> Result<usize> {
    let reason = match key {
        ROWS_KEY => "expected `rows=<integer>` header",
        COLS_KEY => "expected `cols=<integer>` header",
        _ => "expected `key=<integer>` header",
    };

    let (found_key, value) = line
        .split_once(HEADER_SEPARATOR)
        .ok_or_else(|| MatrixError::format(line_number, line, reason))?;

    if found_key.trim() != key {
        return Err(MatrixError::format(line_number, line, reason));
    }

    value
        .trim()
        .parse::<usize>()
        .map_err(|_| MatrixError::format(line_number, line, reason))
}

/// Parse a `(row,col,value)` entry line
///
/// Whitespace around the line and around each number is ignored.
pub fn parse_entry<T: MatrixElement>(line_number: usize, line: &str) -> Result<(usize, usize, T)> {
    const REASON: &str = "invalid entry, expected (row,col,value)";
    let invalid = || MatrixError::format(line_number, line, REASON);

    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or_else(invalid)?;

    let mut parts = inner.split(ENTRY_SEPARATOR).map(str::trim);
    let (Some(row), Some(col), Some(value), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let row = row.parse::<usize>().map_err(|_| invalid())?;
    let col = col.parse::<usize>().map_err(|_| invalid())?;
    let value = value.parse::<T>().map_err(|_| invalid())?;

    Ok((row, col, value))
}
