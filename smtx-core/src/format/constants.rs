//! Tokens of the matrix text format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separates a header key from its value
pub const HEADER_SEPARATOR: char = '=';

/// Opens an entry triple
pub const ENTRY_OPEN: char = '(';

/// Closes an entry triple
pub const ENTRY_CLOSE: char = ')';

/// Separates the numbers of an entry triple
pub const ENTRY_SEPARATOR: char = ',';
