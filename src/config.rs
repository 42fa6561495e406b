//! Front end configuration.

/// Maximum number of output lines kept in the scrollback.
pub const MAX_SCROLLBACK_LINES: usize = 1000;

/// Rows reserved below the scrollback: the input line and the status line.
pub const RESERVED_ROWS: u16 = 2;
