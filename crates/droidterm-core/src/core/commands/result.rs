//! Command execution result type.

use serde::Serialize;

use crate::models::OutputLine;

/// Result of executing a command.
///
/// Commands produce output lines. `clear` instead sets `clear_screen`, which
/// tells the renderer to drop its scrollback rather than append.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Discard previously displayed output
    pub clear_screen: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            clear_screen: false,
        }
    }

    /// Create a result holding a single line.
    pub fn line(line: OutputLine) -> Self {
        Self::output(vec![line])
    }

    /// A single blank line.
    pub fn blank() -> Self {
        Self::line(OutputLine::empty())
    }

    /// The clear sentinel.
    pub fn clear() -> Self {
        Self {
            output: vec![],
            clear_screen: true,
        }
    }

    /// Check if any output line is an error.
    pub fn is_error(&self) -> bool {
        self.output.iter().any(OutputLine::is_error)
    }
}

impl From<crate::core::error::CommandError> for CommandResult {
    fn from(err: crate::core::error::CommandError) -> Self {
        Self::line(OutputLine::error(err))
    }
}
