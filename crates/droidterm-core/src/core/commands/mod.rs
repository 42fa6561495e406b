//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against a session
//!
//! # Architecture
//!
//! Input is tokenized by [`crate::core::parser`], mapped to the `Command`
//! enum by [`Command::parse`], then executed via `execute_command`. Each
//! command name maps to exactly one variant.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

use crate::core::error::CommandError;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A name argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed, case preserved. Validation happens during execution
/// against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Where `cd` should go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CdTarget {
    /// No argument: back to the root
    Home,
    /// `..`
    Parent,
    /// A child directory of the current one
    Child(PathArg),
}

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Ls,
    Pwd,
    Cd(CdTarget),
    Cat(PathArg),
    Echo(String),
    Date,
    Whoami,
    Uname,
    Mkdir(PathArg),
    Touch(PathArg),
    /// Recognized command with unusable arguments
    Invalid(CommandError),
    Unknown(String),
}

impl Command {
    /// Parse command from a lower-cased name and verbatim arguments.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let first = args.first().map(PathArg::new);
        match name {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "ls" => Self::Ls,
            "pwd" => Self::Pwd,
            "cd" => Self::Cd(match first {
                None => CdTarget::Home,
                Some(arg) if arg == ".." => CdTarget::Parent,
                Some(arg) => CdTarget::Child(arg),
            }),
            "cat" => first.map_or_else(|| missing("cat", true), Self::Cat),
            "echo" => Self::Echo(args.join(" ")),
            "date" => Self::Date,
            "whoami" => Self::Whoami,
            "uname" => Self::Uname,
            "mkdir" => first.map_or_else(|| missing("mkdir", false), Self::Mkdir),
            "touch" => first.map_or_else(|| missing("touch", true), Self::Touch),
            _ => Self::Unknown(name.to_string()),
        }
    }
}

fn missing(command: &'static str, file: bool) -> Command {
    Command::Invalid(CommandError::MissingOperand { command, file })
}

// =============================================================================
// Tests
// =============================================================================
