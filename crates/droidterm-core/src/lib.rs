//! Simulated POSIX-like shell over an in-memory namespace.
//!
//! A [`TerminalSession`] takes raw command lines and returns tagged output
//! lines, touching no real files, processes or network.
//!
//! ```
//! use droidterm_core::TerminalSession;
//!
//! let mut session = TerminalSession::new();
//! session.execute("mkdir notes");
//! session.execute("cd notes");
//! let result = session.execute("pwd");
//! assert_eq!(result.output[0].to_string(), "/home/notes");
//! ```

pub mod config;
pub mod core;
pub mod models;

pub use crate::core::error::{CommandError, FsError};
pub use crate::core::{CommandResult, HistoryCursor, TerminalSession, VirtualFs};
pub use crate::models::{FsEntry, OutputLine, OutputLineData, TextStyle, VirtualPath};
