//! Core interpreter logic.
//!
//! This module provides:
//! - [`TerminalSession`] holding path, namespace and history
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`VirtualFs`] namespace tree and path resolution
//! - [`HistoryCursor`] for recalling previous commands

mod commands;
pub mod error;
mod filesystem;
mod history;
pub mod parser;
mod session;

pub use commands::{CdTarget, Command, CommandResult, PathArg, execute_command};
pub use filesystem::{DirEntry, VirtualFs, insert, lookup, resolve};
pub use history::HistoryCursor;
pub use parser::parse_input;
pub use session::TerminalSession;
