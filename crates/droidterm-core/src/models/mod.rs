//! Data models for the simulated terminal.
//!
//! - [`FsEntry`] - Virtual filesystem nodes
//! - [`VirtualPath`] - Absolute paths rooted at the home directory
//! - [`OutputLine`] - Tagged terminal output

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{Children, FsEntry};
pub use path::VirtualPath;
pub use terminal::{OutputLine, OutputLineData, TextStyle};
