//! Error types for the interpreter.
//!
//! - [`FsError`] - Namespace lookups, inserts and path resolution
//! - [`CommandError`] - User-facing command failures
//!
//! Neither is ever raised past the session: command failures become error
//! output lines whose text is the `Display` of a [`CommandError`].

use thiserror::Error;

/// Namespace and path resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// No entry with this name in the directory
    #[error("'{0}': no such entry")]
    NotFound(String),
    /// An entry with this name already exists in the directory
    #[error("'{0}': already exists")]
    AlreadyExists(String),
    /// Tried to look inside a file
    #[error("not a directory")]
    NotADirectory,
    /// A path segment is missing or names a file
    #[error("directory not found")]
    DirectoryNotFound,
}

/// Kind of entry a command tried to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Command failures, rendered as a single output line each.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Unrecognized command token (already lower-cased)
    #[error("{0}: comando não encontrado. Digite 'help' para ver comandos disponíveis.")]
    NotFound(String),
    /// `cd` target missing or not a directory; `None` for the current directory
    #[error("{}", directory_not_found(.0))]
    DirectoryNotFound(Option<String>),
    /// `cat` target missing or a directory
    #[error("cat: {0}: Arquivo não encontrado")]
    FileNotFound(String),
    /// `mkdir`/`touch` on a name that is taken
    #[error("{}", name_conflict(.kind, .name))]
    NameConflict { kind: EntryKind, name: String },
    /// Required argument absent
    #[error("{command}: faltando operando{}", operand_suffix(.file))]
    MissingOperand { command: &'static str, file: bool },
}

fn directory_not_found(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("cd: {}: Diretório não encontrado", name),
        None => "Erro: Diretório não encontrado".to_string(),
    }
}

fn name_conflict(kind: &EntryKind, name: &str) -> String {
    match kind {
        EntryKind::Directory => format!("mkdir: não foi possível criar diretório '{}'", name),
        EntryKind::File => format!("touch: não foi possível criar arquivo '{}'", name),
    }
}

fn operand_suffix(file: &bool) -> &'static str {
    if *file { " arquivo" } else { "" }
}
