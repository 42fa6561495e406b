use indexmap::IndexMap;

/// Children of a directory, keyed by name in insertion order.
pub type Children = IndexMap<String, FsEntry>;

/// Represents an entry in the virtual filesystem.
///
/// A node is either a file or a directory, never both. Children are owned
/// values, so a node can only ever live under a single parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsEntry {
    Directory { children: Children },
    File { content: String },
}

impl FsEntry {
    /// Create an empty directory.
    pub fn directory() -> Self {
        FsEntry::Directory {
            children: Children::new(),
        }
    }

    /// Create a file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        FsEntry::File {
            content: content.into(),
        }
    }

    /// Create an empty file.
    pub fn empty_file() -> Self {
        Self::file(String::new())
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// Directory children (directories only).
    pub fn children(&self) -> Option<&Children> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            FsEntry::File { content } => Some(content),
            FsEntry::Directory { .. } => None,
        }
    }
}
