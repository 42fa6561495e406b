use log::trace;

use crate::config::SEED_ENTRIES;
use crate::core::error::FsError;
use crate::models::{FsEntry, TextStyle, VirtualPath};

/// Directory entry returned by `list_dir`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub style: TextStyle,
}

/// Look up a child of a directory by exact name.
pub fn lookup<'a>(dir: &'a FsEntry, name: &str) -> Result<&'a FsEntry, FsError> {
    let children = dir.children().ok_or(FsError::NotADirectory)?;
    children
        .get(name)
        .ok_or_else(|| FsError::NotFound(name.to_string()))
}

/// Add a new entry to a directory. Existing entries are never overwritten.
pub fn insert(dir: &mut FsEntry, name: &str, node: FsEntry) -> Result<(), FsError> {
    let children = dir.children_mut().ok_or(FsError::NotADirectory)?;
    if children.contains_key(name) {
        return Err(FsError::AlreadyExists(name.to_string()));
    }
    children.insert(name.to_string(), node);
    Ok(())
}

/// Walk `segments` from `root`, descending through directories only.
///
/// Every segment must name a directory except possibly the last, whose node is
/// returned as-is. The empty path resolves to `root`.
pub fn resolve<'a, S: AsRef<str>>(root: &'a FsEntry, segments: &[S]) -> Result<&'a FsEntry, FsError> {
    let mut current = root;
    for segment in segments {
        if !current.is_directory() {
            return Err(FsError::DirectoryNotFound);
        }
        current = lookup(current, segment.as_ref()).map_err(|_| FsError::DirectoryNotFound)?;
    }
    Ok(current)
}

fn resolve_mut<'a, S: AsRef<str>>(
    root: &'a mut FsEntry,
    segments: &[S],
) -> Result<&'a mut FsEntry, FsError> {
    let mut current = root;
    for segment in segments {
        current = current
            .children_mut()
            .and_then(|children| children.get_mut(segment.as_ref()))
            .ok_or(FsError::DirectoryNotFound)?;
    }
    Ok(current)
}

/// Virtual filesystem for a single session.
///
/// The root entry is the home directory; a [`VirtualPath`] addresses it with
/// its first segment and everything below with the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    /// Home directory containing all entries
    root: FsEntry,
}

impl VirtualFs {
    /// Create a filesystem with an empty home directory.
    pub fn empty() -> Self {
        Self {
            root: FsEntry::directory(),
        }
    }

    /// Create a fresh copy of the seed namespace.
    ///
    /// Every call builds a new tree; sessions never share one.
    pub fn seed() -> Self {
        let mut fs = Self::empty();
        for (path, content) in SEED_ENTRIES {
            let segments: Vec<&str> = path.split('/').collect();
            let (name, parents) = match segments.split_last() {
                Some(split) => split,
                None => continue,
            };
            let node = match content {
                Some(text) => FsEntry::file(*text),
                None => FsEntry::directory(),
            };
            let result =
                resolve_mut(&mut fs.root, parents).and_then(|dir| insert(dir, name, node));
            debug_assert!(result.is_ok(), "seed entry '{}' is invalid", path);
        }
        fs
    }

    /// The home directory entry.
    pub fn root(&self) -> &FsEntry {
        &self.root
    }

    /// Get the node a path points to.
    pub fn get_entry(&self, path: &VirtualPath) -> Result<&FsEntry, FsError> {
        trace!("resolving {}", path);
        resolve(&self.root, path.relative())
    }

    /// Get the directory a path points to; files are rejected.
    pub fn resolve_dir(&self, path: &VirtualPath) -> Result<&FsEntry, FsError> {
        match self.get_entry(path)? {
            entry @ FsEntry::Directory { .. } => Ok(entry),
            FsEntry::File { .. } => Err(FsError::DirectoryNotFound),
        }
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        self.resolve_dir(path).is_ok()
    }

    /// Look up a name inside the directory at `dir`.
    pub fn lookup_in(&self, dir: &VirtualPath, name: &str) -> Result<&FsEntry, FsError> {
        lookup(self.resolve_dir(dir)?, name)
    }

    /// Insert a new entry into the directory at `dir`.
    pub fn insert_at(&mut self, dir: &VirtualPath, name: &str, node: FsEntry) -> Result<(), FsError> {
        trace!("inserting '{}' into {}", name, dir);
        let target = resolve_mut(&mut self.root, dir.relative())?;
        insert(target, name, node)
    }

    /// List directory contents in insertion order.
    pub fn list_dir(&self, path: &VirtualPath) -> Result<Vec<DirEntry>, FsError> {
        let children = self
            .resolve_dir(path)?
            .children()
            .ok_or(FsError::DirectoryNotFound)?;
        Ok(children
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                style: if entry.is_directory() {
                    TextStyle::Directory
                } else {
                    TextStyle::File
                },
            })
            .collect())
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::seed()
    }
}
