use std::fmt;

use serde::Serialize;

use crate::config::HOME_DIR;

/// An absolute path inside the virtual namespace.
///
/// Always starts at the home directory, so it is never empty. The first
/// segment is [`HOME_DIR`]; the remaining segments name directories below it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The root of the namespace (`/home`).
    pub fn home() -> Self {
        Self {
            segments: vec![HOME_DIR.to_string()],
        }
    }

    /// All segments, including the home segment.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments below the home directory.
    pub fn relative(&self) -> &[String] {
        &self.segments[1..]
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Parent path. The root is its own parent.
    pub fn parent(&self) -> Self {
        if self.is_root() {
            return self.clone();
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Append one segment. The name is taken verbatim.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Absolute display form, e.g. `/home/projects`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl Default for VirtualPath {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl From<VirtualPath> for String {
    fn from(path: VirtualPath) -> Self {
        path.to_string()
    }
}
