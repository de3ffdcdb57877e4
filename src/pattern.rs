use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Ordered list of path patterns selecting which route modules to load.
///
/// Each entry is either a directory pattern ending in `**` (the directory
/// and every subdirectory), a directory pattern ending in `*` (immediate
/// entries only), or a plain module path with the extension optional. No
/// validation happens beyond suffix inspection; bad paths surface as errors
/// during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathSpec {
    entries: Vec<String>,
}

impl PathSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern entry, preserving order.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of pattern entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the spec holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&str> for PathSpec {
    fn from(entry: &str) -> Self {
        Self {
            entries: vec![entry.to_owned()],
        }
    }
}

impl From<String> for PathSpec {
    fn from(entry: String) -> Self {
        Self {
            entries: vec![entry],
        }
    }
}

impl From<Vec<String>> for PathSpec {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
    fn from(entries: [&str; N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for PathSpec {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl FromIterator<String> for PathSpec {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Resolution strategy selected by a spec entry's suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternKind {
    /// `dir/**`: every regular file under the directory, recursively.
    Recursive(PathBuf),
    /// `dir/*`: non-directory entries of the directory itself.
    Shallow(PathBuf),
    /// A single module reference, extension optional.
    Direct(PathBuf),
}

pub(crate) fn classify(entry: &str) -> PatternKind {
    if let Some(stem) = entry.strip_suffix("**") {
        PatternKind::Recursive(PathBuf::from(stem))
    } else if let Some(stem) = entry.strip_suffix('*') {
        PatternKind::Shallow(PathBuf::from(stem))
    } else {
        PatternKind::Direct(PathBuf::from(entry))
    }
}
