use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::key::ModuleKey;

/// Errors that can occur while resolving a path spec and loading modules.
///
/// The original loader this crate models had two failure channels: a silent
/// null return for missing arguments and raised exceptions for everything
/// else. Both are folded into this one type with distinctly named kinds so
/// callers have a single mechanism to check.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required argument was absent, such as an empty path spec.
    #[error("missing required argument '{name}'")]
    MissingArgument { name: &'static str },

    /// A discovered or referenced key has no entry in the registry.
    #[error("no module registered for key '{key}'")]
    UnknownModule { key: ModuleKey },

    /// Recursive traversal failed under the given directory.
    #[error("directory walk failed under '{path}'")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// Enumerating a directory's immediate entries failed.
    #[error("failed to read directory '{path}'")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `**` or `*` pattern pointed at something other than a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

/// Errors that can occur when mutating a [`ModuleRegistry`](crate::ModuleRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A module attempted to register a key that already exists.
    #[error("module key '{key}' is already registered")]
    DuplicateKey { key: ModuleKey },
}
