use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::LoadError;

/// Every regular file under `dir` and its subdirectories, in walk order.
/// Symbolic links are not followed; all ignore-file filtering is disabled.
pub(super) fn walk_recursive(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let walker = WalkBuilder::new(dir)
        .hidden(false)
        .follow_links(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .build();

    for entry in walker {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Non-directory entries of `dir` itself, in enumeration order.
pub(super) fn list_shallow(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let read_dir = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| LoadError::ReadDir {
            path: entry.path(),
            source,
        })?;
        if !file_type.is_dir() {
            files.push(entry.path());
        }
    }

    Ok(files)
}
