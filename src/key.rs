use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Canonical identifier for a route module.
///
/// A key is the module's path relative to the loader's base directory, with
/// the source extension stripped from the basename and all backslashes
/// normalized to forward slashes. Keys are what the registry is indexed by
/// and what deduplication during resolution operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleKey(String);

impl ModuleKey {
    /// Compute the key for a module path as discovered under `base`.
    ///
    /// The path does not need to exist; direct spec entries are keyed the
    /// same way as files found by traversal. Only `extension` is stripped
    /// from the basename, any other extension stays in the key.
    pub(crate) fn for_path(base: &Path, path: &Path, extension: &str) -> Self {
        let stem = strip_extension(path, extension);
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let relative = relative_to(base, &dir.join(stem));
        Self(normalize_slashes(&relative))
    }

    /// View the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleKey {
    fn from(value: &str) -> Self {
        Self(value.replace('\\', "/"))
    }
}

impl From<String> for ModuleKey {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Basename of `path` with `extension` removed when it matches exactly.
fn strip_extension(path: &Path, extension: &str) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = format!(".{extension}");
    name.strip_suffix(suffix.as_str())
        .map(str::to_owned)
        .unwrap_or(name)
}

fn normalize_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `target` relative to `base`, walking up with `..` components
/// where needed. When one side is absolute and the other is not there is no
/// meaningful common root, so the target is returned as-is.
pub(crate) fn relative_to(base: &Path, target: &Path) -> PathBuf {
    if base.is_absolute() != target.is_absolute() {
        return target.to_path_buf();
    }

    let base: Vec<Component<'_>> = base
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    let target: Vec<Component<'_>> = target
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component);
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_configured_extension() {
        let key = ModuleKey::for_path(Path::new("."), Path::new("routes/users.rs"), "rs");
        assert_eq!(key.as_str(), "routes/users");

        let key = ModuleKey::for_path(Path::new("."), Path::new("routes/notes.txt"), "rs");
        assert_eq!(key.as_str(), "routes/notes.txt");
    }

    #[test]
    fn keys_extensionless_paths_verbatim() {
        let key = ModuleKey::for_path(Path::new("."), Path::new("routes/users"), "rs");
        assert_eq!(key.as_str(), "routes/users");
    }

    #[test]
    fn relativizes_against_the_base_directory() {
        let key = ModuleKey::for_path(
            Path::new("/srv/app"),
            Path::new("/srv/app/routes/sub/c.rs"),
            "rs",
        );
        assert_eq!(key.as_str(), "routes/sub/c");
    }

    #[test]
    fn walks_up_when_the_module_is_outside_the_base() {
        let key = ModuleKey::for_path(
            Path::new("/srv/app/loader"),
            Path::new("/srv/app/routes/users.rs"),
            "rs",
        );
        assert_eq!(key.as_str(), "../routes/users");
    }

    #[test]
    fn mixed_absolute_and_relative_paths_keep_the_target() {
        let key = ModuleKey::for_path(Path::new("/srv/app"), Path::new("routes/users"), "rs");
        assert_eq!(key.as_str(), "routes/users");
    }

    #[test]
    fn normalizes_backslashes_in_registered_keys() {
        let key = ModuleKey::from("routes\\admin\\users");
        assert_eq!(key.as_str(), "routes/admin/users");
    }
}
