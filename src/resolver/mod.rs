mod walk;

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::LoadError;
use crate::key::ModuleKey;
use crate::loader::LoaderOptions;
use crate::pattern::{PathSpec, PatternKind, classify};
use crate::registry::{ModuleRegistry, RouteModule};


/// Ordered mapping from canonical key to loaded module, built by one resolve.
///
/// Each key appears at most once: the first pattern entry to produce a key
/// wins, later discoveries of the same key are silent no-ops. Iteration
/// yields first-insertion order across the whole path spec.
pub struct LoadedModules<R> {
    modules: IndexMap<ModuleKey, Arc<dyn RouteModule<R>>>,
}

impl<R> std::fmt::Debug for LoadedModules<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModules")
            .field("keys", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<R> LoadedModules<R> {
    fn new() -> Self {
        Self {
            modules: IndexMap::new(),
        }
    }

    /// Returns `true` if the key was loaded.
    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.modules.contains_key(key)
    }

    /// Lookup a loaded module by key.
    pub fn get(&self, key: &ModuleKey) -> Option<&Arc<dyn RouteModule<R>>> {
        self.modules.get(key)
    }

    /// Iterate over `(key, module)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModuleKey, &Arc<dyn RouteModule<R>>)> {
        self.modules.iter()
    }

    /// Iterate over loaded keys in load order.
    pub fn keys(&self) -> impl Iterator<Item = &ModuleKey> {
        self.modules.keys()
    }

    /// Number of loaded modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` when nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Resolve a path spec into the ordered set of loaded modules.
///
/// Pattern entries are processed in spec order; `**` and `*` entries read
/// the filesystem, direct entries are keyed without touching it. Every
/// discovered key must have a registry entry, otherwise the whole resolve
/// aborts with no partial mapping returned.
pub(crate) fn resolve<R>(
    spec: &PathSpec,
    registry: &ModuleRegistry<R>,
    options: &LoaderOptions,
) -> Result<LoadedModules<R>, LoadError> {
    let mut loaded = LoadedModules::new();

    for entry in spec.iter() {
        match classify(entry) {
            PatternKind::Recursive(dir) => {
                for file in walk::walk_recursive(&dir)? {
                    load_if_absent(&mut loaded, registry, options, &file)?;
                }
            }
            PatternKind::Shallow(dir) => {
                for file in walk::list_shallow(&dir)? {
                    load_if_absent(&mut loaded, registry, options, &file)?;
                }
            }
            PatternKind::Direct(path) => {
                load_if_absent(&mut loaded, registry, options, &path)?;
            }
        }
    }

    Ok(loaded)
}

fn load_if_absent<R>(
    loaded: &mut LoadedModules<R>,
    registry: &ModuleRegistry<R>,
    options: &LoaderOptions,
    path: &Path,
) -> Result<(), LoadError> {
    let key = ModuleKey::for_path(&options.base, path, &options.extension);
    if loaded.contains(&key) {
        return Ok(());
    }

    let module = registry
        .get(&key)
        .ok_or_else(|| LoadError::UnknownModule { key: key.clone() })?;
    loaded.modules.insert(key, module);
    Ok(())
}
