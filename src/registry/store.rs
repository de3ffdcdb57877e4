use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::key::ModuleKey;
use crate::params::Params;

use super::{RegisteredModule, RouteModule};

/// Registration table mapping canonical keys to route modules.
///
/// This is the statically-typed stand-in for a dynamic module loader: the
/// application registers every route module under its canonical key at
/// startup, and the resolver looks discovered keys up here. Entries keep
/// insertion order.
pub struct ModuleRegistry<R> {
    modules: IndexMap<ModuleKey, RegisteredModule<R>>,
}

impl<R> ModuleRegistry<R> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: IndexMap::new(),
        }
    }

    /// Register a module implementation under its canonical key.
    ///
    /// Backslashes in the key are normalized to forward slashes. Registering
    /// a key that already exists is refused rather than silently replaced.
    pub fn register<M>(&mut self, key: impl Into<ModuleKey>, module: M) -> Result<(), RegistryError>
    where
        M: RouteModule<R> + 'static,
    {
        let key = key.into();
        if self.modules.contains_key(&key) {
            return Err(RegistryError::DuplicateKey { key });
        }
        let module = Arc::new(module) as Arc<dyn RouteModule<R>>;
        self.modules
            .insert(key.clone(), RegisteredModule::new(key, module));
        Ok(())
    }

    /// Register a closure of the module call shape under a key.
    ///
    /// Equivalent to [`register`](Self::register); the explicit closure bound
    /// helps type inference at call sites.
    pub fn register_fn<F>(&mut self, key: impl Into<ModuleKey>, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&mut R, &Params) + Send + Sync + 'static,
    {
        self.register(key, f)
    }

    /// Lookup the module registered under a key.
    pub fn get(&self, key: &ModuleKey) -> Option<Arc<dyn RouteModule<R>>> {
        self.modules.get(key).map(RegisteredModule::module)
    }

    /// Returns `true` if a module has been registered under the key.
    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.modules.contains_key(key)
    }

    /// Remove the module registered under the key.
    pub fn deregister(&mut self, key: &ModuleKey) -> Option<RegisteredModule<R>> {
        self.modules.shift_remove(key)
    }

    /// Iterate over all registered modules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredModule<R>> {
        self.modules.values()
    }

    /// Iterate over registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ModuleKey> {
        self.modules.keys()
    }

    /// Return the number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` when no modules have been registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<R> Default for ModuleRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ModuleRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
        }
    }
}
