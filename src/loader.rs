use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::params::Params;
use crate::pattern::PathSpec;
use crate::registrar;
use crate::registry::ModuleRegistry;
use crate::resolver::{self, LoadedModules};

/// Configuration for key computation and discovery.
///
/// Deserializable with defaults so it can sit in an application's
/// configuration file next to the path spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Directory canonical keys are computed relative to.
    pub base: PathBuf,
    /// Source extension stripped from discovered basenames.
    pub extension: String,
}

impl LoaderOptions {
    /// Replace the base directory.
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    /// Replace the source extension. Given without the leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
            extension: "rs".to_owned(),
        }
    }
}

/// Resolves path specs against the filesystem and a module registry.
pub struct Loader<'a, R> {
    registry: &'a ModuleRegistry<R>,
    options: LoaderOptions,
}

impl<'a, R> Loader<'a, R> {
    /// Create a loader over the registry with default options.
    pub fn new(registry: &'a ModuleRegistry<R>) -> Self {
        Self::with_options(registry, LoaderOptions::default())
    }

    /// Create a loader over the registry with explicit options.
    pub fn with_options(registry: &'a ModuleRegistry<R>, options: LoaderOptions) -> Self {
        Self { registry, options }
    }

    /// The options this loader resolves with.
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Base directory canonical keys are computed relative to.
    pub fn base(&self) -> &Path {
        &self.options.base
    }

    /// Resolve a path spec into the ordered set of loaded modules.
    ///
    /// Fails loudly if a pattern directory does not exist or a discovered
    /// key has no registry entry; no partial mapping is returned.
    pub fn resolve(&self, spec: &PathSpec) -> Result<LoadedModules<R>, LoadError> {
        resolver::resolve(spec, self.registry, &self.options)
    }

    /// Resolve the spec, then invoke every loaded module against the router.
    ///
    /// An empty spec fails with [`LoadError::MissingArgument`] before any
    /// filesystem access or module invocation. On success the router passed
    /// in is handed back, so call sites can chain.
    pub fn load(&self, spec: &PathSpec, router: R, params: &Params) -> Result<R, LoadError> {
        if spec.is_empty() {
            return Err(LoadError::MissingArgument { name: "paths" });
        }
        let loaded = self.resolve(spec)?;
        Ok(registrar::register(&loaded, router, params))
    }
}

/// Resolve and register in one call, using default [`LoaderOptions`].
pub fn load_routes<R>(
    spec: impl Into<PathSpec>,
    registry: &ModuleRegistry<R>,
    router: R,
    params: &Params,
) -> Result<R, LoadError> {
    Loader::new(registry).load(&spec.into(), router, params)
}
