use std::sync::Arc;

use crate::key::ModuleKey;
use crate::params::Params;

/// A route-registration module.
///
/// This is the typed call shape every registry entry satisfies: each module
/// receives the shared router handle and the shared parameter bag, attaches
/// whatever routes it owns, and returns nothing. Plain closures of the
/// matching shape implement the trait automatically.
pub trait RouteModule<R>: Send + Sync {
    /// Attach this module's routes to the router.
    fn register(&self, router: &mut R, params: &Params);
}

impl<R, F> RouteModule<R> for F
where
    F: Fn(&mut R, &Params) + Send + Sync,
{
    fn register(&self, router: &mut R, params: &Params) {
        self(router, params)
    }
}

/// Key and implementation pair stored by the registry.
pub struct RegisteredModule<R> {
    key: ModuleKey,
    module: Arc<dyn RouteModule<R>>,
}

impl<R> RegisteredModule<R> {
    #[must_use]
    pub(crate) fn new(key: ModuleKey, module: Arc<dyn RouteModule<R>>) -> Self {
        Self { key, module }
    }

    #[must_use]
    pub fn key(&self) -> &ModuleKey {
        &self.key
    }

    #[must_use]
    pub fn module(&self) -> Arc<dyn RouteModule<R>> {
        Arc::clone(&self.module)
    }
}

impl<R> Clone for RegisteredModule<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            module: Arc::clone(&self.module),
        }
    }
}
