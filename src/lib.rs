//! Convention-based route-module loader.
//!
//! Applications register their route-registration modules in a
//! [`ModuleRegistry`] under canonical keys, then hand the loader one or more
//! filesystem path patterns (`dir/**` recursive, `dir/*` shallow, or a plain
//! module path). The loader resolves the patterns to an ordered, deduplicated
//! set of keys, looks each one up in the registry, and invokes every module
//! with the shared router handle and parameter bag.
//!
//! The router type is opaque to this crate: it is passed `&mut` to each
//! module and handed back from [`load_routes`] so call sites can chain.

mod error;
mod key;
mod loader;
mod params;
mod pattern;
mod registrar;
pub mod registry;
mod resolver;

pub use error::{LoadError, RegistryError};
pub use key::ModuleKey;
pub use loader::{Loader, LoaderOptions, load_routes};
pub use params::{LogAdapter, NoopLogger, Params, RouteLogger};
pub use pattern::PathSpec;
pub use registrar::register;
pub use registry::{ModuleRegistry, RegisteredModule, RouteModule};
pub use resolver::LoadedModules;
