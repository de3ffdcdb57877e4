mod module;
mod store;

pub use module::{RegisteredModule, RouteModule};
pub use store::ModuleRegistry;
