use crate::params::Params;
use crate::resolver::LoadedModules;

/// Invoke every loaded module in load order against the shared router.
///
/// Each invocation is announced through the params' logger capability as
/// `Loading routing file: <key>` before the module runs. Returns the router
/// passed in so call sites can chain.
pub fn register<R>(loaded: &LoadedModules<R>, mut router: R, params: &Params) -> R {
    for (key, module) in loaded.iter() {
        params.logger().info(&format!("Loading routing file: {key}"));
        module.register(&mut router, params);
    }
    router
}
