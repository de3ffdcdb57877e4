use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use routewalk::{
    LoadError, Loader, LoaderOptions, ModuleRegistry, Params, PathSpec, RouteLogger, load_routes,
};

#[derive(Debug, Default)]
struct TestRouter {
    routes: Vec<String>,
}

#[derive(Clone, Default)]
struct CapturingLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RouteLogger for CapturingLogger {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// Tempdir with `routes/alpha.rs` and `routes/beta.rs`, plus a registry whose
/// modules append their route path to the router.
fn fixture() -> (TempDir, ModuleRegistry<TestRouter>) {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("routes/alpha.rs"));
    touch(&tmp.path().join("routes/beta.rs"));

    let mut registry = ModuleRegistry::new();
    for name in ["alpha", "beta"] {
        registry
            .register_fn(
                format!("routes/{name}"),
                move |router: &mut TestRouter, _params: &Params| {
                    router.routes.push(format!("/{name}"));
                },
            )
            .unwrap();
    }
    (tmp, registry)
}

fn loader_for<'a>(
    tmp: &TempDir,
    registry: &'a ModuleRegistry<TestRouter>,
) -> Loader<'a, TestRouter> {
    Loader::with_options(registry, LoaderOptions::default().with_base(tmp.path()))
}

#[test]
fn loads_in_first_insertion_order_across_pattern_entries() {
    let (tmp, registry) = fixture();
    let loader = loader_for(&tmp, &registry);

    // beta is named directly first, so the shallow pattern only adds alpha.
    let spec = PathSpec::from(vec![
        format!("{}/routes/beta.rs", tmp.path().display()),
        format!("{}/routes/*", tmp.path().display()),
    ]);

    let router = loader
        .load(&spec, TestRouter::default(), &Params::new())
        .unwrap();
    assert_eq!(router.routes, vec!["/beta", "/alpha"]);
}

#[test]
fn returns_the_router_that_was_passed_in() {
    let (tmp, registry) = fixture();
    let loader = loader_for(&tmp, &registry);
    let spec = PathSpec::from(format!("{}/routes/beta.rs", tmp.path().display()));

    let mut seeded = TestRouter::default();
    seeded.routes.push("/existing".to_owned());

    let router = loader.load(&spec, seeded, &Params::new()).unwrap();
    assert_eq!(router.routes, vec!["/existing", "/beta"]);
}

#[test]
fn logger_receives_one_line_per_load_in_order() {
    let (tmp, registry) = fixture();
    let loader = loader_for(&tmp, &registry);
    let spec = PathSpec::from(vec![
        format!("{}/routes/beta.rs", tmp.path().display()),
        format!("{}/routes/alpha.rs", tmp.path().display()),
    ]);

    let logger = CapturingLogger::default();
    let params = Params::new().with_logger(logger.clone());
    loader.load(&spec, TestRouter::default(), &params).unwrap();

    let messages = logger.messages.lock().unwrap();
    assert_eq!(
        *messages,
        vec![
            "Loading routing file: routes/beta",
            "Loading routing file: routes/alpha",
        ]
    );
}

#[test]
fn empty_spec_fails_without_loading_anything() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);

    let mut registry = ModuleRegistry::new();
    registry
        .register_fn("routes/users", move |_router: &mut TestRouter, _params: &Params| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    let err = load_routes(
        PathSpec::new(),
        &registry,
        TestRouter::default(),
        &Params::new(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        LoadError::MissingArgument { name: "paths" }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unknown_module_aborts_before_any_invocation() {
    let (tmp, registry) = fixture();
    let loader = loader_for(&tmp, &registry);

    // The failing entry comes first; beta must never run.
    let spec = PathSpec::from(vec![
        format!("{}/routes/ghost", tmp.path().display()),
        format!("{}/routes/beta.rs", tmp.path().display()),
    ]);

    let err = loader
        .load(&spec, TestRouter::default(), &Params::new())
        .unwrap_err();
    match err {
        LoadError::UnknownModule { key } => assert_eq!(key.as_str(), "routes/ghost"),
        other => panic!("expected UnknownModule, got {other:?}"),
    }
}

#[test]
fn duplicate_discoveries_invoke_the_module_once() {
    let (tmp, registry) = fixture();
    let loader = loader_for(&tmp, &registry);
    let spec = PathSpec::from(vec![
        format!("{}/routes/beta.rs", tmp.path().display()),
        format!("{}/routes/beta", tmp.path().display()),
        format!("{}/routes/*", tmp.path().display()),
    ]);

    let router = loader
        .load(&spec, TestRouter::default(), &Params::new())
        .unwrap();
    assert_eq!(router.routes, vec!["/beta", "/alpha"]);
}

#[test]
fn params_are_shared_with_every_module() {
    let mut registry = ModuleRegistry::new();
    for key in ["routes/a", "routes/b"] {
        registry
            .register_fn(key, |router: &mut TestRouter, params: &Params| {
                let prefix = params
                    .get("prefix")
                    .and_then(|value| value.as_str())
                    .unwrap_or_default();
                router.routes.push(prefix.to_owned());
            })
            .unwrap();
    }

    // Direct entries resolve without touching the filesystem.
    let params = Params::new().with_value("prefix", "/api");
    let router = load_routes(
        ["routes/a", "routes/b"],
        &registry,
        TestRouter::default(),
        &params,
    )
    .unwrap();
    assert_eq!(router.routes, vec!["/api", "/api"]);
}
