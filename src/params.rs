use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Logging capability carried by [`Params`].
///
/// The registrar announces every module it loads through this trait. The
/// default implementation drops the messages; applications that want the
/// load log wire in [`LogAdapter`] or their own implementation.
pub trait RouteLogger: Send + Sync {
    /// Record an informational message.
    fn info(&self, message: &str);
}

/// Default logger: discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl RouteLogger for NoopLogger {
    fn info(&self, _message: &str) {}
}

/// Forwards the logging capability to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAdapter;

impl RouteLogger for LogAdapter {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Shared parameter bag handed to every loaded module.
///
/// Holds arbitrary caller-supplied values plus the logger capability. The
/// loader never mutates the bag; it only reads the logger and forwards the
/// whole bag by reference to each module invocation.
#[derive(Clone)]
pub struct Params {
    values: HashMap<String, Value>,
    logger: Arc<dyn RouteLogger>,
}

impl Params {
    /// Create an empty bag with the no-op logger.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            logger: Arc::new(NoopLogger),
        }
    }

    /// Replace the logger capability.
    pub fn with_logger(mut self, logger: impl RouteLogger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Insert a value, builder style.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value under the given key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Lookup a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The logger capability carried by this bag.
    pub fn logger(&self) -> &dyn RouteLogger {
        self.logger.as_ref()
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_values() {
        let params = Params::new()
            .with_value("prefix", "/api")
            .with_value("strict", true);
        assert_eq!(params.get("prefix"), Some(&Value::from("/api")));
        assert_eq!(params.get("strict"), Some(&Value::from(true)));
        assert!(params.get("missing").is_none());
    }

    #[test]
    fn default_logger_is_a_noop() {
        let params = Params::default();
        params.logger().info("dropped");
    }
}
