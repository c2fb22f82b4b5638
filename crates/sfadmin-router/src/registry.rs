//! Route module registry
//!
//! Maps view keys to lazily invoked loaders. A registry is built once from
//! static feature tables and is read-only afterwards; composing registries
//! produces a new value.

use crate::error::{LoadError, RouteError};
use crate::loader::ModuleLoader;
use crate::view::{FeatureModules, ViewKey, ViewModule};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type LoadFn = dyn Fn() -> BoxFuture<'static, Result<ViewModule, LoadError>> + Send + Sync;

/// Zero-argument loader bound to one module id
///
/// Every call to [`ViewLoader::load`] starts a new load; caching, if any,
/// belongs to the underlying [`ModuleLoader`].
#[derive(Clone)]
pub struct ViewLoader {
    module_id: Arc<str>,
    load: Arc<LoadFn>,
}

impl ViewLoader {
    /// Bind `module_id` to a shared module loader
    pub fn new(module_id: &str, loader: Arc<dyn ModuleLoader>) -> Self {
        let module_id: Arc<str> = Arc::from(module_id);
        let bound_id = Arc::clone(&module_id);

        Self {
            module_id,
            load: Arc::new(move || -> BoxFuture<'static, Result<ViewModule, LoadError>> {
                let loader = Arc::clone(&loader);
                let module_id = Arc::clone(&bound_id);
                Box::pin(async move { loader.load(&module_id).await })
            }),
        }
    }

    /// Wrap an arbitrary async function as a loader
    pub fn from_fn<F, Fut>(module_id: &str, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewModule, LoadError>> + Send + 'static,
    {
        Self {
            module_id: Arc::from(module_id),
            load: Arc::new(move || -> BoxFuture<'static, Result<ViewModule, LoadError>> {
                Box::pin(f())
            }),
        }
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    /// Start loading the module
    pub fn load(&self) -> BoxFuture<'static, Result<ViewModule, LoadError>> {
        (self.load)()
    }
}

impl fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewLoader")
            .field("module_id", &self.module_id)
            .finish()
    }
}

/// Immutable map from view key to loader
#[derive(Debug, Clone, Default)]
pub struct Registry {
    loaders: HashMap<ViewKey, ViewLoader>,
}

impl Registry {
    /// Start building a registry whose feature tables load through `loader`
    pub fn builder(loader: Arc<dyn ModuleLoader>) -> RegistryBuilder {
        RegistryBuilder::new(loader)
    }

    /// Build a registry from feature tables in one go
    pub fn from_features(loader: Arc<dyn ModuleLoader>, features: &[&FeatureModules]) -> Self {
        features
            .iter()
            .fold(RegistryBuilder::new(loader), |builder, feature| builder.feature(feature))
            .build()
    }

    pub fn get(&self, key: &str) -> Option<&ViewLoader> {
        self.loaders.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.loaders.contains_key(key)
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<&ViewKey> {
        let mut keys: Vec<&ViewKey> = self.loaders.keys().collect();
        keys.sort();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ViewKey, &ViewLoader)> {
        self.loaders.iter()
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Combine two registries; entries from `other` win on duplicate keys
    pub fn merge(mut self, other: Registry) -> Registry {
        for (key, loader) in other.loaders {
            if let Some(previous) = self.loaders.get(key.as_str()) {
                debug!(
                    "View {} overridden: {} -> {}",
                    key,
                    previous.module_id(),
                    loader.module_id()
                );
            }
            self.loaders.insert(key, loader);
        }
        self
    }

    /// Look up `key` and load its module
    ///
    /// An unregistered key yields [`RouteError::NotFound`].
    pub async fn resolve(&self, key: &str) -> Result<ViewModule, RouteError> {
        let Some(loader) = self.get(key) else {
            warn!("No view registered for {}", key);
            return Err(RouteError::NotFound(key.to_string()));
        };

        debug!("Resolving view {} via {}", key, loader.module_id());

        loader.load().await.map_err(|source| RouteError::Load {
            key: key.to_string(),
            source,
        })
    }
}

/// Collects feature tables and explicit loaders into a [`Registry`]
///
/// Later insertions replace earlier ones with the same key.
pub struct RegistryBuilder {
    loader: Arc<dyn ModuleLoader>,
    loaders: HashMap<ViewKey, ViewLoader>,
}

impl RegistryBuilder {
    pub fn new(loader: Arc<dyn ModuleLoader>) -> Self {
        Self {
            loader,
            loaders: HashMap::new(),
        }
    }

    /// Register every view of a feature table
    pub fn feature(mut self, feature: &FeatureModules) -> Self {
        for entry in feature.iter() {
            let loader = ViewLoader::new(entry.module_id, Arc::clone(&self.loader));
            self.insert(ViewKey::from(entry.key), loader);
        }
        debug!(
            "Registered {} views for feature {} ({} loader)",
            feature.len(),
            feature.name,
            self.loader.name()
        );
        self
    }

    /// Register a single view with its own loader
    pub fn view(mut self, key: impl Into<ViewKey>, loader: ViewLoader) -> Self {
        self.insert(key.into(), loader);
        self
    }

    pub fn build(self) -> Registry {
        debug!("Route module registry built with {} views", self.loaders.len());
        Registry {
            loaders: self.loaders,
        }
    }

    fn insert(&mut self, key: ViewKey, loader: ViewLoader) {
        if let Some(previous) = self.loaders.insert(key.clone(), loader) {
            debug!("View {} overridden (was {})", key, previous.module_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::memory::StaticModuleLoader;
    use crate::view::ViewEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const REPORTS: FeatureModules = FeatureModules::new(
        "reports",
        &[
            ViewEntry::new("views/reports/daily", "@/views/reports/daily"),
            ViewEntry::new("views/reports/daily", "@/views/reports/daily-v2"),
        ],
    );

    fn loader() -> Arc<dyn ModuleLoader> {
        Arc::new(StaticModuleLoader::for_features(&[&REPORTS]))
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let registry = Registry::from_features(loader(), &[&REPORTS]);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("views/reports/daily").unwrap().module_id(),
            "@/views/reports/daily-v2"
        );
    }

    #[test]
    fn test_building_does_not_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let registry = Registry::builder(loader())
            .view(
                "views/lazy",
                ViewLoader::from_fn("@/views/lazy", move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async { Ok(ViewModule::new("@/views/lazy", "Lazy")) }
                }),
            )
            .build();

        assert!(registry.contains("views/lazy"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_each_load_invokes_loader() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let view = ViewLoader::from_fn("@/views/counted", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(ViewModule::new("@/views/counted", "Counted")) }
        });

        let first = view.load().await.unwrap();
        let second = view.clone().load().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_custom_loader_error_passes_through() {
        let view = ViewLoader::from_fn("@/views/remote", || async {
            Err(LoadError::from(anyhow::anyhow!("network down")))
        });

        let err = view.load().await.unwrap_err();
        assert_eq!(err.to_string(), "network down");
    }

    #[tokio::test]
    async fn test_resolve_wraps_loader_failure() {
        let registry = Registry::builder(loader())
            .view(
                "views/broken",
                ViewLoader::new("@/views/not-there", loader()),
            )
            .build();

        let err = registry.resolve("views/broken").await.unwrap_err();
        assert!(!err.is_not_found());
        match err {
            RouteError::Load { key, source } => {
                assert_eq!(key, "views/broken");
                assert!(matches!(source, LoadError::NotFound(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = Registry::from_features(loader(), &[&REPORTS]);
        let patch = Registry::builder(loader())
            .view(
                "views/reports/daily",
                ViewLoader::new("@/views/reports/patched", loader()),
            )
            .view("views/reports/weekly", ViewLoader::new("@/views/reports/weekly", loader()))
            .build();

        let merged = base.merge(patch);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.get("views/reports/daily").unwrap().module_id(),
            "@/views/reports/patched"
        );
    }

    #[test]
    fn test_keys_are_sorted() {
        let registry = Registry::builder(loader())
            .view("views/b", ViewLoader::new("@/views/b", loader()))
            .view("views/a", ViewLoader::new("@/views/a", loader()))
            .build();

        let keys: Vec<&str> = registry.keys().into_iter().map(ViewKey::as_str).collect();
        assert_eq!(keys, vec!["views/a", "views/b"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.get("views/anything").is_none());
    }
}
