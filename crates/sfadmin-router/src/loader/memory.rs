//! In-memory module loader

use crate::error::LoadError;
use crate::loader::ModuleLoader;
use crate::view::{FeatureModules, ViewModule};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory module loader
///
/// Serves modules from a HashMap keyed by module id.
/// Used for tests and for builds that embed their views.
#[derive(Clone)]
pub struct StaticModuleLoader {
    modules: Arc<RwLock<HashMap<String, ViewModule>>>,
}

impl StaticModuleLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self {
            modules: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a loader that knows every module declared by `features`
    pub fn for_features(features: &[&FeatureModules]) -> Self {
        let modules: HashMap<String, ViewModule> = features
            .iter()
            .flat_map(|feature| feature.iter())
            .map(|entry| {
                (
                    entry.module_id.to_string(),
                    ViewModule::from_module_id(entry.module_id),
                )
            })
            .collect();

        Self {
            modules: Arc::new(RwLock::new(modules)),
        }
    }

    /// Register (or replace) a module under its id
    pub async fn register(&self, module: ViewModule) {
        let mut modules = self.modules.write().await;
        modules.insert(module.id.clone(), module);
    }

    /// Number of registered modules
    pub async fn len(&self) -> usize {
        self.modules.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.modules.read().await.is_empty()
    }
}

impl Default for StaticModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleLoader for StaticModuleLoader {
    async fn load(&self, module_id: &str) -> Result<ViewModule, LoadError> {
        let modules = self.modules.read().await;
        modules
            .get(module_id)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(module_id.to_string()))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
