//! Module loading backends

use crate::error::LoadError;
use crate::view::ViewModule;
use async_trait::async_trait;

pub mod filesystem;
pub mod memory;

/// Capability that turns a module id into a loaded view
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    /// Load the module behind `module_id`
    async fn load(&self, module_id: &str) -> Result<ViewModule, LoadError>;

    /// Get loader backend name
    fn name(&self) -> &'static str;
}
