//! Filesystem module loader

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::loader::ModuleLoader;
use crate::view::ViewModule;
use async_trait::async_trait;
use sfadmin_utils::to_hump;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Filesystem module loader
///
/// Maps `@/views/system/permission/menu` to `<root>/views/system/permission/menu.vue`,
/// then `<root>/views/system/permission/menu/index.vue`, for each configured
/// extension in turn. The file contents become the module source.
#[derive(Debug, Clone)]
pub struct FilesystemModuleLoader {
    config: LoaderConfig,
}

impl FilesystemModuleLoader {
    /// Create a new filesystem loader
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Strip the alias and reject ids that would leave the source root
    fn relative_path<'a>(&self, module_id: &'a str) -> Result<&'a str, LoadError> {
        let relative = module_id
            .strip_prefix(self.config.alias_prefix.as_str())
            .ok_or_else(|| LoadError::InvalidModuleId(module_id.to_string()))?;

        let stays_inside = !relative.is_empty()
            && Path::new(relative)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if stays_inside {
            Ok(relative)
        } else {
            Err(LoadError::InvalidModuleId(module_id.to_string()))
        }
    }

    /// Candidate files for a relative module path, in lookup order
    fn candidates(&self, relative: &str) -> Vec<PathBuf> {
        self.config
            .extensions
            .iter()
            .flat_map(|ext| {
                [
                    self.config.root.join(format!("{}.{}", relative, ext)),
                    self.config.root.join(relative).join(format!("index.{}", ext)),
                ]
            })
            .collect()
    }
}

#[async_trait]
impl ModuleLoader for FilesystemModuleLoader {
    async fn load(&self, module_id: &str) -> Result<ViewModule, LoadError> {
        let relative = self.relative_path(module_id)?;

        for path in self.candidates(relative) {
            match fs::read_to_string(&path).await {
                Ok(source) => {
                    debug!("Loaded module {} from {:?}", module_id, path);
                    return Ok(ViewModule::new(module_id, to_hump(relative)).with_source(source));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(LoadError::Io {
                        module_id: module_id.to_string(),
                        source: e,
                    })
                }
            }
        }

        Err(LoadError::NotFound(module_id.to_string()))
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
