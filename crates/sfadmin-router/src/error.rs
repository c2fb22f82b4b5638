//! Error types for module loading and view resolution

use thiserror::Error;

/// Failure reported by a [`ModuleLoader`](crate::ModuleLoader)
#[derive(Debug, Error)]
pub enum LoadError {
    /// No code unit exists for this module id
    #[error("module not found: {0}")]
    NotFound(String),

    /// The id does not use the configured alias or escapes the source root
    #[error("invalid module id: {0}")]
    InvalidModuleId(String),

    #[error("failed to read module {module_id}")]
    Io {
        module_id: String,
        #[source]
        source: std::io::Error,
    },

    /// Escape hatch for loaders outside this crate
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure while resolving a view key through the registry
#[derive(Debug, Error)]
pub enum RouteError {
    /// The key is not registered; routers should answer with a 404
    #[error("no view registered for key: {0}")]
    NotFound(String),

    #[error("failed to load view {key}")]
    Load {
        key: String,
        #[source]
        source: LoadError,
    },
}

impl RouteError {
    /// Whether this error should be reported as "page not found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound(_))
    }
}
