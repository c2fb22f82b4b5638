//! # SF-Admin Router
//!
//! Lazy route-module registry for the dashboard.
//!
//! Each feature area declares its views as a static table of
//! `view key → module id` pairs ([`FeatureModules`]). At startup the tables are
//! bound to a [`ModuleLoader`] and merged into one immutable [`Registry`].
//! Nothing is loaded until a router resolves a key.
//!
//! ## Loaders
//!
//! - **Static**: in-memory table, used for tests and embedded builds
//! - **Filesystem**: resolves `@/views/...` ids to files under a source root
//!
//! ## Example
//!
//! ```rust
//! use sfadmin_router::{modules, Registry, StaticModuleLoader};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let loader = Arc::new(StaticModuleLoader::for_features(modules::ALL));
//!     let registry = Registry::from_features(loader, modules::ALL);
//!
//!     let view = registry.resolve("views/system/permission/menu").await.unwrap();
//!     assert_eq!(view.name, "SystemPermissionMenu");
//!     assert!(registry.resolve("views/unknown").await.is_err());
//! }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod modules;
pub mod registry;
pub mod view;

pub use config::LoaderConfig;
pub use error::{LoadError, RouteError};
pub use loader::filesystem::FilesystemModuleLoader;
pub use loader::memory::StaticModuleLoader;
pub use loader::ModuleLoader;
pub use registry::{BoxFuture, Registry, RegistryBuilder, ViewLoader};
pub use view::{FeatureModules, ViewEntry, ViewKey, ViewModule};
