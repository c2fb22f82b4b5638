//! Integration tests for sfadmin-router
//!
//! Tests are organized by feature area and cover:
//! - Resolving every shipped view through a stub loader
//! - Not-found handling for unregistered keys
//! - Composing per-feature registries
//! - Resolving from files on disk

use pretty_assertions::assert_eq;
use sfadmin_router::*;
use std::sync::Arc;
use tempfile::TempDir;

fn static_registry() -> Registry {
    let loader = Arc::new(StaticModuleLoader::for_features(modules::ALL));
    Registry::from_features(loader, modules::ALL)
}

#[tokio::test]
async fn test_every_registered_view_resolves() {
    let registry = static_registry();
    assert_eq!(registry.len(), 4);

    for key in registry.keys() {
        let module = registry.resolve(key.as_str()).await.unwrap();
        assert_eq!(module.name, key.component_name());
    }
}

#[tokio::test]
async fn test_system_views_are_registered() {
    let registry = static_registry();
    let keys: Vec<&str> = registry.keys().into_iter().map(ViewKey::as_str).collect();

    assert_eq!(
        keys,
        vec![
            "views/system/monitor/req-log",
            "views/system/permission/menu",
            "views/system/permission/role",
            "views/system/permission/user",
        ]
    );
}

#[tokio::test]
async fn test_resolve_is_repeatable() {
    let registry = static_registry();
    let first = registry.resolve("views/system/permission/user").await.unwrap();
    let second = registry.resolve("views/system/permission/user").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unregistered_key_is_not_found() {
    let registry = static_registry();
    let err = registry.resolve("views/system/permission/unknown").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "no view registered for key: views/system/permission/unknown"
    );
}

#[tokio::test]
async fn test_loader_without_module_reports_load_error() {
    // Registry declares the views but the loader knows none of them
    let registry = Registry::from_features(Arc::new(StaticModuleLoader::new()), modules::ALL);
    let err = registry.resolve("views/system/permission/menu").await.unwrap_err();

    assert!(matches!(err, RouteError::Load { .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_merge_feature_registries() {
    const DASHBOARD: FeatureModules = FeatureModules::new(
        "dashboard",
        &[ViewEntry::new("views/dashboard/index", "@/views/dashboard/index")],
    );

    let loader = Arc::new(StaticModuleLoader::for_features(&[&modules::SYSTEM, &DASHBOARD]));
    let system = Registry::from_features(loader.clone(), &[&modules::SYSTEM]);
    let dashboard = Registry::from_features(loader, &[&DASHBOARD]);

    let merged = system.merge(dashboard);
    assert_eq!(merged.len(), 5);

    let module = merged.resolve("views/dashboard/index").await.unwrap();
    assert_eq!(module.name, "DashboardIndex");
}

#[tokio::test]
async fn test_filesystem_registry_resolves_sources() {
    let temp_dir = TempDir::new().unwrap();
    for entry in modules::SYSTEM.iter() {
        let path = temp_dir.path().join(format!("{}.vue", entry.key));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, format!("<template>{}</template>", entry.key)).unwrap();
    }

    let loader = Arc::new(FilesystemModuleLoader::new(LoaderConfig {
        root: temp_dir.path().to_path_buf(),
        ..LoaderConfig::default()
    }));
    let registry = Registry::from_features(loader, modules::ALL);

    let module = registry.resolve("views/system/monitor/req-log").await.unwrap();
    assert_eq!(module.id, "@/views/system/monitor/req-log");
    assert_eq!(module.name, "SystemMonitorReqLog");
    assert_eq!(
        module.source.as_deref(),
        Some("<template>views/system/monitor/req-log</template>")
    );
}
