use crate::config::Config;
use anyhow::{bail, Result};
use colored::Colorize;
use sfadmin_router::{modules, FilesystemModuleLoader, Registry, RouteError};
use sfadmin_utils::format_size;
use std::sync::Arc;
use tracing::info;

fn build_registry(config: &Config) -> Registry {
    let loader = Arc::new(FilesystemModuleLoader::new(config.loader.clone()));
    Registry::from_features(loader, modules::ALL)
}

pub fn list(config: &Config) -> Result<()> {
    let registry = build_registry(config);

    println!("{}", "Registered views".green().bold());
    println!();

    for key in registry.keys() {
        if let Some(loader) = registry.get(key.as_str()) {
            println!(
                "  {}  {}  {}",
                key.as_str().cyan(),
                "→".dimmed(),
                loader.module_id()
            );
        }
    }

    println!();
    println!("{} views", registry.len());

    Ok(())
}

pub async fn resolve(config: &Config, key: &str) -> Result<()> {
    let registry = build_registry(config);
    info!("Resolving {} under {:?}", key, config.loader.root);

    match registry.resolve(key).await {
        Ok(module) => {
            println!("{}", "View resolved".green().bold());
            println!();
            println!("Name:   {}", module.name.cyan());
            println!("Module: {}", module.id);
            if let Some(source) = &module.source {
                println!("Source: {}", format_size(source.len() as u64));
            }
            Ok(())
        }
        Err(err @ RouteError::NotFound(_)) => {
            println!("{}", "✗ View not found".red().bold());
            bail!(err)
        }
        Err(err) => Err(err.into()),
    }
}
