//! Module loader configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Alias that module ids use for the source root, as in `@/views/system/...`
pub const DEFAULT_ALIAS_PREFIX: &str = "@/";

/// Filesystem loader configuration (`[loader]` in sfadmin.toml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory the alias prefix points at
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Prefix stripped from module ids before joining them onto `root`
    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: String,

    /// File extensions to try, in order
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_alias_prefix() -> String {
    DEFAULT_ALIAS_PREFIX.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["vue".to_string()]
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            alias_prefix: default_alias_prefix(),
            extensions: default_extensions(),
        }
    }
}
