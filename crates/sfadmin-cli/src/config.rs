// File: src/config.rs
// Purpose: Configuration parsing from sfadmin.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sfadmin_router::LoaderConfig;
use sfadmin_utils::{Locale, DEFAULT_FORMAT};
use std::fs;
use std::path::Path;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

/// Output formatting defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Template used by `time` when `--format` is not given
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Decimal places used by `size` when `--decimals` is not given
    #[serde(default = "default_size_decimals")]
    pub size_decimals: i32,

    /// Language for relative times ("zh-CN" or "en")
    #[serde(default)]
    pub locale: Locale,
}

fn default_time_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_size_decimals() -> i32 {
    2
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            size_decimals: default_size_decimals(),
            locale: Locale::default(),
        }
    }
}

impl Config {
    /// Load configuration from sfadmin.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // Empty file means defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format.time_format, "{y}-{m}-{d} {h}:{i}:{s}");
        assert_eq!(config.format.size_decimals, 2);
        assert_eq!(config.format.locale, Locale::ZhCn);
        assert_eq!(config.loader.alias_prefix, "@/");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path().join("sfadmin.toml")).unwrap();
        assert_eq!(config.loader.root, PathBuf::from("src"));
    }

    #[test]
    fn test_custom_sections() {
        let toml = r#"
            [loader]
            root = "web/src"

            [format]
            locale = "en"
            size_decimals = 1
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.loader.root, PathBuf::from("web/src"));
        assert_eq!(config.loader.extensions, vec!["vue"]);
        assert_eq!(config.format.locale, Locale::En);
        assert_eq!(config.format.size_decimals, 1);
        assert_eq!(config.format.time_format, "{y}-{m}-{d} {h}:{i}:{s}");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sfadmin.toml");
        std::fs::write(&path, "[format]\nlocale = \"fr\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
