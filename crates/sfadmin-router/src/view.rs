//! View keys, static feature tables and loaded view modules

use crate::config::DEFAULT_ALIAS_PREFIX;
use serde::{Deserialize, Serialize};
use sfadmin_utils::to_hump;
use std::borrow::Borrow;
use std::fmt;

/// Slash-delimited view identifier, e.g. `views/system/permission/menu`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewKey(String);

impl ViewKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Component/route name derived from the key
    ///
    /// ```
    /// use sfadmin_router::ViewKey;
    ///
    /// let key = ViewKey::new("views/system/monitor/req-log");
    /// assert_eq!(key.component_name(), "SystemMonitorReqLog");
    /// ```
    pub fn component_name(&self) -> String {
        to_hump(&self.0)
    }
}

impl Borrow<str> for ViewKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ViewKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One `view key → module id` declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEntry {
    pub key: &'static str,
    pub module_id: &'static str,
}

impl ViewEntry {
    pub const fn new(key: &'static str, module_id: &'static str) -> Self {
        Self { key, module_id }
    }
}

/// Static view table for one feature area
#[derive(Debug, Clone, Copy)]
pub struct FeatureModules {
    /// Feature area name, used in logs
    pub name: &'static str,
    pub entries: &'static [ViewEntry],
}

impl FeatureModules {
    pub const fn new(name: &'static str, entries: &'static [ViewEntry]) -> Self {
        Self { name, entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ViewEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A loaded view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModule {
    /// Module id the view was loaded from
    pub id: String,

    /// Component name, e.g. `SystemPermissionMenu`
    pub name: String,

    /// Source text, when the loader reads one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ViewModule {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source: None,
        }
    }

    /// Builds a module whose name is derived from an `@/`-prefixed id
    pub fn from_module_id(module_id: &str) -> Self {
        let path = module_id
            .strip_prefix(DEFAULT_ALIAS_PREFIX)
            .unwrap_or(module_id);
        Self::new(module_id, to_hump(path))
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
