//! System management views: permissions and request monitoring

use crate::view::{FeatureModules, ViewEntry};

pub const SYSTEM: FeatureModules = FeatureModules::new(
    "system",
    &[
        ViewEntry::new("views/system/permission/menu", "@/views/system/permission/menu"),
        ViewEntry::new("views/system/permission/user", "@/views/system/permission/user"),
        ViewEntry::new("views/system/permission/role", "@/views/system/permission/role"),
        ViewEntry::new("views/system/monitor/req-log", "@/views/system/monitor/req-log"),
    ],
);
