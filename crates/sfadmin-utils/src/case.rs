//! Identifier case conversion
//!
//! Used to derive component and route names from view paths.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HUMP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-/_]([A-Za-z0-9_])").unwrap());

static UPPER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])").unwrap());

/// Converts `-`, `/` and `_` separated names to camel case and drops `views`
///
/// Every literal `views` substring is removed after conversion, wherever it
/// occurs.
///
/// # Examples
///
/// ```
/// use sfadmin_utils::to_hump;
///
/// assert_eq!(to_hump("views/system/permission/menu"), "SystemPermissionMenu");
/// assert_eq!(to_hump("req-log"), "reqLog");
/// ```
pub fn to_hump(name: &str) -> String {
    HUMP_REGEX
        .replace_all(name, |caps: &Captures| caps[1].to_uppercase())
        .replace("views", "")
}

/// Converts camel case to snake case
///
/// # Examples
///
/// ```
/// use sfadmin_utils::to_line;
///
/// assert_eq!(to_line("reqLogDetail"), "req_log_detail");
/// ```
pub fn to_line(name: &str) -> String {
    UPPER_REGEX.replace_all(name, "_$1").to_lowercase()
}
