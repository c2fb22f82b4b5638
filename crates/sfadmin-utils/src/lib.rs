//! SF-Admin Utils
//!
//! Pure helpers shared by the dashboard views and the CLI:
//! - Time formatting (`{y}-{m}-{d}` templates, relative "N minutes ago")
//! - URL query-string parsing
//! - Identifier case conversion (camelCase / snake_case)
//! - Filename to icon classification
//! - Byte-size formatting
//!
//! ## Example
//!
//! ```
//! use sfadmin_utils::{format_size, icon_name_for, to_hump};
//!
//! assert_eq!(format_size(1024), "1 KB");
//! assert_eq!(icon_name_for("report.pdf"), "file-type-pdf");
//! assert_eq!(to_hump("views/system/permission/menu"), "SystemPermissionMenu");
//! ```

pub mod banner;
pub mod case;
pub mod error;
pub mod file;
pub mod size;
pub mod time;
pub mod url;

pub use banner::{print_banner, BANNER};
pub use case::{to_hump, to_line};
pub use error::{TimeError, UrlError};
pub use file::{file_extension, icon_name_for, FileIcon};
pub use size::{format_size, format_size_units};
pub use time::{
    format_time, format_time_at, parse_time, parse_time_in, Locale, TimeInput, DEFAULT_FORMAT,
};
pub use url::param_to_map;
