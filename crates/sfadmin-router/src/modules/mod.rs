//! Feature-area view tables
//!
//! One table per feature area. [`ALL`] lists every table the dashboard ships.

use crate::view::FeatureModules;

pub mod system;

pub use system::SYSTEM;

/// Every feature table, in registration order
pub const ALL: &[&FeatureModules] = &[&SYSTEM];
