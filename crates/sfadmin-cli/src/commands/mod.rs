pub mod format;
pub mod routes;
