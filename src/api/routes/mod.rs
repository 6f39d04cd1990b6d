//! API route declarations (e.g., /api/*)

pub mod config_routes;
pub mod log_routes;
