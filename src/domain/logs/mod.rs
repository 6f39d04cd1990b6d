pub mod log_name;
pub mod service;
