pub mod config_service;
