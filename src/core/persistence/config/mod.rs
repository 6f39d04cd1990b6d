pub mod config_api_repository_trait;
pub mod config_fs_adapter;
pub mod config_fs_adapter_trait;
pub mod config_repository;
