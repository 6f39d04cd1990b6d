pub mod log_fs_adapter;
pub mod log_fs_adapter_trait;
pub mod log_repository;
