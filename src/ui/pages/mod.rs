pub mod config_editor;
pub mod layout;
pub mod log_viewer;
