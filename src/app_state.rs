use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::persistence::config::config_repository::ConfigRepository;
use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
use crate::domain::config::service::config_service::ConfigService;
use crate::domain::logs::service::log_service::LogService;

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogService<LogRepositoryImpl>>,
    pub config_service: Arc<ConfigService<ConfigRepository>>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    AppState {
        log_service: Arc::new(LogService::new(LogRepositoryImpl::new(&config.logs_dir))),
        config_service: Arc::new(ConfigService::new(ConfigRepository::new(&config.config_file))),
    }
}
