use std::sync::Arc;

use crate::ui::client::GatewayApi;

#[derive(Clone)]
pub struct UiState {
    pub gateway: Arc<dyn GatewayApi>,
}

impl UiState {
    pub fn new(gateway: Arc<dyn GatewayApi>) -> Self {
        Self { gateway }
    }
}
