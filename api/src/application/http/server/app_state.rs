use std::sync::Arc;

use alphago_core::application::AlphagoService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AlphagoService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AlphagoService) -> Self {
        Self { args, service }
    }
}
