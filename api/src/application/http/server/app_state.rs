use std::sync::Arc;

use yshy_core::application::YshyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: YshyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: YshyService) -> Self {
        Self { args, service }
    }
}
