use std::sync::Arc;

use crate::services::search::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SearchService>,
}

impl AppState {
    pub fn new(service: SearchService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
