use std::sync::Arc;

use crate::{pipeline::Pipeline, repositories::SummaryStore};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub store: Arc<dyn SummaryStore>,
    /// Include diagnostic `details` in error bodies (off in production).
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(pipeline: Pipeline, store: Arc<dyn SummaryStore>, expose_error_details: bool) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            store,
            expose_error_details,
        }
    }
}
