use std::sync::Arc;

use nomibot_core::AnswerBackend;

/// Application state shared across all requests. The pipeline itself is
/// stateless; only the backend client lives here.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AnswerBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn AnswerBackend>) -> Self {
        Self { backend }
    }
}
