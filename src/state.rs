use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Prefix for short URLs returned to clients, e.g. `https://s.example.com/short`.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            link_service,
            base_url: base_url.into(),
        }
    }
}
