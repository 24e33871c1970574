use maestro_docs_core::doc::Document;
use maestro_docs_core::{guide, render};
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// The document and the rendered page are built once at startup; the content
/// never changes while the server runs.
#[derive(Clone)]
pub struct AppState {
    pub document: Arc<Document>,
    pub page: Arc<String>,
}

impl AppState {
    pub fn new() -> Self {
        let document = guide::document();
        let page = render::html::render_page(&document);
        Self {
            document: Arc::new(document),
            page: Arc::new(page),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
