use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// GET / and /index.html — the rendered guide as a standalone HTML page.
pub async fn get_page(State(app): State<AppState>) -> Html<String> {
    Html(app.page.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_handler_returns_rendered_html() {
        let app = AppState::new();
        let Html(body) = get_page(State(app)).await;
        assert!(body.contains("Maestro Startup — Architecture &amp; Implementation Guide"));
    }
}
