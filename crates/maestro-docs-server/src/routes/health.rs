use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/health — liveness plus the served document's shape.
pub async fn health(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "sections": app.document.sections.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_section_count() {
        let app = AppState::new();
        let result = health(State(app)).await;
        assert_eq!(result.0["status"], "ok");
        assert_eq!(result.0["sections"], 20);
    }
}
