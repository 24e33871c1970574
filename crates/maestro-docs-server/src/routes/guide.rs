use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use maestro_docs_core::doc::validate_anchor;
use maestro_docs_core::error::DocsError;

/// GET /api/guide — the full document tree as JSON.
pub async fn get_guide(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(serde_json::to_value(app.document.as_ref())?))
}

/// GET /api/guide/toc — derived table of contents.
pub async fn get_toc(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(serde_json::to_value(app.document.toc())?))
}

/// GET /api/guide/sections/:anchor — one section by anchor.
pub async fn get_section(
    State(app): State<AppState>,
    Path(anchor): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_anchor(&anchor)?;
    let section = app
        .document
        .section(&anchor)
        .ok_or(DocsError::SectionNotFound(anchor))?;
    Ok(Json(serde_json::to_value(section)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_section_finds_known_anchor() {
        let app = AppState::new();
        let result = get_section(State(app), Path("glossary".to_string())).await.unwrap();
        assert_eq!(result.0["anchor"], "glossary");
        assert_eq!(result.0["title"], "Glossary");
    }

    #[tokio::test]
    async fn get_section_rejects_unknown_anchor() {
        let app = AppState::new();
        let err = get_section(State(app), Path("no-such-section".to_string()))
            .await
            .unwrap_err();
        assert!(err
            .0
            .downcast_ref::<DocsError>()
            .is_some_and(|e| matches!(e, DocsError::SectionNotFound(_))));
    }

    #[tokio::test]
    async fn get_section_rejects_malformed_anchor() {
        let app = AppState::new();
        let err = get_section(State(app), Path("Not An Anchor".to_string()))
            .await
            .unwrap_err();
        assert!(err
            .0
            .downcast_ref::<DocsError>()
            .is_some_and(|e| matches!(e, DocsError::InvalidAnchor(_))));
    }

    #[tokio::test]
    async fn toc_has_twenty_entries() {
        let app = AppState::new();
        let result = get_toc(State(app)).await.unwrap();
        assert_eq!(result.0.as_array().unwrap().len(), 20);
    }
}
