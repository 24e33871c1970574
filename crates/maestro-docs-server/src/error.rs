use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maestro_docs_core::error::DocsError;

/// Unified error type for HTTP responses.
///
/// `DocsError` variants map to statuses; anything else is a 500. The body is
/// always a JSON object with an `error` field.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<DocsError>() {
            match e {
                DocsError::SectionNotFound(_) => StatusCode::NOT_FOUND,
                DocsError::InvalidAnchor(_) | DocsError::DuplicateAnchor(_) => {
                    StatusCode::BAD_REQUEST
                }
                DocsError::CommandNotFound(_)
                | DocsError::InstallFailed(_)
                | DocsError::LaunchFailed { .. }
                | DocsError::Io(_)
                | DocsError::Yaml(_)
                | DocsError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
