use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use weeks_core::error::WeeksError;

/// Private sentinel used to carry an explicit HTTP 404 for paths that are
/// not part of the API.
#[derive(Debug, Error)]
#[error("{0}")]
struct NotFoundError(String);

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }
}

fn status_for(e: &WeeksError) -> StatusCode {
    match e {
        WeeksError::InvalidDate(_)
        | WeeksError::BirthDateInFuture(_)
        | WeeksError::InvalidLifespan(_)
        | WeeksError::InvalidMilestone(_)
        | WeeksError::EmptyDescription => StatusCode::BAD_REQUEST,
        WeeksError::WeekOffGrid { .. } => StatusCode::NOT_FOUND,
        WeeksError::MissingBirthDate | WeeksError::EditorNotOpen => StatusCode::CONFLICT,
        WeeksError::CommitNotReady(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WeeksError::HomeNotFound
        | WeeksError::Io(_)
        | WeeksError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.0.downcast_ref::<NotFoundError>().is_some() {
            StatusCode::NOT_FOUND
        } else if let Some(e) = self.0.downcast_ref::<WeeksError>() {
            status_for(e)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

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
