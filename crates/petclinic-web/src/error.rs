//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petclinic_core::db::DbError;
use petclinic_core::ClinicError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Clinic(#[from] ClinicError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("Database task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<DbError> for WebError {
    fn from(e: DbError) -> Self {
        WebError::Clinic(ClinicError::Database(e))
    }
}

impl<T> From<std::sync::PoisonError<T>> for WebError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        WebError::LockPoisoned
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Clinic(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            warn!(%status, error = %self, "request rejected");
        } else {
            error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = WebError::from(ClinicError::NotFound {
            entity: "Visit",
            id: 9,
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Visit 9 not found");
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let err = WebError::BadRequest("missing action".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        assert_eq!(
            WebError::LockPoisoned.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = WebError::from(DbError::Constraint("bad row".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
