use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use router_client::wire::{ErrorBody, Status};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request was well-formed JSON but unusable. Reported before any delay.
    #[error("{0}")]
    Validation(&'static str),
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] JsonRejection),
    #[error("{context}: {detail}")]
    Internal {
        context: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(rejection) => rejection.status(),
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Error: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        let body = ErrorBody {
            status: Status::Error,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
