use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::service::ExplorerError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "Data store unavailable".to_string()),
            ApiError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingParameter(param) => ApiError::BadRequest(format!("Missing parameter: {}", param)),
            ValidationError::InvalidParameter(msg) => ApiError::InvalidParameter(msg),
        }
    }
}

impl From<ExplorerError> for ApiError {
    fn from(err: ExplorerError) -> Self {
        match err {
            ExplorerError::NotFound(hash) => ApiError::NotFound(format!("transaction {}", hash)),
            ExplorerError::StoreUnavailable(source) => {
                error!("Store failure: {}", source);
                ApiError::Unavailable(source.to_string())
            }
        }
    }
}
