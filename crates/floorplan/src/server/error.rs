//! Mapping pipeline failures onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use thiserror::Error;

use crate::error::FloorplanError;

/// Machine-readable error codes carried in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    PayloadTooLarge,
    DecodeError,
    InvalidImage,
    InternalError,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {}", .0.body_text())]
    InvalidRequest(#[from] JsonRejection),

    #[error(transparent)]
    Floorplan(#[from] FloorplanError),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            ApiError::InvalidRequest(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorCode::PayloadTooLarge)
            }
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest),
            ApiError::Floorplan(FloorplanError::Decode(_)) => {
                (StatusCode::BAD_REQUEST, ErrorCode::DecodeError)
            }
            ApiError::Floorplan(FloorplanError::InvalidImage { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::InvalidImage)
            }
            ApiError::Floorplan(_) | ApiError::Join(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, %code, "Request failed");
        } else {
            tracing::warn!(error = %self, %code, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
