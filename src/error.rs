//! HTTP-facing error type.
//!
//! Every handler error ends up as [`AppError`], rendered as
//! `{"error": {"code", "message", "details"}}` with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::charts::RenderError;
use crate::domain::datasets::DatasetError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound { message, .. } | AppError::Internal { message, .. } => {
                f.write_str(message)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<DatasetError> for AppError {
    fn from(e: DatasetError) -> Self {
        tracing::error!(error = %e, "Synthetic data generation failed");
        AppError::internal("Failed to generate chart data", json!({}))
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        tracing::error!(error = %e, "Chart rendering failed");
        AppError::internal("Failed to render chart", json!({}))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
