use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::docx::DocxError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Render(#[from] DocxError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Render(e) => tracing::error!("Error generating resume: {e}"),
            AppError::Internal(e) => tracing::error!("Error generating resume: {e:?}"),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error generating resume: {self}"),
        )
            .into_response()
    }
}
