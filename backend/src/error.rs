//! Error handling for the Agricultural Advisory Platform
//!
//! Advisory failures are normally rendered inside the page. `AppError`
//! reaching `IntoResponse` means the page itself could not be produced.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use shared::AdvisoryError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Advisory(#[from] AdvisoryError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Chart rendering failed: {0}")]
    Chart(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Advisory(err) => err.code(),
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Chart(_) => "CHART_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Task(_) => "TASK_ERROR",
        }
    }

    /// Convert into the advisory taxonomy for display inside a feature panel
    pub fn into_advisory(self) -> AdvisoryError {
        match self {
            AppError::Advisory(err) => err,
            other => AdvisoryError::ComputationFailure(other.to_string()),
        }
    }
}

/// Error page shown when the advisory page itself fails
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let page = ErrorPage {
            code: self.code().to_string(),
            message: match &self {
                AppError::Advisory(err) => err.user_message(),
                _ => "An internal server error occurred".to_string(),
            },
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = page
            .render()
            .unwrap_or_else(|_| format!("{}: {}", page.code, page.message));
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
