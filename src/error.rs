use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("The 'url' field is required")]
    MissingUrl,

    #[error("API error: {status} - {details}")]
    Upstream { status: String, details: String },

    #[error("Failed to reach the analysis provider: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingUrl => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "The 'url' field is required".to_string(),
                    details: None,
                },
            ),
            AppError::Upstream { status, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Failed to analyze the URL. Please try again later.".to_string(),
                    details: Some(format!("API error: {} - {}", status, details)),
                },
            ),
            AppError::Unreachable(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Failed to analyze the URL. Please try again later.".to_string(),
                    details: Some(err.to_string()),
                },
            ),
            AppError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg,
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
