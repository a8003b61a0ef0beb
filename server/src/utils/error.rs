use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::ids::IdGenerationError;
use crate::models::Violation;
use crate::utils::response::{error as error_response, validation_error};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Identifier generation failed")]
    IdGeneration(#[from] IdGenerationError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::IdGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MalformedBody(_) => "MALFORMED_BODY",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::IdGeneration(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::MalformedBody(msg) => {
                warn!(code = self.code(), message = %msg, "Rejected request body");
            }
            AppError::Validation(violations) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                warn!(code = self.code(), ?fields, "Rejected invalid event");
            }
            AppError::IdGeneration(e) => {
                error!(code = self.code(), error = %e, "Failed to generate event id");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal details
        self.log();

        match &self {
            AppError::MalformedBody(msg) => error_response(msg.clone(), status),
            AppError::Validation(violations) => validation_error(violations),
            AppError::IdGeneration(_) => error_response("internal server error", status),
        }
    }
}
