use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::Violation;

#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Body for requests that could not be read as an event.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for events that parsed but broke field constraints.
#[derive(Serialize)]
pub struct ValidationBody<'a> {
    pub message: String,
    pub violations: &'a [Violation],
}

pub fn success<T>(data: T, message: impl Into<String>) -> impl IntoResponse
where
    T: Serialize,
{
    let body = ApiResponse {
        success: true,
        data: Some(data),
        message: Some(message.into()),
    };
    (StatusCode::OK, Json(body))
}

pub fn json<T>(status: StatusCode, data: T) -> Response
where
    T: Serialize,
{
    (status, Json(data)).into_response()
}

pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    let body = ErrorBody {
        error: message.into(),
    };

    (status, Json(body)).into_response()
}

pub fn validation_error(violations: &[Violation]) -> Response {
    let summary = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    let body = ValidationBody {
        message: format!("Event validation failed: {}", summary),
        violations,
    };

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
