use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::error::Category;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::models::Event;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{json, success};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "events-api",
    };

    success(payload, "Health check successful").into_response()
}

/// `GET /api/events`. An unreadable or malformed source is logged and
/// served as an empty list.
pub async fn list_events(State(state): State<AppState>) -> Response {
    let events = match state.store.load_all().await {
        Ok(events) => events,
        Err(err) => {
            warn!(error = ?err, "Event source unavailable, returning empty list");
            Vec::new()
        }
    };

    info!(count = events.len(), "Returning events");
    json(StatusCode::OK, events)
}

/// `PUT /api/events`. Every failure branch returns before an id is assigned.
pub async fn create_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let mut event = parse_event(&body)?;

    let violations = event.violations();
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    event.id = state.ids.generate()?;
    info!(id = %event.id, "Generated ID");

    Ok(json(StatusCode::CREATED, event))
}

const SHAPE_MISMATCH: &str = "Request body does not match the event shape";

/// Accepts JSON objects only; a derived `Deserialize` would also take arrays
/// positionally. Explicit `null`s are dropped so they read as empty values.
fn parse_event(body: &[u8]) -> Result<Event, AppError> {
    let value: Value = serde_json::from_slice(body).map_err(malformed)?;
    let Value::Object(mut fields) = value else {
        return Err(AppError::MalformedBody(SHAPE_MISMATCH.to_string()));
    };
    drop_nulls(&mut fields);

    match fields.get_mut("venue") {
        None => {}
        Some(Value::Object(venue)) => drop_nulls(venue),
        Some(_) => return Err(AppError::MalformedBody(SHAPE_MISMATCH.to_string())),
    }

    serde_json::from_value(Value::Object(fields)).map_err(malformed)
}

fn drop_nulls(fields: &mut Map<String, Value>) {
    fields.retain(|_, value| !value.is_null());
}

fn malformed(err: serde_json::Error) -> AppError {
    AppError::MalformedBody(describe_body_error(&err).to_string())
}

fn describe_body_error(err: &serde_json::Error) -> &'static str {
    match err.classify() {
        Category::Syntax | Category::Eof => "Request body is not valid JSON",
        Category::Data => SHAPE_MISMATCH,
        Category::Io => "Failed to read request body",
    }
}
