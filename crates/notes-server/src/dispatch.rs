//! The dispatcher: a generic interpreter over the contract table.
//!
//! One request moves through received -> matched -> validated -> executing ->
//! responding, with terminal failures at each stage: no matching contract is
//! a 404, invalid path parameters or body are a 400 before any handler runs,
//! and a failed operation is a 500 carrying the contract's error body. The
//! handler executes inside a tracing span named for the operation set.

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::get,
};
use http::{Method, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{Instrument, field};

use notes_core::Contract;

use crate::error::ApiError;
use crate::handlers::{self, OperationInput};
use crate::state::AppState;

/// Largest accepted request body in bytes.
const BODY_LIMIT: usize = 64 * 1024;

/// Build the complete router: health probe plus the contract dispatcher.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback(dispatch)
        .with_state(state)
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    /// Service status.
    status: String,
}

/// GET /health - liveness probe, outside the contract table.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Interpret one request against the contract table.
async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path().to_string();

    match run(&state, &parts.method, &path, body).await {
        Ok((status, value)) => (status, Json(value)).into_response(),
        Err(err) => {
            log_failure(&err, &parts.method, &path);
            err.into_response()
        }
    }
}

async fn run(
    state: &AppState,
    method: &Method,
    path: &str,
    body: Body,
) -> Result<(StatusCode, Value), ApiError> {
    let matched = state
        .contracts()
        .lookup(method, path)
        .ok_or_else(|| ApiError::NoContract {
            method: method.clone(),
            path: path.to_string(),
        })?;
    let contract = matched.contract;

    // Input validation happens before the handler is reachable.
    let params = validate_path_params(contract, &matched.params)?;
    let body_value = validate_body(contract, body).await?;

    // One span per handler invocation; span names must be static, so the
    // operation is carried as a field.
    let span = tracing::info_span!(
        "operation",
        operation = contract.name,
        note.id = field::Empty,
        error = field::Empty,
    );
    if let Some(id) = params.get("id").and_then(Value::as_i64) {
        span.record("note.id", id);
    }

    let input = OperationInput {
        body: body_value,
        params,
    };
    let result = handlers::run(contract.name, state.store(), input)
        .instrument(span.clone())
        .await;

    match result {
        Ok(value) => {
            let normalized = contract
                .response_body
                .validate(&value)
                .map_err(ApiError::ResponseShape)?;
            Ok((contract.response_status, normalized))
        }
        Err(op) => {
            span.record("error", true);
            Err(ApiError::Operation(op))
        }
    }
}

/// Validate extracted path parameters against the contract's path schema.
fn validate_path_params(
    contract: &Contract,
    raw: &[(&'static str, String)],
) -> Result<Map<String, Value>, ApiError> {
    let Some(schema) = &contract.request_path else {
        return Ok(Map::new());
    };

    let mut object = Map::with_capacity(raw.len());
    for (name, value) in raw {
        object.insert((*name).to_string(), Value::String(value.clone()));
    }

    let validated = schema
        .validate(&Value::Object(object))
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // Object descriptors normalize to objects.
    match validated {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Read and validate the JSON request body against the contract's schema.
async fn validate_body(contract: &Contract, body: Body) -> Result<Option<Value>, ApiError> {
    let Some(schema) = &contract.request_body else {
        return Ok(None);
    };

    let bytes = to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to read request body: {e}")))?;
    let raw: Value = serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;

    let validated = schema
        .validate(&raw)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Some(validated))
}

/// Log every failure regardless of the client-visible response.
fn log_failure(err: &ApiError, method: &Method, path: &str) {
    match err {
        ApiError::NoContract { .. } => {
            tracing::debug!(%method, path, "No contract matched");
        }
        ApiError::BadRequest(reason) => {
            tracing::warn!(%method, path, %reason, "Request rejected before dispatch");
        }
        ApiError::Operation(op) => {
            tracing::error!(%method, path, context = %op.message, details = %op.details, "Operation failed");
        }
        ApiError::ResponseShape(e) => {
            tracing::error!(%method, path, error = %e, "Handler output did not match declared schema");
        }
    }
}
