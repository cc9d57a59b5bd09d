//! HTTP API for numfind.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/number/{number}?thresholdPercentage=F` | `{"index", "number", "is_approximate"}` |
//! | `GET /api/health` | `{"status": "ok", "source": ...}` |
//!
//! Failures carry `{"error": message}`: 400 for a malformed number or
//! threshold, 404 when nothing matches, 500 when the sequence misbehaves or
//! a handler panics. Every response echoes an `x-request-id` header, taken
//! from the request or generated.

use crate::SharedLocator;
use axum::{
    body::Body,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, request::Parts, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use numfind_core::{InputError, LocateError, LocateRequest, Match, SequenceSource};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the API router.
pub fn router(locator: SharedLocator, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _parts: &Parts| is_local_origin(origin),
        ))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
        ]);

    // Outermost last: the request id is assigned before the trace span
    // opens, and panics are caught inside the span.
    Router::new()
        .route("/api/number/{number}", get(find_number))
        .route("/api/health", get(health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        .layer(cors)
        .with_state(locator)
}

fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id
    )
}

// --- Wire types ---

/// Successful lookup body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocateResponse {
    pub index: u64,
    pub number: i64,
    pub is_approximate: bool,
}

impl From<Match> for LocateResponse {
    fn from(found: Match) -> Self {
        Self {
            index: found.index,
            number: found.value,
            is_approximate: found.is_approximate(),
        }
    }
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

const THRESHOLD_PARAM: &str = "thresholdPercentage";

// --- Handlers ---

/// Query pairs are taken as a list so a repeated `thresholdPercentage`
/// resolves to its first occurrence instead of a deserialization failure.
async fn find_number(
    State(locator): State<SharedLocator>,
    number: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LocateResponse>, ApiError> {
    let Path(number) = number.map_err(|e| ApiError::Rejected {
        status: e.status(),
        message: format!("Invalid number parameter: {}", e.body_text()),
    })?;
    let Query(pairs) = query.map_err(|e| ApiError::Rejected {
        status: e.status(),
        message: format!("Invalid {THRESHOLD_PARAM} parameter: {}", e.body_text()),
    })?;
    let threshold = pairs
        .iter()
        .find(|(key, _)| key == THRESHOLD_PARAM)
        .map(|(_, value)| value.as_str());

    tracing::debug!(%number, ?threshold, "received find request");

    let request = LocateRequest::parse(&number, threshold)?;
    let found = locator.locate_request(&request)?;

    tracing::debug!(
        number = request.target,
        index = found.index,
        value = found.value,
        is_approximate = found.is_approximate(),
        "find completed"
    );
    Ok(Json(found.into()))
}

async fn health(State(locator): State<SharedLocator>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "source": locator.source().describe(),
    }))
}

// --- Errors ---

/// A failed request on its way out as an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    Locate(LocateError),
    /// axum could not extract the path or query.
    Rejected { status: StatusCode, message: String },
}

impl From<LocateError> for ApiError {
    fn from(e: LocateError) -> Self {
        ApiError::Locate(e)
    }
}

impl From<InputError> for ApiError {
    fn from(e: InputError) -> Self {
        ApiError::Locate(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Rejected { status, message } => {
                tracing::debug!(%status, %message, "rejected request");
                (status, message)
            }
            ApiError::Locate(LocateError::InvalidInput(e)) => {
                tracing::debug!(error = %e, "rejected request");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Locate(LocateError::NotFound(reason)) => {
                tracing::debug!(%reason, "no match");
                (StatusCode::NOT_FOUND, reason.to_string())
            }
            ApiError::Locate(e @ LocateError::InvalidSequence { .. }) => {
                tracing::error!(error = %e, "sequence source failed during lookup");
                internal_error()
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_string(),
    )
}

/// Turns a handler panic into the same 500 body as a sequence failure.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "handler panicked");

    let (status, message) = internal_error();
    (status, Json(ErrorResponse { error: message })).into_response()
}

// --- CORS ---

/// `true` for `http(s)://localhost[:port]` and `http(s)://127.0.0.1[:port]`.
fn is_local_origin(origin: &HeaderValue) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    let Some(rest) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };
    let host = match rest.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => rest,
    };
    host == "localhost" || host == "127.0.0.1"
}
