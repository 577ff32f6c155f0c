//! Unified error types for the accounts API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Business and persistence errors raised below the HTTP layer
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Not-found error naming the resource and the lookup key that missed
    pub fn not_found(resource: &str, field: &str, value: impl std::fmt::Display) -> Self {
        DomainError::NotFound(format!(
            "{} not found with the given input data {} : '{}'",
            resource, field, value
        ))
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request failed validation; maps field name to message
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(BTreeMap<String, String>),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Filled in by [`attach_api_path`] once the request path is known
    pub api_path: String,
    pub error_code: String,
    pub error_message: String,
    pub error_time: DateTime<Utc>,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            api_path: String::new(),
            error_code: error_code(status),
            error_message: message,
            error_time: Utc::now(),
        }
    }
}

/// `NOT_FOUND`, `BAD_REQUEST`, ...
fn error_code(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(fields) => {
                return (StatusCode::BAD_REQUEST, Json(fields)).into_response();
            }
            AppError::Domain(DomainError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            AppError::Domain(DomainError::AlreadyExists(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = ErrorResponse::new(status, message);
        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

/// Middleware that stamps the request path into error bodies
///
/// `IntoResponse` has no access to the request, so `AppError` leaves its
/// `ErrorResponse` in the response extensions and this layer re-renders it
/// with `apiPath` set.
pub async fn attach_api_path(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorResponse>() {
        Some(mut body) => {
            body.api_path = format!("uri={}", path);
            (response.status(), Json(body)).into_response()
        }
        None => response,
    }
}
