//! HTTP error boundary
//!
//! Every handler returns `Result<_, ApiError>`; each domain error variant maps
//! to exactly one status code and a `{"detail": ...}` body. Errors raised by
//! axum itself (unknown path, wrong method, oversized body) are rewritten into
//! the same body by [`json_error_body`].

use axum::{
    body::to_bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use rxdesk::DomainError;

use crate::models::ErrorResponse;

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Persistence(_) | DomainError::Shape(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn detail(&self) -> String {
        match &self.0 {
            DomainError::Validation(message) => message.clone(),
            DomainError::NotFound { entity_type, .. } => format!("{entity_type} not found"),
            DomainError::Persistence(message) => format!("An error occurred: {message}"),
            DomainError::Shape(_) => format!("An error occurred: {}", self.0),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            tracing::warn!(status = %status, "Request rejected: {}", self.0);
        } else {
            tracing::error!(status = %status, "Request failed: {}", self.0);
        }

        (status, Json(ErrorResponse { detail: self.detail() })).into_response()
    }
}

/// Upper bound when reading a plain-text error body to reuse as `detail`
const ERROR_BODY_LIMIT: usize = 64 * 1024;

/// Give every non-JSON 4xx/5xx response a `{"detail": ...}` body
///
/// The original plain-text body becomes the detail; an empty body falls back
/// to the status reason. Status and other headers (e.g. `Allow`) are kept.
pub async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let detail = to_bytes(body, ERROR_BODY_LIMIT)
        .await
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    tracing::warn!(status = %status, "Request rejected: {}", detail);

    let (json_parts, json_body) = Json(ErrorResponse { detail }).into_response().into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(json_parts.headers);

    Response::from_parts(parts, json_body)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
