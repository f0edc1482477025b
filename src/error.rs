//! Error Taxonomy
//!
//! Two layers of errors:
//! - **`StoreError`**: raised by the document store when the on-disk JSON cannot be
//!   read, parsed or written.
//! - **`ApiError`**: what a request handler returns. Every variant maps to one HTTP
//!   status and renders as `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Message returned to clients when the store fails. The cause is only logged.
pub const STORAGE_FAILURE_MESSAGE: &str = "erreur de stockage";
pub const MALFORMED_BODY_MESSAGE: &str = "corps JSON invalide";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store document {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode store document: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unresolvable token.
    #[error("{0}")]
    Unauthorized(String),
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),
    #[error("corps trop volumineux")]
    PayloadTooLarge,
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn missing_token(param: &str) -> Self {
        Self::Unauthorized(format!("{} manquant", param))
    }

    pub fn invalid_token(param: &str) -> Self {
        Self::Unauthorized(format!("{} invalide", param))
    }

    /// `fields` is the slash-joined list of required fields, e.g. `"name/number"`.
    pub fn required(fields: &str) -> Self {
        Self::Validation(format!("{} requis", fields))
    }

    pub fn invalid(field: &str) -> Self {
        Self::Validation(format!("{} invalide", field))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::Storage(err) => {
                tracing::error!("Store failure: {}", err);
                STORAGE_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
