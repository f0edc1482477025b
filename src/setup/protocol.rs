//! Setup API Protocol
//!
//! Endpoints and DTOs for registering a user and for liveness checks.

use crate::store::types::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- API Endpoints ---

/// Liveness probe, no authentication.
pub const ENDPOINT_HEALTH: &str = "/health";
/// Self-service registration of a user and its two tokens.
pub const ENDPOINT_SETUP: &str = "/api/setup";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Registration payload. All three fields are required and must be non-empty
/// strings.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRequest {
    pub display: Option<Value>,
    pub panel_token: Option<Value>,
    pub phone_token: Option<Value>,
}

/// Returns the full user record, tokens included: the caller just supplied them.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetupResponse {
    pub ok: bool,
    pub user: User,
}
