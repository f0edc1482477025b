//! Panel API Protocol
//!
//! Endpoints and DTOs of the operator-facing inventory surface. Every endpoint is
//! authenticated with the `panel_token` query parameter.

use crate::store::types::InventoryItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- API Endpoints ---

pub const ENDPOINT_ME: &str = "/api/panel/me";
pub const ENDPOINT_INVENTORY: &str = "/api/panel/inventory";
pub const ENDPOINT_INVENTORY_ADD: &str = "/api/panel/inventory/add";
pub const ENDPOINT_QUICK: &str = "/api/panel/quick";

// --- Data Transfer Objects ---

/// Public part of a user; tokens are never echoed back by the panel.
#[derive(Debug, Serialize, Deserialize)]
pub struct PanelIdentity {
    pub id: String,
    pub display: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: PanelIdentity,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub items: Vec<InventoryItem>,
}

/// Add-item form. Fields stay untyped until the token is resolved; `qty` is
/// coerced by `inventory::parse_qty`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub label: Option<Value>,
    pub qty: Option<Value>,
    pub category: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuickAddRequest {
    pub what: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemCreatedResponse {
    pub ok: bool,
    pub item: InventoryItem,
}
