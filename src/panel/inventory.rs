//! Inventory Rules
//!
//! Turns loosely-typed panel input into typed `InventoryItem`s. Quantities are
//! parsed explicitly: anything that is not a non-negative whole number falls back to
//! the default quantity, so no NaN-like value can reach the store.

use crate::error::ApiError;
use crate::extract::non_empty;
use crate::store::types::InventoryItem;
use serde_json::{Map, Value};

pub use crate::store::coerce::{DEFAULT_QTY, parse_qty};

pub const DEFAULT_CATEGORY: &str = "Divers";
pub const QUICK_CATEGORY: &str = "Ravitaillement";

/// Fixed choices accepted by the quick-add buttons: `(what, label)`.
pub const QUICK_ITEMS: &[(&str, &str)] = &[("eau", "Eau"), ("sandwich", "Sandwich")];

/// Builds an item from the add-item form fields. `label` is required.
pub fn build_item(
    id: String,
    label: Option<String>,
    qty: Option<&Value>,
    category: Option<String>,
) -> Result<InventoryItem, ApiError> {
    let label = non_empty(label).ok_or_else(|| ApiError::required("label"))?;

    Ok(InventoryItem {
        id,
        label,
        qty: parse_qty(qty),
        category: non_empty(category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        extra: Map::new(),
    })
}

/// Builds the single-unit item for a quick-add choice.
pub fn quick_item(id: String, what: Option<&str>) -> Result<InventoryItem, ApiError> {
    let label = what
        .and_then(|what| {
            QUICK_ITEMS
                .iter()
                .find(|(choice, _)| *choice == what)
                .map(|(_, label)| *label)
        })
        .ok_or_else(|| ApiError::invalid("what"))?;

    Ok(InventoryItem {
        id,
        label: label.to_string(),
        qty: 1,
        category: QUICK_CATEGORY.to_string(),
        extra: Map::new(),
    })
}
