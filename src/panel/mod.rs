//! Panel Module
//!
//! The operator-facing surface: identity lookup and inventory management for the
//! user owning the `panel_token`.
//!
//! ## Submodules
//! - **`inventory`**: input coercion and the quick-add table.
//! - **`handlers`**: Axum request handlers.
//! - **`protocol`**: endpoint paths and DTOs.

pub mod handlers;
pub mod inventory;
pub mod protocol;
