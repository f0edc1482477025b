use super::inventory::{build_item, quick_item};
use super::protocol::{
    AddItemRequest, InventoryResponse, ItemCreatedResponse, MeResponse, PanelIdentity,
    QuickAddRequest,
};
use crate::auth::{PanelToken, TokenKind, resolve_user};
use crate::error::ApiError;
use crate::extract::{JsonBody, text_field};
use crate::store::document::DocumentStore;
use crate::store::ids::new_id;

use axum::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

pub async fn handle_me(
    Extension(store): Extension<Arc<DocumentStore>>,
    PanelToken(token): PanelToken,
) -> Result<Json<MeResponse>, ApiError> {
    store
        .read(|document| {
            let user = resolve_user(document, TokenKind::Panel, token.as_deref())?;
            Ok(Json(MeResponse {
                user: PanelIdentity {
                    id: user.id.clone(),
                    display: user.display.clone(),
                },
            }))
        })
        .await
}

pub async fn handle_list_inventory(
    Extension(store): Extension<Arc<DocumentStore>>,
    PanelToken(token): PanelToken,
) -> Result<Json<InventoryResponse>, ApiError> {
    store
        .read(|document| {
            let user = resolve_user(document, TokenKind::Panel, token.as_deref())?;
            Ok(Json(InventoryResponse {
                items: document.inventory_of(&user.id).to_vec(),
            }))
        })
        .await
}

pub async fn handle_add_item(
    Extension(store): Extension<Arc<DocumentStore>>,
    PanelToken(token): PanelToken,
    body: Result<JsonBody<AddItemRequest>, ApiError>,
) -> Result<Json<ItemCreatedResponse>, ApiError> {
    store
        .update(|document| {
            let user_id = resolve_user(document, TokenKind::Panel, token.as_deref())?
                .id
                .clone();
            let JsonBody(req) = body?;
            let item = build_item(
                new_id(),
                text_field(req.label),
                req.qty.as_ref(),
                text_field(req.category),
            )?;

            document.push_item(&user_id, item.clone());
            tracing::info!("Added inventory item {} for user {}", item.id, user_id);

            Ok(Json(ItemCreatedResponse { ok: true, item }))
        })
        .await
}

pub async fn handle_quick_add(
    Extension(store): Extension<Arc<DocumentStore>>,
    PanelToken(token): PanelToken,
    body: Result<JsonBody<QuickAddRequest>, ApiError>,
) -> Result<Json<ItemCreatedResponse>, ApiError> {
    store
        .update(|document| {
            let user_id = resolve_user(document, TokenKind::Panel, token.as_deref())?
                .id
                .clone();
            let JsonBody(req) = body?;
            let item = quick_item(new_id(), req.what.as_ref().and_then(Value::as_str))?;

            document.push_item(&user_id, item.clone());
            tracing::info!("Quick-added {} for user {}", item.label, user_id);

            Ok(Json(ItemCreatedResponse { ok: true, item }))
        })
        .await
}
