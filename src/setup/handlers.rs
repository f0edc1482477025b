use super::protocol::{HealthResponse, SetupRequest, SetupResponse};
use crate::error::ApiError;
use crate::extract::{JsonBody, text_field};
use crate::store::document::DocumentStore;
use crate::store::ids::new_id;

use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub async fn handle_setup(
    Extension(store): Extension<Arc<DocumentStore>>,
    JsonBody(req): JsonBody<SetupRequest>,
) -> Result<Json<SetupResponse>, ApiError> {
    let (Some(display), Some(panel_token), Some(phone_token)) = (
        text_field(req.display),
        text_field(req.panel_token),
        text_field(req.phone_token),
    ) else {
        return Err(ApiError::required("display/panelToken/phoneToken"));
    };

    let user = store
        .update(|document| {
            let user = document.register_user(display, panel_token, phone_token, new_id);
            Ok::<_, ApiError>(user)
        })
        .await?;

    tracing::info!("Registered user {}", user.id);
    Ok(Json(SetupResponse { ok: true, user }))
}
