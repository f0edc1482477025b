use super::messaging::{home_apps, newest_first};
use super::protocol::{
    AddContactRequest, ContactCreatedResponse, ContactsResponse, HomeResponse, MessageSentResponse,
    MessagesResponse, PhoneIdentity, SendMessageRequest,
};
use crate::auth::{PhoneToken, TokenKind, resolve_user};
use crate::error::ApiError;
use crate::extract::{JsonBody, text_field};
use crate::store::document::DocumentStore;
use crate::store::ids::{new_id, now_iso};
use crate::store::types::{Contact, Message};

use axum::{Extension, Json};
use serde_json::Map;
use std::sync::Arc;

pub async fn handle_home(
    Extension(store): Extension<Arc<DocumentStore>>,
    PhoneToken(token): PhoneToken,
) -> Result<Json<HomeResponse>, ApiError> {
    store
        .read(|document| {
            let user = resolve_user(document, TokenKind::Phone, token.as_deref())?;
            Ok(Json(HomeResponse {
                user: PhoneIdentity {
                    display: user.display.clone(),
                },
                apps: home_apps(),
            }))
        })
        .await
}

pub async fn handle_list_contacts(
    Extension(store): Extension<Arc<DocumentStore>>,
    PhoneToken(token): PhoneToken,
) -> Result<Json<ContactsResponse>, ApiError> {
    store
        .read(|document| {
            let user = resolve_user(document, TokenKind::Phone, token.as_deref())?;
            Ok(Json(ContactsResponse {
                contacts: document.contacts_of(&user.id).to_vec(),
            }))
        })
        .await
}

pub async fn handle_add_contact(
    Extension(store): Extension<Arc<DocumentStore>>,
    PhoneToken(token): PhoneToken,
    body: Result<JsonBody<AddContactRequest>, ApiError>,
) -> Result<Json<ContactCreatedResponse>, ApiError> {
    store
        .update(|document| {
            let user_id = resolve_user(document, TokenKind::Phone, token.as_deref())?
                .id
                .clone();
            let JsonBody(req) = body?;
            let (Some(name), Some(number)) = (text_field(req.name), text_field(req.number)) else {
                return Err(ApiError::required("name/number"));
            };

            let contact = Contact {
                id: new_id(),
                name,
                number,
                extra: Map::new(),
            };
            document.push_contact(&user_id, contact.clone());
            tracing::info!("Added contact {} for user {}", contact.id, user_id);

            Ok(Json(ContactCreatedResponse { ok: true, contact }))
        })
        .await
}

pub async fn handle_list_messages(
    Extension(store): Extension<Arc<DocumentStore>>,
    PhoneToken(token): PhoneToken,
) -> Result<Json<MessagesResponse>, ApiError> {
    store
        .read(|document| {
            let user = resolve_user(document, TokenKind::Phone, token.as_deref())?;
            Ok(Json(MessagesResponse {
                messages: newest_first(document.messages_of(&user.id)),
            }))
        })
        .await
}

/// Files the message under the sender's account. `toNumber`/`fromNumber` are
/// free text; there is no delivery to another user's mailbox.
pub async fn handle_send_message(
    Extension(store): Extension<Arc<DocumentStore>>,
    PhoneToken(token): PhoneToken,
    body: Result<JsonBody<SendMessageRequest>, ApiError>,
) -> Result<Json<MessageSentResponse>, ApiError> {
    store
        .update(|document| {
            let user_id = resolve_user(document, TokenKind::Phone, token.as_deref())?
                .id
                .clone();
            let JsonBody(req) = body?;
            let (Some(to_number), Some(from_number), Some(text)) = (
                text_field(req.to_number),
                text_field(req.from_number),
                text_field(req.body),
            ) else {
                return Err(ApiError::required("toNumber/fromNumber/body"));
            };

            let message = Message {
                id: new_id(),
                to_number,
                from_number,
                body: text,
                created_at: Some(now_iso()),
                extra: Map::new(),
            };
            document.push_message(&user_id, message.clone());
            tracing::info!("Stored message {} for user {}", message.id, user_id);

            Ok(Json(MessageSentResponse { ok: true, message }))
        })
        .await
}
