//! Phone API Protocol
//!
//! Endpoints and DTOs of the end-user phone simulation. Every endpoint is
//! authenticated with the `phone_token` query parameter.

use crate::store::types::{Contact, Message};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- API Endpoints ---

pub const ENDPOINT_HOME: &str = "/api/phone/home";
pub const ENDPOINT_CONTACTS: &str = "/api/phone/contacts";
pub const ENDPOINT_CONTACTS_ADD: &str = "/api/phone/contacts/add";
pub const ENDPOINT_MESSAGES: &str = "/api/phone/messages";
pub const ENDPOINT_MESSAGES_SEND: &str = "/api/phone/messages/send";

// --- Data Transfer Objects ---

/// An application tile on the phone home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhoneIdentity {
    pub display: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub user: PhoneIdentity,
    pub apps: Vec<App>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AddContactRequest {
    pub name: Option<Value>,
    pub number: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactCreatedResponse {
    pub ok: bool,
    pub contact: Contact,
}

/// Newest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub to_number: Option<Value>,
    pub from_number: Option<Value>,
    pub body: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageSentResponse {
    pub ok: bool,
    pub message: Message,
}
