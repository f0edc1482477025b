//! Store Data Types
//!
//! The records persisted in the store document. Field names are serialized in
//! camelCase so the file stays compatible with the front-end's JSON shapes.
//!
//! Reading is tolerant: loosely typed values are coerced (see `coerce`) and keys
//! this service does not know are kept in `extra` and written back untouched.

use super::coerce::{default_qty, stored_optional_text, stored_qty, stored_text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A registered player. `panel_token` and `phone_token` are independent bearer
/// credentials; lookups return the first user in insertion order that matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "stored_text")]
    pub id: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub display: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub panel_token: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub phone_token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, deserialize_with = "stored_text")]
    pub id: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub label: String,
    #[serde(default = "default_qty", deserialize_with = "stored_qty")]
    pub qty: u64,
    #[serde(default, deserialize_with = "stored_text")]
    pub category: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "stored_text")]
    pub id: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub name: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub number: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, deserialize_with = "stored_text")]
    pub id: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub to_number: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub from_number: String,
    #[serde(default, deserialize_with = "stored_text")]
    pub body: String,
    /// ISO-8601 instant assigned by the server. Older documents may lack it.
    #[serde(
        default,
        deserialize_with = "stored_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The aggregate root: every user and every per-user collection.
///
/// The whole document is the unit of persistence; the collection maps are keyed
/// by user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub inventory: BTreeMap<String, Vec<InventoryItem>>,
    #[serde(default)]
    pub contacts: BTreeMap<String, Vec<Contact>>,
    #[serde(default)]
    pub messages: BTreeMap<String, Vec<Message>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn user_by_panel_token(&self, token: &str) -> Option<&User> {
        self.users.iter().find(|user| user.panel_token == token)
    }

    pub fn user_by_phone_token(&self, token: &str) -> Option<&User> {
        self.users.iter().find(|user| user.phone_token == token)
    }

    /// Creates or re-registers a user and returns the stored record.
    ///
    /// A user matching `panel_token` wins over one matching `phone_token`. When
    /// found, all three fields are overwritten; otherwise a new user with a fresh
    /// id is appended. Empty collections are ensured for the user either way.
    pub fn register_user(
        &mut self,
        display: String,
        panel_token: String,
        phone_token: String,
        new_id: impl FnOnce() -> String,
    ) -> User {
        let existing = self
            .users
            .iter()
            .position(|user| user.panel_token == panel_token)
            .or_else(|| {
                self.users
                    .iter()
                    .position(|user| user.phone_token == phone_token)
            });

        let user = match existing {
            Some(index) => {
                let user = &mut self.users[index];
                user.display = display;
                user.panel_token = panel_token;
                user.phone_token = phone_token;
                user.clone()
            }
            None => {
                let user = User {
                    id: new_id(),
                    display,
                    panel_token,
                    phone_token,
                    extra: Map::new(),
                };
                self.users.push(user.clone());
                user
            }
        };

        self.ensure_collections(&user.id);
        user
    }

    pub fn ensure_collections(&mut self, user_id: &str) {
        self.inventory.entry(user_id.to_string()).or_default();
        self.contacts.entry(user_id.to_string()).or_default();
        self.messages.entry(user_id.to_string()).or_default();
    }

    pub fn inventory_of(&self, user_id: &str) -> &[InventoryItem] {
        self.inventory.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contacts_of(&self, user_id: &str) -> &[Contact] {
        self.contacts.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn messages_of(&self, user_id: &str) -> &[Message] {
        self.messages.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_item(&mut self, user_id: &str, item: InventoryItem) {
        self.inventory
            .entry(user_id.to_string())
            .or_default()
            .push(item);
    }

    pub fn push_contact(&mut self, user_id: &str, contact: Contact) {
        self.contacts
            .entry(user_id.to_string())
            .or_default()
            .push(contact);
    }

    pub fn push_message(&mut self, user_id: &str, message: Message) {
        self.messages
            .entry(user_id.to_string())
            .or_default()
            .push(message);
    }
}
