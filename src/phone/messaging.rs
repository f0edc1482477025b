use super::protocol::App;
use crate::store::types::Message;

/// Home screen applications, `(id, name)`. Static, not derived from the store.
pub const HOME_APPS: &[(&str, &str)] = &[
    ("messages", "Messages"),
    ("contacts", "Contacts"),
    ("birdy", "Birdy"),
    ("spark", "Spark"),
    ("tiktok", "TikTok partagé"),
];

pub fn home_apps() -> Vec<App> {
    HOME_APPS
        .iter()
        .map(|(id, name)| App {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Sorts by `created_at` descending, comparing the ISO strings lexicographically.
/// Messages without a timestamp compare as `""` and land last; equal timestamps
/// keep the most recently stored message first.
pub fn newest_first(messages: &[Message]) -> Vec<Message> {
    let mut sorted: Vec<Message> = messages.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| {
        let a = a.created_at.as_deref().unwrap_or("");
        let b = b.created_at.as_deref().unwrap_or("");
        b.cmp(a)
    });
    sorted
}
