//! HTTP Surface
//!
//! Assembles the Axum router: JSON API routes, static front-end assets and the
//! single-page-app routes that all resolve to `index.html`.

use crate::panel::handlers::{handle_add_item, handle_list_inventory, handle_me, handle_quick_add};
use crate::panel::protocol::{ENDPOINT_INVENTORY, ENDPOINT_INVENTORY_ADD, ENDPOINT_ME, ENDPOINT_QUICK};
use crate::phone::handlers::{
    handle_add_contact, handle_home, handle_list_contacts, handle_list_messages,
    handle_send_message,
};
use crate::phone::protocol::{
    ENDPOINT_CONTACTS, ENDPOINT_CONTACTS_ADD, ENDPOINT_HOME, ENDPOINT_MESSAGES,
    ENDPOINT_MESSAGES_SEND,
};
use crate::setup::handlers::{handle_health, handle_setup};
use crate::setup::protocol::{ENDPOINT_HEALTH, ENDPOINT_SETUP};
use crate::store::document::DocumentStore;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Maximum accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Client-side routes served with the front-end entry document.
pub const SPA_ROUTES: &[&str] = &["/", "/inventaire", "/telephone", "/actions", "/metier"];

pub fn build_router(store: Arc<DocumentStore>, public_dir: &Path) -> Router {
    let index = public_dir.join("index.html");

    let mut app = Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_SETUP, post(handle_setup))
        // Panel
        .route(ENDPOINT_ME, get(handle_me))
        .route(ENDPOINT_INVENTORY, get(handle_list_inventory))
        .route(ENDPOINT_INVENTORY_ADD, post(handle_add_item))
        .route(ENDPOINT_QUICK, post(handle_quick_add))
        // Phone
        .route(ENDPOINT_HOME, get(handle_home))
        .route(ENDPOINT_CONTACTS, get(handle_list_contacts))
        .route(ENDPOINT_CONTACTS_ADD, post(handle_add_contact))
        .route(ENDPOINT_MESSAGES, get(handle_list_messages))
        .route(ENDPOINT_MESSAGES_SEND, post(handle_send_message));

    for route in SPA_ROUTES {
        app = app.route_service(route, ServeFile::new(&index));
    }

    app.fallback_service(ServeDir::new(public_dir))
        .layer(Extension(store))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
