//! Role-Play Companion Backend Library
//!
//! This library crate defines the modules of the companion backend. It serves as
//! the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! Every request loads the single store document, resolves the acting user by
//! token, reads or mutates one collection and, for mutations, saves the whole
//! document back.
//!
//! - **`store`**: The persisted JSON document (users, inventory, contacts,
//!   messages), its load/save primitives and id/timestamp generation.
//! - **`setup`**: User registration and the health probe.
//! - **`panel`**: The operator-facing inventory surface (`panel_token`).
//! - **`phone`**: The end-user phone simulation: home screen, contacts and
//!   messages (`phone_token`).
//! - **`server`**: Router assembly, static assets and single-page-app routes.
//! - **`auth`**, **`extract`**, **`error`**, **`config`**: token resolution, body
//!   parsing, the error taxonomy and process configuration.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod panel;
pub mod phone;
pub mod server;
pub mod setup;
pub mod store;

#[cfg(test)]
mod test_support;
