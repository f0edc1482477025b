//! Phone Module
//!
//! The end-user phone simulation: home screen, contact list and message log of
//! the user owning the `phone_token`.
//!
//! Messages are a per-account log, not a delivery system: a sent message is filed
//! under the sender only, whatever `toNumber` says.

pub mod handlers;
pub mod messaging;
pub mod protocol;
