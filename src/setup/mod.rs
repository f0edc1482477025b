//! Setup Module
//!
//! Registers users. Calling setup again with a known panel or phone token updates
//! that user in place instead of creating a duplicate, so the operation is
//! idempotent per token.

pub mod handlers;
pub mod protocol;
