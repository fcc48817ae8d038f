//! Hosted-service gateway.
//!
//! The admin panel owns no storage of its own: user records and chat
//! queries live in a hosted realtime database, and the user lifecycle
//! (delete, profile updates, role claims) belongs to the hosted auth
//! provider. Both are reached with plain request/response REST calls; this
//! module treats them as opaque stores and never caches their data.

mod auth;
mod db;
mod gateway;
pub mod types;

pub use auth::{AccountUpdate, AuthAdmin};
pub use db::RealtimeDb;
pub use gateway::AdminGateway;

use thiserror::Error;

/// Errors from hosted-service calls.
#[derive(Debug, Error)]
pub enum FirebaseError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// No auth-provider credential was configured.
    #[error("auth provider not configured")]
    AuthNotConfigured,
}
