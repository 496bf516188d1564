//! Auth-service client, wire types, and the session-change hub.

pub mod auth;
pub mod session_changes;
pub mod types;
