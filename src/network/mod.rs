//! Network Module
//!
//! HTTP server and request handling.
//!
//! ## Architecture
//! - axum router, one task per inbound request
//! - Handlers validate the key, buffer the body and build a `Command`
//! - Commands routed through Engine
//! - Errors leave as `status + plain-text message`

mod handlers;
mod response;
mod server;

pub use server::{router, serve, Server};
