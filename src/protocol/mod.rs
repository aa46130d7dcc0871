//! Protocol Module
//!
//! Defines the HTTP surface shared by clients, handlers and peers.
//!
//! ## Endpoints
//! ```text
//! PUT         /put/{key}      body = raw value       client write, replicated
//! GET         /get/{key}                             local read
//! DELETE      /delete/{key}                          client delete, replicated
//! GET         /all                                   JSON snapshot (base64 values)
//! PUT|DELETE  /sync/{key}     body = raw value (PUT) peer replication, never re-fanned
//! ```
//!
//! ### Status Codes
//! - 200: OK
//! - 400: empty key
//! - 404: key not found
//! - 500: body read, encoding or peer-sync failure

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType, SyncCommand};
pub use response::Reply;
pub use codec::{decode_snapshot, encode_snapshot, sync_url};

pub const PUT_PATH: &str = "put";
pub const GET_PATH: &str = "get";
pub const DELETE_PATH: &str = "delete";
pub const ALL_PATH: &str = "all";
pub const SYNC_PATH: &str = "sync";
