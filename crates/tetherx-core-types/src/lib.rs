//! Core types shared across TetherX facilities
//!
//! This crate provides foundational types used by both the handle
//! protocol and the logging facility:
//!
//! - **Attach state**: the public projection of a handle's attachment lifecycle
//! - **Request model**: TetherRequest, TetherResponse, and well-known status/mime constants
//! - **Schema constants**: Canonical field keys and event names

pub mod request;
pub mod schema;
pub mod state;

pub use request::{TetherRequest, TetherResponse};
pub use state::AttachState;
