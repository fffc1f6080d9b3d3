//! TetherX Core - Handle attachment and binding protocol
//!
//! This crate provides the in-memory handle protocol for a collaboratively
//! edited document runtime, including:
//! - Handle entities with immutable paths and lazily-resolved values
//! - The monotonic attachment state machine (Detached -> Attaching -> Attached)
//! - Deferred binding with transitive, exactly-once attach propagation
//! - Cycle-safe propagation over arbitrarily shaped binding graphs
//! - Capability-based request routing with a canonical not-found fallback
//!
//! Attachment is the act of committing a handle's subgraph to the shared
//! document so it becomes visible to collaborators. Handles bound while
//! detached are attached transitively when any entry point attaches.

pub mod capability;
pub mod context;
pub mod errors;
pub mod handle;
pub mod logging_facility;
pub mod paths;
pub mod routing;

// Re-export commonly used types
pub use capability::{OpaqueObject, TetherObject};
pub use context::{AttachContext, ContextRef, DocumentRoot};
pub use errors::{Result, TetherXError};
pub use handle::{Handle, HandleRef, ObjectHandle};
pub use paths::compose_context_path;
pub use routing::RequestRouter;
