//! Capability queries on referenced values.
//!
//! A handle never inspects the concrete type of the value it references.
//! Values advertise optional capabilities through typed queries over a
//! closed set; the only capability in this core is request routing.

use crate::routing::RequestRouter;

/// A value referenced by a handle.
///
/// The default for every capability query is `None`; a value opts in by
/// returning itself (or a delegate) from the corresponding query.
pub trait TetherObject: Send + Sync {
    /// The value's router capability, if it answers addressed requests
    fn request_router(&self) -> Option<&dyn RequestRouter> {
        None
    }
}

/// A value with no capabilities.
///
/// Requests against a handle to an opaque value get the canonical
/// not-found fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueObject;

impl TetherObject for OpaqueObject {}
