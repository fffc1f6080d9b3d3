//! Attachment lifecycle states
//!
//! The public projection of a handle's place in the attachment lifecycle.
//! Transitions are monotonic: Detached, then Attaching, then Attached,
//! each entered at most once and never reversed.

use serde::{Deserialize, Serialize};

/// Attachment state of a handle's subgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachState {
    /// Not yet part of the shared document graph; bindings accumulate here
    Detached,
    /// Attachment in progress; propagation to bound handles and parent is underway
    Attaching,
    /// Committed to the shared document graph
    Attached,
}

impl AttachState {
    /// Stable string form for logging and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachState::Detached => "detached",
            AttachState::Attaching => "attaching",
            AttachState::Attached => "attached",
        }
    }

    /// Check whether this state still accepts deferred bindings
    pub fn is_detached(&self) -> bool {
        matches!(self, AttachState::Detached)
    }
}

impl std::fmt::Display for AttachState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
