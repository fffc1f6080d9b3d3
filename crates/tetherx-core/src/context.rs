//! Attachment contexts: the parent chain handles are anchored to.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::Result;

/// Parent context in the addressing and attachment chain.
///
/// A handle holds a non-owning reference to its route context, derives its
/// absolute path from it at construction, delegates its attached-query to
/// it, and pushes attachment up through it. Handles implement this trait
/// themselves, so a handle can serve as the route context for handles
/// created beneath it.
pub trait AttachContext: Send + Sync {
    /// Absolute path of this context from the document root
    fn absolute_path(&self) -> &str;

    /// Whether this context is attached to the shared document
    ///
    /// For non-root contexts this reflects the root of the chain, not
    /// local state.
    fn is_attached(&self) -> bool;

    /// Attach this context's graph to the shared document
    ///
    /// Idempotent. Implementations propagate to everything bound to them
    /// and then upward to their own parent.
    ///
    /// # Errors
    ///
    /// Returns `TetherXError::AttachFailed` if a collaborator in the chain
    /// fails; the failure is propagated unchanged.
    fn attach_graph(&self) -> Result<()>;
}

/// Shared reference to an attachment context
pub type ContextRef = Arc<dyn AttachContext>;

/// Terminal context standing in for the document container.
///
/// The root of a context chain: its absolute path is empty, attachment is
/// a flag flip, and there is no parent to propagate to. Real runtimes
/// supply their own root context; this one serves demos, tests, and
/// embedding code that manages the document itself.
#[derive(Debug, Default)]
pub struct DocumentRoot {
    attached: AtomicBool,
}

impl DocumentRoot {
    /// Create a detached root
    pub fn new() -> Self {
        Self {
            attached: AtomicBool::new(false),
        }
    }

    /// Create a root whose document is already attached
    ///
    /// Handles created under an attached root bind eagerly from the start.
    pub fn attached() -> Self {
        Self {
            attached: AtomicBool::new(true),
        }
    }
}

impl AttachContext for DocumentRoot {
    fn absolute_path(&self) -> &str {
        ""
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    fn attach_graph(&self) -> Result<()> {
        self.attached.store(true, Ordering::Release);
        Ok(())
    }
}
