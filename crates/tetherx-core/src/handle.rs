//! Handle entities and the attachment state machine.
//!
//! A handle is a lightweight, serializable reference to an in-memory value
//! that may or may not yet be part of the shared document. Handles bound to
//! a detached handle are recorded and attached transitively, exactly once,
//! when any entry point of the binding graph attaches. The state machine is
//! monotonic: Detached, then Attaching, then Attached, never reversed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use async_trait::async_trait;
use tetherx_core_types::{AttachState, TetherRequest, TetherResponse};

use crate::capability::TetherObject;
use crate::context::{AttachContext, ContextRef};
use crate::errors::Result;
use crate::paths::compose_context_path;
use crate::routing::RequestRouter;

/// A reference into the shared document graph.
///
/// A handle is polymorphically three things at once: a handle, an
/// attachment context for handles created beneath it, and a request router
/// for its referenced value. The supertraits express the latter two views;
/// all three resolve to the same object.
#[async_trait]
pub trait Handle: AttachContext + RequestRouter {
    /// Path segment of this handle relative to its route context
    fn path(&self) -> &str;

    /// Current attachment state of this handle's own subgraph
    ///
    /// This is local state. The attached-query `is_attached` is delegated
    /// to the route context instead, because final attachment to the
    /// document is defined by the root of the chain.
    fn attach_state(&self) -> AttachState;

    /// Register `handle` to be attached when this handle attaches
    ///
    /// While this handle is detached the binding is deferred: `handle` is
    /// recorded (at most once, by identity) and attached during this
    /// handle's own attach. Once attachment has started or completed,
    /// binding is eager: `handle.attach_graph()` is called immediately.
    ///
    /// # Errors
    ///
    /// Only the eager case can fail, by propagating a collaborator failure
    /// from `attach_graph` unchanged.
    fn bind(&self, handle: HandleRef) -> Result<()>;

    /// Resolve the referenced value
    ///
    /// Resolution is immediate for in-memory handles; implementations that
    /// fetch across peers suspend here.
    async fn resolve(&self) -> Arc<dyn TetherObject>;
}

/// Shared reference to a handle
pub type HandleRef = Arc<dyn Handle>;

/// Two handle references are the same binding iff they share an allocation
fn same_handle(a: &HandleRef, b: &HandleRef) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// Internal lifecycle state.
///
/// Pending bindings exist only inside the Detached variant; leaving
/// Detached consumes them, so a drained binding set cannot be observed.
enum BindState {
    Detached { pending: Vec<HandleRef> },
    Attaching,
    Attached,
}

impl BindState {
    fn as_attach_state(&self) -> AttachState {
        match self {
            BindState::Detached { .. } => AttachState::Detached,
            BindState::Attaching => AttachState::Attaching,
            BindState::Attached => AttachState::Attached,
        }
    }
}

/// In-memory handle to a referenced value.
///
/// Construction fixes the identity fields: the path segment, the route
/// context back-reference, and the absolute path composed from the two.
/// The value is shared with whoever created the handle and is never
/// mutated here; capability calls are forwarded to it.
pub struct ObjectHandle<T> {
    /// The referenced value
    value: Arc<T>,

    /// Path segment relative to the route context (immutable)
    path: String,

    /// Absolute path from the document root, computed once at construction
    absolute_path: String,

    /// Parent context in the attachment chain (non-owning back-reference)
    route_context: ContextRef,

    /// Attachment lifecycle and pending bindings
    state: Mutex<BindState>,
}

impl<T: TetherObject + 'static> ObjectHandle<T> {
    /// Create a detached handle for `value` anchored to `route_context`
    ///
    /// # Arguments
    /// * `value` - The referenced value; capabilities are forwarded to it
    /// * `path` - Path segment relative to `route_context`
    /// * `route_context` - Parent context the handle is anchored to
    ///
    /// # Returns
    /// A detached handle with an empty binding set and its absolute path
    /// fixed for the handle's lifetime
    pub fn new(value: Arc<T>, path: impl Into<String>, route_context: ContextRef) -> Self {
        let path = path.into();
        let absolute_path = compose_context_path(&path, route_context.as_ref());
        Self {
            value,
            path,
            absolute_path,
            route_context,
            state: Mutex::new(BindState::Detached {
                pending: Vec::new(),
            }),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, BindState> {
        // A poisoned lock still holds a valid lifecycle state; recover it
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attach every handle drained from the pending set, then the parent
    fn propagate(&self, pending: Vec<HandleRef>) -> Result<()> {
        for bound in pending {
            bound.attach_graph()?;
        }
        self.route_context.attach_graph()
    }
}

impl<T: TetherObject + 'static> AttachContext for ObjectHandle<T> {
    fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    fn is_attached(&self) -> bool {
        // Delegated upward: the root of the context chain defines whether
        // the document holds this handle
        self.route_context.is_attached()
    }

    fn attach_graph(&self) -> Result<()> {
        let pending = {
            let mut state = self.lock_state();
            match &mut *state {
                BindState::Detached { pending } => {
                    // Drain and advance in one transition; the set is never
                    // observable again
                    let drained = std::mem::take(pending);
                    *state = BindState::Attaching;
                    drained
                }
                // Re-entrant and repeat calls terminate here, which is
                // what makes cyclic binding graphs safe
                BindState::Attaching | BindState::Attached => return Ok(()),
            }
        };

        let start = Instant::now();
        crate::log_op_start!(
            "attach_graph",
            absolute_path = self.absolute_path.as_str(),
            pending_count = pending.len()
        );

        // The lock is not held here: recursing into bound handles or the
        // parent may re-enter this handle
        match self.propagate(pending) {
            Ok(()) => {
                *self.lock_state() = BindState::Attached;
                let duration_ms = start.elapsed().as_millis() as u64;
                crate::log_op_end!(
                    "attach_graph",
                    duration_ms = duration_ms,
                    absolute_path = self.absolute_path.as_str()
                );
                Ok(())
            }
            Err(e) => {
                // No rollback or retry: the handle stays Attaching and the
                // failure reaches the caller unchanged
                let duration_ms = start.elapsed().as_millis() as u64;
                crate::log_op_error!("attach_graph", e.clone(), duration_ms = duration_ms);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl<T: TetherObject + 'static> Handle for ObjectHandle<T> {
    fn path(&self) -> &str {
        &self.path
    }

    fn attach_state(&self) -> AttachState {
        self.lock_state().as_attach_state()
    }

    fn bind(&self, handle: HandleRef) -> Result<()> {
        if self.is_attached() {
            tracing::debug!(
                absolute_path = %self.absolute_path,
                bound_path = %handle.absolute_path(),
                "Handle already attached, forwarding attach to bound handle"
            );
            return handle.attach_graph();
        }

        let deferred = {
            let mut state = self.lock_state();
            match &mut *state {
                BindState::Detached { pending } => {
                    if pending.iter().any(|existing| same_handle(existing, &handle)) {
                        // Set semantics: binding the same handle twice is a no-op
                        return Ok(());
                    }
                    pending.push(Arc::clone(&handle));
                    true
                }
                BindState::Attaching | BindState::Attached => false,
            }
        };

        if deferred {
            tracing::debug!(
                absolute_path = %self.absolute_path,
                bound_path = %handle.absolute_path(),
                "Deferred binding until attach"
            );
            Ok(())
        } else {
            tracing::debug!(
                absolute_path = %self.absolute_path,
                bound_path = %handle.absolute_path(),
                "Attach already underway, forwarding attach to bound handle"
            );
            handle.attach_graph()
        }
    }

    async fn resolve(&self) -> Arc<dyn TetherObject> {
        Arc::clone(&self.value) as Arc<dyn TetherObject>
    }
}

#[async_trait]
impl<T: TetherObject + 'static> RequestRouter for ObjectHandle<T> {
    async fn request(&self, request: &TetherRequest) -> Result<TetherResponse> {
        let start = Instant::now();
        crate::log_op_start!(
            "request",
            absolute_path = self.absolute_path.as_str(),
            url = request.url.as_str()
        );

        let outcome = match self.value.request_router() {
            Some(router) => router.request(request).await,
            None => {
                tracing::debug!(
                    absolute_path = %self.absolute_path,
                    url = %request.url,
                    "No router capability on value, synthesizing not-found"
                );
                Ok(TetherResponse::not_found(&request.url))
            }
        };

        match outcome {
            Ok(response) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                crate::log_op_end!(
                    "request",
                    duration_ms = duration_ms,
                    url = request.url.as_str(),
                    status = u64::from(response.status)
                );
                Ok(response)
            }
            Err(e) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                crate::log_op_error!(
                    "request",
                    e.clone(),
                    duration_ms = duration_ms,
                    url = request.url.as_str()
                );
                Err(e)
            }
        }
    }
}

impl<T> std::fmt::Debug for ObjectHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self
            .state
            .lock()
            .map(|s| s.as_attach_state())
            .unwrap_or(AttachState::Attaching);
        f.debug_struct("ObjectHandle")
            .field("path", &self.path)
            .field("absolute_path", &self.absolute_path)
            .field("attach_state", &state)
            .finish_non_exhaustive()
    }
}
