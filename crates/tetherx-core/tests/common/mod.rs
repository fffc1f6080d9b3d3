//! Shared test doubles and helpers for the integration suites.
//!
//! Each suite uses a subset of these.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tetherx_core::{
    AttachContext, ContextRef, Handle, HandleRef, ObjectHandle, OpaqueObject, RequestRouter,
    Result, TetherObject, TetherXError,
};
use tetherx_core_types::request::{MIME_APPLICATION_JSON, STATUS_OK};
use tetherx_core_types::{AttachState, TetherRequest, TetherResponse};
use uuid::Uuid;

/// Shared, ordered log of propagation side effects
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn new_event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn log_entries(log: &EventLog) -> Vec<String> {
    log.lock().expect("Event log should not be poisoned").clone()
}

/// Mint a unique path segment so parallel tests never collide in logs
pub fn unique_path(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7())
}

/// Root context that records every `attach_graph` call it receives
pub struct RecordingContext {
    name: String,
    log: EventLog,
    attach_calls: AtomicUsize,
    attached: AtomicBool,
}

impl RecordingContext {
    pub fn new(name: &str, log: EventLog) -> Self {
        Self {
            name: name.to_string(),
            log,
            attach_calls: AtomicUsize::new(0),
            attached: AtomicBool::new(false),
        }
    }

    /// A recording context that already reports attached
    pub fn attached(name: &str, log: EventLog) -> Self {
        let ctx = Self::new(name, log);
        ctx.attached.store(true, Ordering::Release);
        ctx
    }

    pub fn attach_calls(&self) -> usize {
        self.attach_calls.load(Ordering::Acquire)
    }
}

impl AttachContext for RecordingContext {
    fn absolute_path(&self) -> &str {
        ""
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    fn attach_graph(&self) -> Result<()> {
        self.attach_calls.fetch_add(1, Ordering::AcqRel);
        self.log
            .lock()
            .expect("Event log should not be poisoned")
            .push(format!("ctx:{}", self.name));
        self.attached.store(true, Ordering::Release);
        Ok(())
    }
}

/// Context that accepts attachment but never reports attached.
///
/// Stands in for a chain whose root has not committed yet.
#[derive(Debug, Default)]
pub struct NeverAttachedContext;

impl AttachContext for NeverAttachedContext {
    fn absolute_path(&self) -> &str {
        ""
    }

    fn is_attached(&self) -> bool {
        false
    }

    fn attach_graph(&self) -> Result<()> {
        Ok(())
    }
}

/// Context whose attachment always fails
pub struct FailingContext {
    pub message: String,
}

impl FailingContext {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl AttachContext for FailingContext {
    fn absolute_path(&self) -> &str {
        ""
    }

    fn is_attached(&self) -> bool {
        false
    }

    fn attach_graph(&self) -> Result<()> {
        Err(TetherXError::AttachFailed {
            absolute_path: String::new(),
            message: self.message.clone(),
        })
    }
}

/// Handle double that records each `attach_graph` call by name.
///
/// Used where a test must observe exactly-once propagation or the order
/// in which bound handles are driven.
pub struct ProbeHandle {
    name: String,
    absolute_path: String,
    log: EventLog,
    attach_calls: AtomicUsize,
    attached: AtomicBool,
    value: Arc<OpaqueObject>,
}

impl ProbeHandle {
    pub fn new(name: &str, log: EventLog) -> Self {
        Self {
            name: name.to_string(),
            absolute_path: format!("/{name}"),
            log,
            attach_calls: AtomicUsize::new(0),
            attached: AtomicBool::new(false),
            value: Arc::new(OpaqueObject),
        }
    }

    pub fn attach_calls(&self) -> usize {
        self.attach_calls.load(Ordering::Acquire)
    }
}

impl AttachContext for ProbeHandle {
    fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    fn attach_graph(&self) -> Result<()> {
        self.attach_calls.fetch_add(1, Ordering::AcqRel);
        self.log
            .lock()
            .expect("Event log should not be poisoned")
            .push(self.name.clone());
        self.attached.store(true, Ordering::Release);
        Ok(())
    }
}

#[async_trait]
impl Handle for ProbeHandle {
    fn path(&self) -> &str {
        &self.name
    }

    fn attach_state(&self) -> AttachState {
        if self.is_attached() {
            AttachState::Attached
        } else {
            AttachState::Detached
        }
    }

    fn bind(&self, handle: HandleRef) -> Result<()> {
        if self.is_attached() {
            handle.attach_graph()
        } else {
            Ok(())
        }
    }

    async fn resolve(&self) -> Arc<dyn TetherObject> {
        Arc::clone(&self.value) as Arc<dyn TetherObject>
    }
}

#[async_trait]
impl RequestRouter for ProbeHandle {
    async fn request(&self, request: &TetherRequest) -> Result<TetherResponse> {
        Ok(TetherResponse::not_found(&request.url))
    }
}

/// Handle double whose attachment always fails
pub struct FailingHandle {
    absolute_path: String,
    message: String,
    value: Arc<OpaqueObject>,
}

impl FailingHandle {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            absolute_path: format!("/{name}"),
            message: message.to_string(),
            value: Arc::new(OpaqueObject),
        }
    }
}

impl AttachContext for FailingHandle {
    fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    fn is_attached(&self) -> bool {
        false
    }

    fn attach_graph(&self) -> Result<()> {
        Err(TetherXError::AttachFailed {
            absolute_path: self.absolute_path.clone(),
            message: self.message.clone(),
        })
    }
}

#[async_trait]
impl Handle for FailingHandle {
    fn path(&self) -> &str {
        &self.absolute_path
    }

    fn attach_state(&self) -> AttachState {
        AttachState::Detached
    }

    fn bind(&self, _handle: HandleRef) -> Result<()> {
        Ok(())
    }

    async fn resolve(&self) -> Arc<dyn TetherObject> {
        Arc::clone(&self.value) as Arc<dyn TetherObject>
    }
}

#[async_trait]
impl RequestRouter for FailingHandle {
    async fn request(&self, request: &TetherRequest) -> Result<TetherResponse> {
        Ok(TetherResponse::not_found(&request.url))
    }
}

/// Value exposing a router capability that echoes the request URL
#[derive(Debug, Default)]
pub struct EchoRouterObject;

#[async_trait]
impl RequestRouter for EchoRouterObject {
    async fn request(&self, request: &TetherRequest) -> Result<TetherResponse> {
        Ok(TetherResponse::new(
            STATUS_OK,
            MIME_APPLICATION_JSON,
            serde_json::json!({ "echoed_url": request.url }),
        ))
    }
}

impl TetherObject for EchoRouterObject {
    fn request_router(&self) -> Option<&dyn RequestRouter> {
        Some(self)
    }
}

/// Value whose router capability always fails
pub struct FailingRouterObject {
    pub message: String,
}

impl FailingRouterObject {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl RequestRouter for FailingRouterObject {
    async fn request(&self, request: &TetherRequest) -> Result<TetherResponse> {
        Err(TetherXError::RouteFailed {
            url: request.url.clone(),
            message: self.message.clone(),
        })
    }
}

impl TetherObject for FailingRouterObject {
    fn request_router(&self) -> Option<&dyn RequestRouter> {
        Some(self)
    }
}

/// Create an opaque-valued handle under the given context
pub fn handle_under(context: ContextRef, path: &str) -> Arc<ObjectHandle<OpaqueObject>> {
    Arc::new(ObjectHandle::new(Arc::new(OpaqueObject), path, context))
}
