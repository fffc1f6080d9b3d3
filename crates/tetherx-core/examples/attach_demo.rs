//! Handle Attachment Demonstration
//!
//! This example demonstrates the handle attachment and binding protocol.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Detached handles and deferred binding
//! 2. One-call transitive attachment of a whole binding graph
//! 3. Cycle-safe propagation
//! 4. Eager binding once a handle is attached
//! 5. Request routing with and without a router capability

use std::sync::Arc;

use async_trait::async_trait;
use tetherx_core::{
    AttachContext, ContextRef, DocumentRoot, Handle, ObjectHandle, OpaqueObject, RequestRouter,
    Result, TetherObject,
};
use tetherx_core_types::request::{MIME_APPLICATION_JSON, STATUS_OK};
use tetherx_core_types::{AttachState, TetherRequest, TetherResponse};

/// A value that answers addressed requests itself
struct CardCatalog;

#[async_trait]
impl RequestRouter for CardCatalog {
    async fn request(&self, request: &TetherRequest) -> Result<TetherResponse> {
        Ok(TetherResponse::new(
            STATUS_OK,
            MIME_APPLICATION_JSON,
            serde_json::json!({ "card": request.url, "title": "Ship the release" }),
        ))
    }
}

impl TetherObject for CardCatalog {
    fn request_router(&self) -> Option<&dyn RequestRouter> {
        Some(self)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== TetherX Attach Demo ===\n");

    // ===== Part 1: Deferred Binding =====
    println!("## Part 1: Deferred Binding\n");

    let root = Arc::new(DocumentRoot::new());
    println!("Created a detached document root");

    let board = Arc::new(ObjectHandle::new(
        Arc::new(OpaqueObject),
        "board",
        root.clone() as ContextRef,
    ));
    let card = Arc::new(ObjectHandle::new(
        Arc::new(CardCatalog),
        "card-1",
        root.clone() as ContextRef,
    ));
    println!(
        "✓ Created handles {} and {}",
        board.absolute_path(),
        card.absolute_path()
    );

    board.bind(card.clone())?;
    assert_eq!(card.attach_state(), AttachState::Detached);
    println!("✓ Bound card to board; card stays detached for now\n");

    // ===== Part 2: One-Call Transitive Attachment =====
    println!("## Part 2: Transitive Attachment\n");

    board.attach_graph()?;
    assert_eq!(board.attach_state(), AttachState::Attached);
    assert_eq!(card.attach_state(), AttachState::Attached);
    assert!(root.is_attached());
    println!("✓ Attaching the board attached the card and the root in one call\n");

    // ===== Part 3: Cycles Are Safe =====
    println!("## Part 3: Cycle Safety\n");

    let left = Arc::new(ObjectHandle::new(
        Arc::new(OpaqueObject),
        "left",
        Arc::new(DocumentRoot::new()) as ContextRef,
    ));
    let right = Arc::new(ObjectHandle::new(
        Arc::new(OpaqueObject),
        "right",
        Arc::new(DocumentRoot::new()) as ContextRef,
    ));
    left.bind(right.clone())?;
    right.bind(left.clone())?;
    left.attach_graph()?;
    assert_eq!(left.attach_state(), AttachState::Attached);
    assert_eq!(right.attach_state(), AttachState::Attached);
    println!("✓ A two-handle cycle attached from one entry point and terminated\n");

    // ===== Part 4: Eager Binding After Attachment =====
    println!("## Part 4: Eager Binding\n");

    let late = Arc::new(ObjectHandle::new(
        Arc::new(OpaqueObject),
        "card-2",
        root as ContextRef,
    ));
    board.bind(late.clone())?;
    assert_eq!(late.attach_state(), AttachState::Attached);
    println!("✓ Binding to the already-attached board attached card-2 immediately\n");

    // ===== Part 5: Request Routing =====
    println!("## Part 5: Request Routing\n");

    let routed = card.request(&TetherRequest::new("/card-1")).await?;
    assert_eq!(routed.status, STATUS_OK);
    println!("✓ Router-backed value answered: {}", routed.value);

    let fallback = board.request(&TetherRequest::new("/nowhere")).await?;
    assert_eq!(fallback.status, 404);
    println!("✓ Opaque value fell back to: {}", fallback.value);

    println!("\n=== Demo complete ===");
    Ok(())
}
