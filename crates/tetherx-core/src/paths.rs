use crate::context::AttachContext;

/// Compose a handle's absolute path from its path segment and route context
///
/// An empty segment addresses the context itself, yielding the context's
/// own absolute path. Otherwise the segment is appended below the context,
/// with any leading `/` on the segment dropped first, so callers may pass
/// either `"leaf"` or `"/leaf"`. The document root has absolute path `""`,
/// so first-level handles compose to `"/name"`.
///
/// This runs once, at handle construction; the result is stored for the
/// handle's lifetime and never recomputed.
///
/// # Arguments
/// * `path` - Path segment relative to the context
/// * `route_context` - Parent context supplying the prefix
///
/// # Returns
/// The absolute path from the document root
pub fn compose_context_path(path: &str, route_context: &dyn AttachContext) -> String {
    let segment = path.trim_start_matches('/');
    let parent = route_context.absolute_path();
    if segment.is_empty() {
        parent.to_string()
    } else {
        format!("{parent}/{segment}")
    }
}
