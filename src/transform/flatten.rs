//! Instance flattening
//!
//! Detaches every Instance in a subtree into a plain Frame, so collection and
//! rewriting only ever see primitive node kinds.

use tracing::debug;

use crate::error::SkeletonResult;
use crate::host::Document;
use crate::id::NodeId;
use crate::node::Children;

/// Flatten the subtree at `id` in place, depth-first.
///
/// Returns the id of the subtree root after flattening (a detached instance
/// may come back under a new id). A missing node is a no-op.
pub fn flatten<D: Document>(doc: &mut D, id: NodeId) -> SkeletonResult<NodeId> {
    let Some(node) = doc.node(id) else {
        debug!(node = %id, "flatten: node not found, skipping");
        return Ok(id);
    };

    let root = if node.kind.is_instance() {
        let frame = doc.detach_instance(id)?;
        debug!(instance = %id, frame = %frame, "detached instance");
        frame
    } else {
        id
    };

    // Detaching may restructure children; iterate a snapshot of the result's.
    let children: Children = doc.node(root).map(|n| n.children.clone()).unwrap_or_default();
    for child in children {
        flatten(doc, child)?;
    }
    Ok(root)
}
