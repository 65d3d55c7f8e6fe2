//! Worklist collection.

use tracing::warn;

use crate::host::Document;
use crate::id::NodeId;

use super::is_convertible;

/// Collect convertible nodes under `root` (inclusive) in depth-first pre-order.
///
/// Every node's children are visited whether or not the node itself is
/// convertible. Children that no longer resolve are logged and skipped.
pub fn collect<D: Document>(doc: &D, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_into(doc, root, &mut out);
    out
}

fn collect_into<D: Document>(doc: &D, id: NodeId, out: &mut Vec<NodeId>) {
    let Some(node) = doc.node(id) else {
        warn!(node = %id, "collect: dangling child, skipping");
        return;
    };
    if is_convertible(Some(node)) {
        out.push(id);
    }
    for &child in &node.children {
        collect_into(doc, child, out);
    }
}
