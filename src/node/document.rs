//! In-memory scene graph
//!
//! An arena of [`SceneNode`]s under a single page root, with query and
//! traversal helpers. Implements [`Document`] so the engine can run against
//! it directly.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::host::{Document, HostError, HostResult, NodeProperty};
use crate::id::NodeId;

use super::{NodeKind, SceneNode};

// =============================================================================
// FailingOps
// =============================================================================

/// Platform operations that should fail, for exercising error paths
#[derive(Debug, Clone, Default)]
pub struct FailingOps {
    pub create: bool,
    pub insert: bool,
    pub remove: bool,
    pub clone: bool,
    pub detach: bool,
    /// Property labels (see [`NodeProperty::label`]) whose assignment fails
    pub properties: FxHashSet<&'static str>,
}

// =============================================================================
// SceneGraph
// =============================================================================

/// Arena-backed document
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: FxHashMap<NodeId, SceneNode>,
    page: NodeId,
    selection: Vec<NodeId>,
    next_id: NodeId,
    /// Operations forced to fail
    pub failing: FailingOps,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a graph holding one empty page
    pub fn new() -> Self {
        let page = NodeId::from_raw(1);
        let mut nodes = FxHashMap::default();
        nodes.insert(page, SceneNode::new(NodeKind::Page, "Page 1"));
        Self {
            nodes,
            page,
            selection: Vec::new(),
            next_id: page.next(),
            failing: FailingOps::default(),
        }
    }

    /// The page root
    pub fn page(&self) -> NodeId {
        self.page
    }

    fn alloc(&mut self, mut node: SceneNode) -> NodeId {
        let id = self.next_id;
        self.next_id = id.next();
        node.parent = None;
        self.nodes.insert(id, node);
        id
    }

    /// Append `node` (without its `children`, which must be added separately)
    /// as the last child of `parent`.
    ///
    /// An unknown parent leaves the node detached.
    pub fn add(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        node.children.clear();
        let id = self.alloc(node);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(id);
            if let Some(n) = self.nodes.get_mut(&id) {
                n.parent = Some(parent);
            }
        }
        id
    }

    /// Append `node` directly under the page
    pub fn add_root(&mut self, node: SceneNode) -> NodeId {
        self.add(self.page, node)
    }

    /// Mutable node lookup
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Check if a node exists
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Children of `id` (empty if missing)
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of nodes, including the page
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over `root` and its descendants (depth-first, pre-order)
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants::new(self, root)
    }

    /// First node under the page with this name
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.descendants(self.page)
            .find(|&id| self.nodes.get(&id).is_some_and(|n| n.name == name))
    }

    fn detach_from_parent(&mut self, id: NodeId) {
        let parent = self.nodes.get_mut(&id).and_then(|n| n.parent.take());
        if let Some(p) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            p.children.retain(|c| *c != id);
        }
    }

    fn copy_subtree(&mut self, id: NodeId, parent: Option<NodeId>) -> HostResult<NodeId> {
        let original = self.nodes.get(&id).cloned().ok_or(HostError::NodeNotFound(id))?;
        let children = original.children.clone();
        let copy = self.alloc(SceneNode {
            children: Default::default(),
            ..original
        });
        if let Some(n) = self.nodes.get_mut(&copy) {
            n.parent = parent;
        }
        for child in children {
            let child_copy = self.copy_subtree(child, Some(copy))?;
            if let Some(n) = self.nodes.get_mut(&copy) {
                n.children.push(child_copy);
            }
        }
        Ok(copy)
    }

    fn reject_if(flag: bool, op: &str) -> HostResult<()> {
        if flag {
            Err(HostError::Rejected(format!("{op} failed")))
        } else {
            Ok(())
        }
    }
}

impl Document for SceneGraph {
    fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    fn create_rectangle(&mut self) -> HostResult<NodeId> {
        Self::reject_if(self.failing.create, "createRectangle")?;
        Ok(self.alloc(SceneNode::new(NodeKind::Rectangle, "Rectangle").sized(100.0, 100.0)))
    }

    fn set_property(&mut self, id: NodeId, property: NodeProperty) -> HostResult<()> {
        Self::reject_if(self.failing.properties.contains(property.label()), property.label())?;
        let node = self.nodes.get_mut(&id).ok_or(HostError::NodeNotFound(id))?;
        match property {
            NodeProperty::Name(name) => node.name = name,
            NodeProperty::Position { x, y } => {
                node.x = x;
                node.y = y;
            }
            NodeProperty::Size { width, height } => {
                node.width = width;
                node.height = height;
            }
            NodeProperty::Fills(fills) => node.fills = fills,
            NodeProperty::CornerRadius(r) => node.corner_radius = r,
        }
        Ok(())
    }

    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> HostResult<()> {
        Self::reject_if(self.failing.insert, "insertChild")?;
        if !self.nodes.contains_key(&parent) {
            return Err(HostError::NodeNotFound(parent));
        }
        if !self.nodes.contains_key(&child) {
            return Err(HostError::NodeNotFound(child));
        }
        self.detach_from_parent(child);
        let p = self.nodes.get_mut(&parent).ok_or(HostError::NodeNotFound(parent))?;
        let index = index.min(p.children.len());
        p.children.insert(index, child);
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = Some(parent);
        }
        Ok(())
    }

    fn remove(&mut self, id: NodeId) -> HostResult<()> {
        Self::reject_if(self.failing.remove, "remove")?;
        if !self.nodes.contains_key(&id) {
            return Err(HostError::NodeNotFound(id));
        }
        self.detach_from_parent(id);
        let doomed: Vec<NodeId> = self.descendants(id).collect();
        for d in doomed {
            self.nodes.remove(&d);
        }
        self.selection.retain(|s| *s != id);
        Ok(())
    }

    fn clone_subtree(&mut self, id: NodeId) -> HostResult<NodeId> {
        Self::reject_if(self.failing.clone, "clone")?;
        let parent = self.nodes.get(&id).ok_or(HostError::NodeNotFound(id))?.parent;
        let copy = self.copy_subtree(id, None)?;
        if let Some(parent) = parent {
            let index = self
                .nodes
                .get(&parent)
                .and_then(|p| p.index_of(id))
                .ok_or(HostError::NotAChild { parent, child: id })?;
            self.insert_child(parent, index + 1, copy)?;
        }
        Ok(copy)
    }

    fn detach_instance(&mut self, id: NodeId) -> HostResult<NodeId> {
        Self::reject_if(self.failing.detach, "detachInstance")?;
        let node = self.nodes.get_mut(&id).ok_or(HostError::NodeNotFound(id))?;
        if !node.kind.is_instance() {
            return Err(HostError::Rejected(format!("{id} is not an instance")));
        }
        node.kind = NodeKind::Frame;
        Ok(id)
    }

    fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    fn set_selection(&mut self, ids: Vec<NodeId>) {
        self.selection = ids;
    }
}

// =============================================================================
// Descendants - depth-first traversal
// =============================================================================

/// Depth-first, pre-order iterator over node ids
pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    fn new(graph: &'a SceneGraph, root: NodeId) -> Self {
        let stack = if graph.contains(root) { vec![root] } else { Vec::new() };
        Self { graph, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        self.stack.extend(self.graph.children_of(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SceneGraph, NodeId, NodeId, NodeId) {
        let mut g = SceneGraph::new();
        let frame = g.add_root(SceneNode::new(NodeKind::Frame, "Card").sized(200.0, 100.0));
        let a = g.add(frame, SceneNode::new(NodeKind::Rectangle, "A"));
        let b = g.add(frame, SceneNode::new(NodeKind::Ellipse, "B"));
        (g, frame, a, b)
    }

    #[test]
    fn test_add_links_parent_and_children() {
        let (g, frame, a, b) = sample();
        assert_eq!(g.children_of(frame), &[a, b]);
        assert_eq!(g.parent_of(a), Some(frame));
        assert_eq!(g.parent_of(frame), Some(g.page()));
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn test_descendants_pre_order() {
        let (mut g, frame, a, b) = sample();
        let inner = g.add(a, SceneNode::new(NodeKind::Vector, "inner"));
        let order: Vec<_> = g.descendants(frame).collect();
        assert_eq!(order, vec![frame, a, inner, b]);
        assert_eq!(g.find_by_name("inner"), Some(inner));
        assert_eq!(g.find_by_name("missing"), None);
    }

    #[test]
    fn test_insert_and_remove() {
        let (mut g, frame, a, b) = sample();
        let rect = g.create_rectangle().unwrap();
        assert_eq!(g.parent_of(rect), None);

        g.insert_child(frame, 1, rect).unwrap();
        assert_eq!(g.children_of(frame), &[a, rect, b]);

        g.remove(a).unwrap();
        assert_eq!(g.children_of(frame), &[rect, b]);
        assert!(g.node(a).is_none());
    }

    #[test]
    fn test_insert_past_end_appends() {
        let (mut g, frame, a, b) = sample();
        let rect = g.create_rectangle().unwrap();
        g.insert_child(frame, 99, rect).unwrap();
        assert_eq!(g.children_of(frame), &[a, b, rect]);
    }

    #[test]
    fn test_remove_drops_subtree() {
        let (mut g, frame, a, _) = sample();
        let before = g.node_count();
        g.remove(frame).unwrap();
        assert!(!g.contains(a));
        assert_eq!(g.node_count(), before - 3);
        assert!(g.children_of(g.page()).is_empty());
    }

    #[test]
    fn test_clone_places_copy_after_original() {
        let (mut g, frame, _, _) = sample();
        let copy = g.clone_subtree(frame).unwrap();

        assert_eq!(g.children_of(g.page()), &[frame, copy]);
        assert_eq!(g.node(copy).unwrap().name, "Card");
        let copied_children = g.children_of(copy).to_vec();
        assert_eq!(copied_children.len(), 2);
        for child in copied_children {
            assert_eq!(g.parent_of(child), Some(copy));
            assert!(!g.children_of(frame).contains(&child));
        }
    }

    #[test]
    fn test_detach_instance() {
        let mut g = SceneGraph::new();
        let inst = g.add_root(SceneNode::new(NodeKind::Instance, "Button"));
        let frame = g.detach_instance(inst).unwrap();
        assert!(g.node(frame).unwrap().kind.is_frame());
        assert!(g.detach_instance(frame).is_err());
    }

    #[test]
    fn test_failing_ops() {
        let (mut g, frame, _, _) = sample();
        g.failing.create = true;
        g.failing.properties.insert("name");
        assert!(matches!(g.create_rectangle(), Err(HostError::Rejected(_))));
        assert!(g.set_property(frame, NodeProperty::Name("x".into())).is_err());
        assert!(g.set_property(frame, NodeProperty::CornerRadius(4.0)).is_ok());
    }
}
