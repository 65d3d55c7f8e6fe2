//! Scene node types.
//!
//! This module provides `SceneNode`, `NodeKind`, text properties and paints,
//! plus [`SceneGraph`], an in-memory arena that implements the
//! [`Document`](crate::host::Document) boundary.
//!
//! # Key Features
//!
//! - Nodes own their ordered `children` list
//! - `parent` is a non-owning back-reference, used only for positional lookup
//! - Text nodes carry run-level font data for mixed-font measurement

mod document;
mod paint;
mod text;

pub use document::{Descendants, FailingOps, SceneGraph};
pub use paint::{Paint, Rgb, SKELETON_GRAY};
pub use text::{FontName, LineHeight, Mixed, TextProps, TextRun};

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::id::NodeId;

/// Type alias for children collection.
pub type Children = SmallVec<[NodeId; 8]>;

// =============================================================================
// NodeKind
// =============================================================================

/// Node type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Page,
    Frame,
    Component,
    Instance,
    Group,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Polygon,
    Star,
    BooleanOperation,
    Line,
    Other,
}

impl NodeKind {
    // Generates is_page, is_frame, ..., is_boolean_operation, is_line, is_other
    impl_kind_predicates!(
        Page, Frame, Component, Instance, Group, Text, Rectangle, Ellipse, Vector,
        Polygon, Star, BooleanOperation, Line, Other,
    );

    /// Frames, Components and Instances: the kinds a user may select to convert.
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Frame | Self::Component | Self::Instance)
    }

    /// Kinds replaced by a single rounded rectangle.
    pub const fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::Rectangle
                | Self::Ellipse
                | Self::Vector
                | Self::Polygon
                | Self::Star
                | Self::BooleanOperation
                | Self::Line
        )
    }

    /// Kind name for logging
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Page => "PAGE",
            Self::Frame => "FRAME",
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
            Self::Group => "GROUP",
            Self::Text => "TEXT",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Vector => "VECTOR",
            Self::Polygon => "POLYGON",
            Self::Star => "STAR",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Line => "LINE",
            Self::Other => "OTHER",
        }
    }
}

// =============================================================================
// SceneNode
// =============================================================================

/// A node in a design document tree
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node type
    pub kind: NodeKind,
    /// Layer name
    pub name: CompactString,
    pub visible: bool,
    pub locked: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Ordered children, owned by this node
    pub children: Children,
    /// Containing node; never owning
    pub parent: Option<NodeId>,
    pub fills: Vec<Paint>,
    pub corner_radius: f64,
    /// Present on Text nodes
    pub text: Option<TextProps>,
}

impl SceneNode {
    /// Create a visible, unlocked node at the origin with zero size
    pub fn new(kind: NodeKind, name: impl Into<CompactString>) -> Self {
        Self {
            kind,
            name: name.into(),
            visible: true,
            locked: false,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            children: SmallVec::new(),
            parent: None,
            fills: Vec::new(),
            corner_radius: 0.0,
            text: None,
        }
    }

    /// Create a Text node with the given properties
    pub fn text(name: impl Into<CompactString>, props: TextProps) -> Self {
        Self::new(NodeKind::Text, name).with_text(props)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Set position
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set size
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mark invisible
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Mark locked
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Attach text properties
    pub fn with_text(mut self, props: TextProps) -> Self {
        self.text = Some(props);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Index of `child` in this node's children
    pub fn index_of(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }

    /// Smaller of width and height
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(NodeKind::BooleanOperation.is_boolean_operation());
        assert!(NodeKind::Text.is_text());
        assert!(!NodeKind::Text.is_frame());
        assert!(NodeKind::Instance.is_container());
        assert!(!NodeKind::Group.is_container());
        assert!(NodeKind::Star.is_shape());
        assert!(!NodeKind::Text.is_shape());
        assert_eq!(NodeKind::BooleanOperation.name(), "BOOLEAN_OPERATION");
    }

    #[test]
    fn test_node_builder() {
        let node = SceneNode::new(NodeKind::Rectangle, "Box")
            .at(10.0, 20.0)
            .sized(30.0, 40.0)
            .hidden()
            .locked();

        assert_eq!(node.name, "Box");
        assert_eq!((node.x, node.y, node.width, node.height), (10.0, 20.0, 30.0, 40.0));
        assert!(!node.visible);
        assert!(node.locked);
        assert!(!node.has_children());
        assert_eq!(node.min_side(), 30.0);
    }
}
