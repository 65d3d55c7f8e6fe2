//! Boundary to the design platform.
//!
//! The engine never owns the scene: it reads and mutates it through
//! [`Document`] and measures text through [`FontLoader`]. Font loading is the
//! only asynchronous call and is awaited one font at a time.
//!
//! [`SceneGraph`](crate::node::SceneGraph) and [`FontBook`] are in-memory
//! implementations of both traits.

mod fonts;

pub use fonts::FontBook;

use std::future::Future;

use compact_str::CompactString;
use thiserror::Error;

use crate::id::NodeId;
use crate::node::{FontName, Paint, SceneNode};

// =============================================================================
// HostError
// =============================================================================

/// Failure reported by a platform call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Platform refused the operation
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("font {0} could not be loaded")]
    FontLoad(FontName),
}

/// Result type alias for platform calls.
pub type HostResult<T> = Result<T, HostError>;

// =============================================================================
// NodeProperty
// =============================================================================

/// A single settable node property
#[derive(Debug, Clone, PartialEq)]
pub enum NodeProperty {
    Name(CompactString),
    Position { x: f64, y: f64 },
    Size { width: f64, height: f64 },
    Fills(Vec<Paint>),
    CornerRadius(f64),
}

impl NodeProperty {
    /// Property name for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Position { .. } => "position",
            Self::Size { .. } => "size",
            Self::Fills(_) => "fills",
            Self::CornerRadius(_) => "cornerRadius",
        }
    }
}

// =============================================================================
// Traits
// =============================================================================

/// Mutable access to a design document.
pub trait Document {
    /// Look up a node
    fn node(&self, id: NodeId) -> Option<&SceneNode>;

    /// Create a detached Rectangle node
    fn create_rectangle(&mut self) -> HostResult<NodeId>;

    /// Assign one property
    fn set_property(&mut self, id: NodeId, property: NodeProperty) -> HostResult<()>;

    /// Insert `child` into `parent` at `index`, detaching it from any previous parent.
    ///
    /// An index past the end appends.
    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> HostResult<()>;

    /// Remove a node and its subtree from the document
    fn remove(&mut self, id: NodeId) -> HostResult<()>;

    /// Deep-copy a subtree; the copy is placed directly after the original.
    fn clone_subtree(&mut self, id: NodeId) -> HostResult<NodeId>;

    /// Replace an Instance with a plain Frame holding the same children.
    ///
    /// Returns the id of the resulting frame.
    fn detach_instance(&mut self, id: NodeId) -> HostResult<NodeId>;

    /// Current selection
    fn selection(&self) -> &[NodeId];

    /// Replace the selection
    fn set_selection(&mut self, ids: Vec<NodeId>);

    /// Parent of `id`, if both exist
    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }
}

/// Makes fonts available for text measurement.
pub trait FontLoader {
    /// Load a font.
    fn load_font(&self, font: &FontName) -> impl Future<Output = HostResult<()>>;
}
