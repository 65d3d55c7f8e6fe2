//! Node identity for the scene graph.
//!
//! Ids are opaque handles issued by a [`Document`](crate::host::Document).
//! The in-memory graph issues them monotonically and never reuses one, so
//! an id that was removed keeps failing lookups instead of aliasing a newer
//! node.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// NodeId
// =============================================================================

/// Handle to a node in a scene graph
///
/// # Memory Layout
///
/// - 8 bytes (u64)
/// - Copy, no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Create a NodeId from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// The id following this one
    #[inline]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(#{:x})", self.0)
    }
}
