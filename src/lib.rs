//! skeleton-vdom - Skeleton placeholders for design scene graphs
//!
//! Turns a selected frame of a design document into a low-fidelity
//! "skeleton": text becomes stacked gray bars approximating its lines,
//! shapes become gray rounded rectangles with the same bounds.
//!
//! ## Core Concepts
//!
//! **Host boundary**: the document and fonts belong to the design platform.
//! The engine reaches them only through the [`Document`] and [`FontLoader`]
//! traits; [`SceneGraph`] and [`FontBook`] are in-memory implementations.
//!
//! **Bottom-up rewriting**: convertible nodes are collected depth-first, then
//! replaced last to first, so earlier insertions never shift nodes still
//! waiting their turn.
//!
//! ## Modules
//! - `node`: Scene node types and the in-memory `SceneGraph`
//! - `host`: Platform traits (`Document`, `FontLoader`)
//! - `transform`: Classification, text metrics, flattening, rewriting, `Skeletonizer`
//! - `plugin`: UI message handling and persisted settings (`Session`)
//! - `config`: Constants, `CornerRadius`, `SkeletonStyle`
//! - `error`: Error types
//!
//! ## Usage
//!
//! ```ignore
//! use skeleton_vdom::prelude::*;
//!
//! let mut doc = SceneGraph::new();
//! let card = doc.add_root(SceneNode::new(NodeKind::Frame, "Card").sized(200.0, 100.0));
//! doc.add(card, SceneNode::new(NodeKind::Rectangle, "Box").sized(50.0, 50.0));
//! doc.set_selection(vec![card]);
//!
//! let fonts = FontBook::with_fonts([FontName::regular("Inter")]);
//! let report = Skeletonizer::new().run(&mut doc, &fonts, CornerRadius::default()).await;
//! assert_eq!(report.produced.len(), 1);
//! ```

// =============================================================================
// Core modules
// =============================================================================

#[macro_use]
mod macros;

/// Node identity
pub mod id;

/// Node types: SceneNode, NodeKind, TextProps, SceneGraph
pub mod node;

/// Platform boundary traits
pub mod host;

/// Constants and user configuration
pub mod config;

/// Skeleton transformation engine
pub mod transform;

/// UI request handling and settings
pub mod plugin;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{
    Children, FontName, LineHeight, Mixed, NodeKind, Paint, Rgb, SceneGraph, SceneNode, TextProps,
    TextRun,
};

// Identity
pub use id::NodeId;

// Host boundary
pub use host::{Document, FontBook, FontLoader, HostError, HostResult, NodeProperty};

// Configuration
pub use config::{CornerRadius, SkeletonStyle};

// Transform
pub use transform::{Notice, NoticeLevel, RunReport, Skeletonizer};

// Plugin
pub use plugin::{
    MemorySettings, MemoryUi, Session, SettingsStore, UiHost, UiRequest, UiResponse,
};

// Error types
pub use error::{SkeletonError, SkeletonResult, SkipReason};
