//! Prelude module for common imports.
//!
//! ```ignore
//! use skeleton_vdom::prelude::*;
//! ```

// Node types
pub use crate::node::{
    Children, FontName, LineHeight, Mixed, NodeKind, Paint, Rgb, SKELETON_GRAY, SceneGraph,
    SceneNode, TextProps, TextRun,
};

// Identity
pub use crate::id::NodeId;

// Host boundary
pub use crate::host::{Document, FontBook, FontLoader, HostError, HostResult, NodeProperty};

// Configuration
pub use crate::config::{CornerRadius, DEFAULT_CORNER_RADIUS, SkeletonStyle};

// Transform
pub use crate::transform::{
    Notice, NoticeLevel, RewriteStats, RunContext, RunReport, Skeletonizer, TextMetrics,
    collect, estimate, flatten, is_convertible, rewrite,
};

// Plugin
pub use crate::plugin::{
    MemorySettings, MemoryUi, Session, SettingsStore, UiHost, UiRequest, UiResponse,
};

// Error
pub use crate::error::{SkeletonError, SkeletonResult, SkipReason};
