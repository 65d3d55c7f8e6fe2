//! Error types for skeleton-vdom.
//!
//! Every error here is recoverable: the engine aborts only the smallest unit
//! of work (one node, or one selected root) and keeps going.

use std::fmt;

use thiserror::Error;

use crate::host::HostError;
use crate::id::NodeId;

/// Why a selected item was not processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Not a Frame, Component or Instance
    WrongKind,
    /// Locked in the editor
    Locked,
    /// Hidden
    Hidden,
    /// Narrower or shorter than the minimum node size
    TooSmall,
    /// The id no longer resolves to a node
    Missing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WrongKind => "not a frame, component or instance",
            Self::Locked => "locked",
            Self::Hidden => "hidden",
            Self::TooSmall => "too small",
            Self::Missing => "missing",
        })
    }
}

/// Errors that can occur while building skeletons.
#[derive(Debug, Error)]
pub enum SkeletonError {
    /// Selected item cannot be converted
    #[error("selection item {id} skipped: {reason}")]
    InvalidSelectionItem {
        /// Offending node
        id: NodeId,
        /// Why it was skipped
        reason: SkipReason,
    },

    /// No font (including fallbacks) could be loaded for a text node
    #[error("font family \"{family}\" is unavailable")]
    FontUnavailable {
        /// Family of the text node's own font
        family: String,
    },

    /// Missing parent, broken index lookup, or a failed platform call
    #[error("structural error: {0}")]
    Structural(String),

    /// Invalid user configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The plugin UI could not be opened
    #[error("plugin failed to start: {0}")]
    Startup(String),
}

/// Result type alias for skeleton operations.
pub type SkeletonResult<T> = Result<T, SkeletonError>;

impl SkeletonError {
    /// Create a structural error with a message.
    pub fn structural(msg: impl Into<String>) -> Self {
        Self::Structural(msg.into())
    }

    /// Create a configuration error with a message.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<HostError> for SkeletonError {
    fn from(err: HostError) -> Self {
        Self::Structural(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SkeletonError: Send, Sync, std::error::Error);

    #[test]
    fn test_error_display() {
        let err = SkeletonError::FontUnavailable {
            family: "Comic Neue".into(),
        };
        assert_eq!(err.to_string(), "font family \"Comic Neue\" is unavailable");

        let err = SkeletonError::InvalidSelectionItem {
            id: NodeId::from_raw(0x2a),
            reason: SkipReason::Locked,
        };
        assert_eq!(err.to_string(), "selection item #2a skipped: locked");
    }

    #[test]
    fn test_host_error_is_structural() {
        let err: SkeletonError = HostError::NodeNotFound(NodeId::from_raw(7)).into();
        assert!(matches!(err, SkeletonError::Structural(_)));
        assert!(err.to_string().contains("#7"));
    }
}
