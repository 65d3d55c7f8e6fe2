//! Per-run state: configuration, user notices and counters.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{CornerRadius, SkeletonStyle};

// =============================================================================
// Notice
// =============================================================================

/// Severity of a user-visible message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

// =============================================================================
// RewriteStats
// =============================================================================

/// Counters collected while rewriting nodes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    /// Text nodes replaced by bars
    pub text_nodes: usize,
    /// Shapes replaced by a single rectangle
    pub shapes: usize,
    /// Text bars created
    pub bars: usize,
    /// Text nodes left in place because no font could be loaded
    pub fonts_missing: usize,
    /// Nodes that hit a structural error
    pub failed: usize,
}

impl RewriteStats {
    /// Placeholders created in total
    pub fn placeholders(&self) -> usize {
        self.shapes + self.bars
    }
}

// =============================================================================
// RunContext
// =============================================================================

/// State owned by one run and discarded at its end
#[derive(Debug, Clone)]
pub struct RunContext {
    pub corner_radius: CornerRadius,
    pub style: SkeletonStyle,
    pub notices: Vec<Notice>,
    pub stats: RewriteStats,
    reported_fonts: FxHashSet<CompactString>,
}

impl RunContext {
    pub fn new(corner_radius: CornerRadius, style: SkeletonStyle) -> Self {
        Self {
            corner_radius,
            style,
            notices: Vec::new(),
            stats: RewriteStats::default(),
            reported_fonts: FxHashSet::default(),
        }
    }

    /// Warn about an unloadable font family, once per family per run.
    ///
    /// Returns `true` if a notice was added.
    pub fn report_missing_font(&mut self, family: &str) -> bool {
        if !self.reported_fonts.insert(CompactString::from(family)) {
            return false;
        }
        self.notices.push(Notice::warning(format!(
            "Font \"{family}\" could not be loaded; text using it was left unchanged"
        )));
        true
    }
}
