//! Skeleton transformation engine.
//!
//! # Module Structure
//!
//! - `classify` - Which nodes are convertible, which selections are valid roots
//! - `metrics` - Font size and line height estimation for text nodes
//! - `flatten` - Instance → Frame detachment
//! - `collect` - Depth-first worklist of convertible nodes
//! - `rewrite` - Placeholder synthesis and in-place replacement
//! - `run` - Selection-level orchestration (`Skeletonizer`)
//!
//! # Data Flow
//!
//! ```text
//! selection ─▶ check_root ─▶ (clone) ─▶ flatten ─▶ collect ─▶ rewrite (reverse order)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use skeleton_vdom::transform::Skeletonizer;
//!
//! let report = Skeletonizer::new().run(&mut doc, &fonts, radius).await;
//! for notice in &report.notices {
//!     println!("{}", notice.message);
//! }
//! ```

mod classify;
mod collect;
mod context;
mod flatten;
mod metrics;
mod rewrite;
mod run;

pub use classify::{check_root, has_min_size, is_convertible};
pub use collect::collect;
pub use context::{Notice, NoticeLevel, RewriteStats, RunContext};
pub use flatten::flatten;
pub use metrics::{TextMetrics, estimate, resolve_line_height};
pub use rewrite::{Placeholder, rewrite, shape_placeholder, text_bars};
pub use run::{RunReport, Skeletonizer};

pub(crate) use rewrite::rewrite_all;
