//! Selection-level orchestration.
//!
//! Each selected Frame, Component or Instance is converted as one unit:
//!
//! - **Nested** (its parent is a Frame): converted in place.
//! - **Top-level**: deep-copied, renamed `"<name> (Skeleton)"`, moved to the
//!   right of the original by its width plus [`DUPLICATE_GAP`], and the copy is
//!   converted. The original is not touched.
//!
//! Roots are processed in selection order and a failing root never stops the
//! others. The document selection is replaced by the produced roots.

use compact_str::CompactString;
use tracing::{debug, error, info, warn};

use crate::config::{CornerRadius, DUPLICATE_GAP, SkeletonStyle};
use crate::error::{SkeletonError, SkeletonResult, SkipReason};
use crate::host::{Document, FontLoader, NodeProperty};
use crate::id::NodeId;

use super::{Notice, RewriteStats, RunContext, check_root, collect, flatten, rewrite_all};

// =============================================================================
// RunReport
// =============================================================================

/// Outcome of one run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Converted roots, in selection order
    pub produced: Vec<NodeId>,
    /// Selection items that were not valid roots
    pub skipped: Vec<(NodeId, SkipReason)>,
    /// Roots whose processing failed
    pub failed: Vec<(NodeId, SkeletonError)>,
    pub stats: RewriteStats,
    /// Messages for the user, in the order they arose
    pub notices: Vec<Notice>,
}

impl RunReport {
    /// Whether any root or node failed
    pub fn had_errors(&self) -> bool {
        !self.failed.is_empty() || self.stats.failed > 0
    }
}

// =============================================================================
// Skeletonizer
// =============================================================================

/// Converts selected frames into skeletons.
///
/// # Usage
///
/// ```ignore
/// let report = Skeletonizer::new()
///     .run(&mut doc, &fonts, CornerRadius::default())
///     .await;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Skeletonizer {
    style: SkeletonStyle,
}

impl Skeletonizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom placeholder style
    pub fn with_style(mut self, style: SkeletonStyle) -> Self {
        self.style = style;
        self
    }

    /// Convert the document's current selection
    pub async fn run<D: Document, F: FontLoader>(
        &self,
        doc: &mut D,
        fonts: &F,
        corner_radius: CornerRadius,
    ) -> RunReport {
        let selection = doc.selection().to_vec();
        self.run_on(doc, fonts, &selection, corner_radius).await
    }

    /// Convert `selection`, then make the produced roots the new selection
    pub async fn run_on<D: Document, F: FontLoader>(
        &self,
        doc: &mut D,
        fonts: &F,
        selection: &[NodeId],
        corner_radius: CornerRadius,
    ) -> RunReport {
        let mut ctx = RunContext::new(corner_radius, self.style.clone());
        let mut report = RunReport::default();

        for &id in selection {
            if let Err(reason) = check_root(doc.node(id)) {
                warn!(node = %id, %reason, "skipping selection item");
                report.skipped.push((id, reason));
                continue;
            }
            match self.process_root(doc, fonts, id, &mut ctx).await {
                Ok(root) => report.produced.push(root),
                Err(err) => {
                    error!(node = %id, error = %err, "failed to convert selection item");
                    report.failed.push((id, err));
                }
            }
        }

        doc.set_selection(report.produced.clone());
        info!(
            produced = report.produced.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            placeholders = ctx.stats.placeholders(),
            "skeleton run finished"
        );

        report.stats = ctx.stats;
        report.notices = ctx.notices;
        report.notices.extend(summarize(&report));
        report
    }

    async fn process_root<D: Document, F: FontLoader>(
        &self,
        doc: &mut D,
        fonts: &F,
        id: NodeId,
        ctx: &mut RunContext,
    ) -> SkeletonResult<NodeId> {
        let node = doc.node(id).ok_or(SkeletonError::InvalidSelectionItem {
            id,
            reason: SkipReason::Missing,
        })?;
        let nested = node
            .parent
            .and_then(|p| doc.node(p))
            .is_some_and(|p| p.kind.is_frame());

        let target = if nested {
            debug!(node = %id, "converting nested frame in place");
            id
        } else {
            let (name, x, y, width) = (node.name.clone(), node.x, node.y, node.width);
            let copy = doc.clone_subtree(id)?;
            let copy_name = CompactString::from(self.style.copy_name(&name));
            doc.set_property(copy, NodeProperty::Name(copy_name))?;
            let position = NodeProperty::Position {
                x: x + width + DUPLICATE_GAP,
                y,
            };
            doc.set_property(copy, position)?;
            debug!(node = %id, copy = %copy, "converting top-level copy");
            copy
        };

        let root = flatten(doc, target)?;
        let worklist = collect(doc, root);
        rewrite_all(doc, fonts, worklist, ctx).await;
        Ok(root)
    }
}

/// Summary notices for a finished run
fn summarize(report: &RunReport) -> Vec<Notice> {
    let mut notices = Vec::new();
    match report.produced.len() {
        0 => notices.push(Notice::warning(
            "No valid frames selected. Select a visible, unlocked frame, component or instance.",
        )),
        1 => notices.push(Notice::info("Created skeleton for 1 frame")),
        n => notices.push(Notice::info(format!("Created skeletons for {n} frames"))),
    }
    if !report.skipped.is_empty() && !report.produced.is_empty() {
        notices.push(Notice::warning(format!(
            "Skipped {} selected item(s) that are not valid frames",
            report.skipped.len()
        )));
    }
    if !report.failed.is_empty() {
        notices.push(Notice::error(format!(
            "{} frame(s) could not be converted",
            report.failed.len()
        )));
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, SceneGraph, SceneNode};
    use crate::host::FontBook;
    use crate::transform::NoticeLevel;

    #[test]
    fn test_summary_messages() {
        let mut report = RunReport::default();
        assert_eq!(summarize(&report)[0].level, NoticeLevel::Warning);

        report.produced.push(NodeId::from_raw(5));
        assert_eq!(summarize(&report), vec![Notice::info("Created skeleton for 1 frame")]);

        report.produced.push(NodeId::from_raw(6));
        report.skipped.push((NodeId::from_raw(7), SkipReason::Locked));
        let notices = summarize(&report);
        assert_eq!(notices[0], Notice::info("Created skeletons for 2 frames"));
        assert_eq!(notices[1].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_skips_invalid_items() {
        let mut g = SceneGraph::new();
        let group = g.add_root(SceneNode::new(NodeKind::Group, "Group").sized(50.0, 50.0));
        let locked =
            g.add_root(SceneNode::new(NodeKind::Frame, "Locked").sized(50.0, 50.0).locked());
        let tiny = g.add_root(SceneNode::new(NodeKind::Component, "Tiny").sized(3.0, 50.0));
        g.set_selection(vec![group, locked, tiny]);

        let report = Skeletonizer::new()
            .run(&mut g, &FontBook::new(), CornerRadius::default())
            .await;
        assert!(report.produced.is_empty());
        assert_eq!(
            report.skipped,
            vec![
                (group, SkipReason::WrongKind),
                (locked, SkipReason::Locked),
                (tiny, SkipReason::TooSmall),
            ]
        );
        assert!(report.notices[0].message.starts_with("No valid frames"));
        assert!(g.selection().is_empty());
    }

    #[tokio::test]
    async fn test_failed_root_does_not_stop_others() {
        let mut g = SceneGraph::new();
        let a = g.add_root(SceneNode::new(NodeKind::Frame, "A").sized(50.0, 50.0));
        let outer = g.add_root(SceneNode::new(NodeKind::Frame, "Outer").sized(300.0, 300.0));
        let nested = g.add(outer, SceneNode::new(NodeKind::Frame, "Nested").sized(50.0, 50.0));
        g.failing.clone = true;

        let report = Skeletonizer::new()
            .run_on(&mut g, &FontBook::new(), &[a, nested], CornerRadius::default())
            .await;

        assert_eq!(report.produced, vec![nested]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, a);
        assert!(report.had_errors());
        assert_eq!(g.selection(), &[nested]);
        assert!(report.notices.iter().any(|n| n.level == NoticeLevel::Error));
    }

    #[tokio::test]
    async fn test_frame_inside_component_or_instance_is_copied() {
        for parent_kind in [NodeKind::Component, NodeKind::Instance] {
            let mut g = SceneGraph::new();
            let parent = g.add_root(SceneNode::new(parent_kind, "Parent").sized(300.0, 300.0));
            let inner = g.add(
                parent,
                SceneNode::new(NodeKind::Frame, "Inner").at(20.0, 30.0).sized(100.0, 80.0),
            );

            let report = Skeletonizer::new()
                .run_on(&mut g, &FontBook::new(), &[inner], CornerRadius::default())
                .await;

            assert_eq!(report.produced.len(), 1, "{parent_kind:?}");
            let copy = report.produced[0];
            assert_ne!(copy, inner);
            let copy_node = g.node(copy).unwrap();
            assert_eq!(copy_node.name, "Inner (Skeleton)");
            assert_eq!((copy_node.x, copy_node.y), (170.0, 30.0));

            let original = g.node(inner).unwrap();
            assert_eq!(original.name, "Inner");
            assert_eq!((original.x, original.y), (20.0, 30.0));
            assert_eq!(g.children_of(parent), &[inner, copy]);
        }
    }
}
