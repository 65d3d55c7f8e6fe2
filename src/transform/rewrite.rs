//! Node rewriting: replace one convertible node with placeholders.
//!
//! # Layout
//!
//! - **Text**: `max(1, round(height / line_height))` bars, one per line, stacked
//!   from the node's top edge at line-height intervals. All bars are
//!   `max(6, round(font_size * 0.7))` tall; the last is 60% wide.
//! - **Shapes**: one rectangle with the node's exact bounds. Ellipses get
//!   `min(width, height) / 2` as corner radius so they stay round.
//!
//! Placeholders take the original's index in its parent (text bars occupy a
//! contiguous run starting there), then the original is removed.

use compact_str::CompactString;
use tracing::{debug, error, warn};

use crate::config::{BAR_HEIGHT_FACTOR, LAST_LINE_WIDTH_FACTOR, MAX_TEXT_LINES, MIN_BAR_HEIGHT};
use crate::error::{SkeletonError, SkeletonResult};
use crate::host::{Document, FontLoader, NodeProperty};
use crate::id::NodeId;
use crate::node::{NodeKind, Paint, SceneNode};

use super::{RunContext, TextMetrics, estimate};

// =============================================================================
// Placeholder
// =============================================================================

/// Desired properties of one placeholder rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Paint,
}

impl Placeholder {
    /// Properties in assignment order
    pub fn properties(&self) -> [NodeProperty; 5] {
        [
            NodeProperty::Position {
                x: self.x,
                y: self.y,
            },
            NodeProperty::Size {
                width: self.width,
                height: self.height,
            },
            NodeProperty::Fills(vec![self.fill]),
            NodeProperty::CornerRadius(self.corner_radius),
            NodeProperty::Name(CompactString::from(self.name.as_str())),
        ]
    }
}

/// One bar per estimated line of `node`'s text.
///
/// Fails when the estimated line count is not finite or exceeds
/// [`MAX_TEXT_LINES`].
pub fn text_bars(
    node: &SceneNode,
    metrics: TextMetrics,
    ctx: &RunContext,
) -> SkeletonResult<Vec<Placeholder>> {
    let lines = (node.height / metrics.line_height_px).round();
    if !lines.is_finite() || lines > MAX_TEXT_LINES as f64 {
        return Err(SkeletonError::structural(format!(
            "text node {} would need {lines} lines at line height {}",
            node.name, metrics.line_height_px
        )));
    }
    let line_count = (lines as usize).max(1);
    let bar_height = (metrics.font_size * BAR_HEIGHT_FACTOR).round().max(MIN_BAR_HEIGHT);
    let fill = Paint::solid(ctx.style.fill);

    let bars = (0..line_count)
        .map(|i| {
            let last = i + 1 == line_count;
            Placeholder {
                name: ctx.style.line_name(&node.name, i + 1),
                x: node.x,
                y: node.y + metrics.line_height_px * i as f64,
                width: if last { node.width * LAST_LINE_WIDTH_FACTOR } else { node.width },
                height: bar_height,
                corner_radius: ctx.corner_radius.get(),
                fill,
            }
        })
        .collect();
    Ok(bars)
}

/// A rectangle covering `node`
pub fn shape_placeholder(node: &SceneNode, ctx: &RunContext) -> Placeholder {
    let corner_radius = if node.kind == NodeKind::Ellipse {
        node.min_side() / 2.0
    } else {
        ctx.corner_radius.get()
    };
    Placeholder {
        name: ctx.style.shape_name(&node.name),
        x: node.x,
        y: node.y,
        width: node.width,
        height: node.height,
        corner_radius,
        fill: Paint::solid(ctx.style.fill),
    }
}

// =============================================================================
// Rewrite
// =============================================================================

/// Replace `id` with its placeholders.
///
/// Returns the number of placeholders inserted. A text node whose font
/// cannot be loaded fails with `FontUnavailable` and is left untouched.
pub async fn rewrite<D: Document, F: FontLoader>(
    doc: &mut D,
    fonts: &F,
    id: NodeId,
    ctx: &mut RunContext,
) -> SkeletonResult<usize> {
    let node = doc
        .node(id)
        .cloned()
        .ok_or_else(|| SkeletonError::structural(format!("node {id} not found")))?;
    let parent = node
        .parent
        .ok_or_else(|| SkeletonError::structural(format!("node {id} has no parent")))?;
    let index = doc
        .node(parent)
        .and_then(|p| p.index_of(id))
        .ok_or_else(|| {
            SkeletonError::structural(format!("node {id} not found in parent {parent}"))
        })?;

    let placeholders = if node.kind.is_text() {
        let text = node.text.as_ref().ok_or_else(|| {
            SkeletonError::structural(format!("text node {id} has no text properties"))
        })?;
        let metrics = estimate(text, fonts, ctx).await?;
        text_bars(&node, metrics, ctx)?
    } else {
        vec![shape_placeholder(&node, ctx)]
    };

    let created = build_all(doc, &placeholders)?;
    for (offset, &rect) in created.iter().enumerate() {
        if let Err(err) = doc.insert_child(parent, index + offset, rect) {
            discard(doc, &created[offset..]);
            return Err(err.into());
        }
    }
    doc.remove(id)?;

    debug!(node = %id, kind = node.kind.name(), placeholders = created.len(), "rewrote node");
    Ok(created.len())
}

/// Create all placeholders, detached. If any creation fails, the ones
/// already created are removed again.
fn build_all<D: Document>(
    doc: &mut D,
    placeholders: &[Placeholder],
) -> SkeletonResult<Vec<NodeId>> {
    let mut created = Vec::with_capacity(placeholders.len());
    for placeholder in placeholders {
        match doc.create_rectangle() {
            Ok(rect) => {
                apply(doc, rect, placeholder);
                created.push(rect);
            }
            Err(err) => {
                discard(doc, &created);
                return Err(err.into());
            }
        }
    }
    Ok(created)
}

/// Remove placeholders that never made it into the tree.
fn discard<D: Document>(doc: &mut D, rects: &[NodeId]) {
    for &rect in rects {
        if let Err(err) = doc.remove(rect) {
            warn!(node = %rect, error = %err, "orphan placeholder not removed");
        }
    }
}

/// Assign every property; a failed assignment is logged and skipped.
fn apply<D: Document>(doc: &mut D, rect: NodeId, placeholder: &Placeholder) {
    for property in placeholder.properties() {
        let label = property.label();
        if let Err(err) = doc.set_property(rect, property) {
            warn!(node = %rect, property = label, error = %err, "placeholder property not set");
        }
    }
}

/// Rewrite `worklist` from last to first, logging per-node failures.
pub(crate) async fn rewrite_all<D: Document, F: FontLoader>(
    doc: &mut D,
    fonts: &F,
    worklist: Vec<NodeId>,
    ctx: &mut RunContext,
) {
    for id in worklist.into_iter().rev() {
        let is_text = doc.node(id).is_some_and(|n| n.kind.is_text());
        match rewrite(doc, fonts, id, ctx).await {
            Ok(count) if is_text => {
                ctx.stats.text_nodes += 1;
                ctx.stats.bars += count;
            }
            Ok(_) => ctx.stats.shapes += 1,
            Err(SkeletonError::FontUnavailable { family }) => {
                warn!(node = %id, family = %family, "text left unconverted");
                ctx.stats.fonts_missing += 1;
            }
            Err(err) => {
                error!(node = %id, error = %err, "failed to rewrite node");
                ctx.stats.failed += 1;
            }
        }
    }
}
