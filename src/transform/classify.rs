//! Eligibility checks for nodes and selected roots.

use tracing::debug;

use crate::config::MIN_NODE_SIZE;
use crate::error::SkipReason;
use crate::node::SceneNode;

/// Check the minimum-size floor. Non-finite sizes fail.
pub fn has_min_size(node: &SceneNode) -> bool {
    node.width.is_finite()
        && node.height.is_finite()
        && node.width >= MIN_NODE_SIZE
        && node.height >= MIN_NODE_SIZE
}

/// Whether `node` should be replaced by a placeholder.
///
/// Text and basic shapes qualify when visible and at least
/// [`MIN_NODE_SIZE`] on both sides. Containers never do; their contents are
/// converted instead.
pub fn is_convertible(node: Option<&SceneNode>) -> bool {
    let Some(node) = node else {
        return false;
    };
    if !node.width.is_finite() || !node.height.is_finite() {
        debug!(name = %node.name, "non-finite geometry, not convertible");
        return false;
    }
    if !node.visible || !has_min_size(node) {
        return false;
    }
    node.kind.is_text() || node.kind.is_shape()
}

/// Check that a selected node can serve as a conversion root.
pub fn check_root(node: Option<&SceneNode>) -> Result<(), SkipReason> {
    let node = node.ok_or(SkipReason::Missing)?;
    if !node.kind.is_container() {
        return Err(SkipReason::WrongKind);
    }
    if node.locked {
        return Err(SkipReason::Locked);
    }
    if !node.visible {
        return Err(SkipReason::Hidden);
    }
    if !has_min_size(node) {
        return Err(SkipReason::TooSmall);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    const CONVERTIBLE: [NodeKind; 8] = [
        NodeKind::Text,
        NodeKind::Rectangle,
        NodeKind::Ellipse,
        NodeKind::Vector,
        NodeKind::Polygon,
        NodeKind::Star,
        NodeKind::BooleanOperation,
        NodeKind::Line,
    ];

    const STRUCTURAL: [NodeKind; 6] = [
        NodeKind::Page,
        NodeKind::Frame,
        NodeKind::Component,
        NodeKind::Instance,
        NodeKind::Group,
        NodeKind::Other,
    ];

    #[test]
    fn test_convertible_kinds() {
        for kind in CONVERTIBLE {
            let node = SceneNode::new(kind, "n").sized(4.0, 4.0);
            assert!(is_convertible(Some(&node)), "{kind:?}");
        }
        for kind in STRUCTURAL {
            let node = SceneNode::new(kind, "n").sized(100.0, 100.0);
            assert!(!is_convertible(Some(&node)), "{kind:?}");
        }
    }

    #[test]
    fn test_degenerate_or_hidden_never_convertible() {
        for kind in CONVERTIBLE {
            let thin = SceneNode::new(kind, "n").sized(3.9, 50.0);
            let short = SceneNode::new(kind, "n").sized(50.0, 3.0);
            let hidden = SceneNode::new(kind, "n").sized(50.0, 50.0).hidden();
            assert!(!is_convertible(Some(&thin)));
            assert!(!is_convertible(Some(&short)));
            assert!(!is_convertible(Some(&hidden)));
        }
    }

    #[test]
    fn test_fails_closed() {
        assert!(!is_convertible(None));
        let nan = SceneNode::new(NodeKind::Rectangle, "n").sized(f64::NAN, 10.0);
        assert!(!is_convertible(Some(&nan)));
    }

    #[test]
    fn test_check_root() {
        let frame = SceneNode::new(NodeKind::Frame, "f").sized(10.0, 10.0);
        assert_eq!(check_root(Some(&frame)), Ok(()));
        assert_eq!(check_root(None), Err(SkipReason::Missing));
        assert_eq!(
            check_root(Some(&SceneNode::new(NodeKind::Group, "g").sized(10.0, 10.0))),
            Err(SkipReason::WrongKind)
        );
        assert_eq!(check_root(Some(&frame.clone().locked())), Err(SkipReason::Locked));
        assert_eq!(check_root(Some(&frame.clone().hidden())), Err(SkipReason::Hidden));
        assert_eq!(
            check_root(Some(&frame.sized(2.0, 10.0))),
            Err(SkipReason::TooSmall)
        );
    }

    #[test]
    fn test_infinite_size_is_too_small() {
        let wide = SceneNode::new(NodeKind::Frame, "f").sized(f64::INFINITY, 10.0);
        assert!(!has_min_size(&wide));
        assert_eq!(check_root(Some(&wide)), Err(SkipReason::TooSmall));

        let tall = SceneNode::new(NodeKind::Rectangle, "r").sized(10.0, f64::INFINITY);
        assert!(!is_convertible(Some(&tall)));
    }
}
