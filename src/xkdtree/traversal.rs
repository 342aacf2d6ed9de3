//! Utilities to traverse the XkdTree structure.

use tinyvec::TinyVec;

use crate::labeled::LabeledPoint;
use crate::r#type::Point2D;
use crate::rect::Rectangle2D;
use crate::xkdtree::node::Node;

/// A read-only view onto a node of an [`XkdTree`][crate::xkdtree::XkdTree].
#[derive(Debug)]
pub struct NodeRef<'a, P: LabeledPoint> {
    node: &'a Node<P>,
}

// Manual impls: deriving would require `P: Clone`.
impl<P: LabeledPoint> Clone for NodeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: LabeledPoint> Copy for NodeRef<'_, P> {}

impl<'a, P: LabeledPoint> NodeRef<'a, P> {
    pub(crate) fn new(node: &'a Node<P>) -> Self {
        Self { node }
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf(_))
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// The bucket of a leaf node, in label order. Empty for intermediate nodes.
    pub fn points(&self) -> &'a [P] {
        match self.node {
            Node::Leaf(leaf) => &leaf.points,
            Node::Internal(_) => &[],
        }
    }

    /// The axis the children of this node are split over: 0 for x, 1 for y.
    ///
    /// `None` for leaf nodes.
    pub fn cut_dim(&self) -> Option<usize> {
        match self.node {
            Node::Leaf(_) => None,
            Node::Internal(internal) => Some(internal.cut_dim),
        }
    }

    /// The coordinate of the splitting plane. `None` for leaf nodes.
    pub fn cut_value(&self) -> Option<P::T> {
        match self.node {
            Node::Leaf(_) => None,
            Node::Internal(internal) => Some(internal.cut_value),
        }
    }

    /// The child holding points below the splitting plane.
    pub fn left_child(&self) -> Option<NodeRef<'a, P>> {
        match self.node {
            Node::Leaf(_) => None,
            Node::Internal(internal) => Some(NodeRef::new(&internal.left)),
        }
    }

    /// The child holding points at or above the splitting plane.
    pub fn right_child(&self) -> Option<NodeRef<'a, P>> {
        match self.node {
            Node::Leaf(_) => None,
            Node::Internal(internal) => Some(NodeRef::new(&internal.right)),
        }
    }
}

/// A pending visit in the nearest neighbor search.
struct Frame<'a, P: LabeledPoint> {
    node: Option<&'a Node<P>>,
    cell: Rectangle2D<P::T>,
    /// Whether the visit may be skipped once a closer candidate than the cell is known.
    prunable: bool,
}

impl<P: LabeledPoint> Default for Frame<'_, P> {
    fn default() -> Self {
        Self {
            node: None,
            cell: Rectangle2D::empty(),
            prunable: false,
        }
    }
}

/// Find the item closest to `q` below `root`, whose cell is `bbox`.
///
/// The near side of every split is searched first. The far side is searched only when its cell
/// is strictly closer to `q` than the best candidate found so far. Ties between items keep the
/// one encountered first.
pub(crate) fn nearest_neighbor<'a, P: LabeledPoint>(
    root: &'a Node<P>,
    bbox: Rectangle2D<P::T>,
    q: &Point2D<P::T>,
) -> Option<&'a P> {
    let mut best: Option<(&'a P, Point2D<P::T>)> = None;

    // Use TinyVec to avoid heap allocations
    let mut stack: TinyVec<[Frame<'a, P>; 32]> = TinyVec::new();
    stack.push(Frame {
        node: Some(root),
        cell: bbox,
        prunable: false,
    });

    while let Some(frame) = stack.pop() {
        let Some(node) = frame.node else {
            continue;
        };

        if frame.prunable {
            if let Some((_, best_point)) = best {
                if frame.cell.distance_sq(q) >= q.distance_sq(&best_point) {
                    continue;
                }
            }
        }

        match node {
            Node::Leaf(leaf) => {
                for p in leaf.points.iter() {
                    let point = p.point();
                    let closer = match best {
                        None => true,
                        Some((_, best_point)) => q.distance(&point) < q.distance(&best_point),
                    };
                    if closer {
                        best = Some((p, point));
                    }
                }
            }
            Node::Internal(internal) => {
                let d = internal.cut_dim;
                let v = internal.cut_value;
                let left = Frame {
                    node: Some(internal.left.as_ref()),
                    cell: frame.cell.left_part(d, v),
                    prunable: false,
                };
                let right = Frame {
                    node: Some(internal.right.as_ref()),
                    cell: frame.cell.right_part(d, v),
                    prunable: false,
                };

                // Note: the near side is pushed last so that it is popped first, and the whole
                // near subtree is exhausted before the far side is checked
                let (near, mut far) = if q.get(d) < v {
                    (left, right)
                } else {
                    (right, left)
                };
                far.prunable = true;
                stack.push(far);
                stack.push(near);
            }
        }
    }

    best.map(|(p, _)| p)
}
