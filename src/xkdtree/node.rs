use std::cmp::Ordering;
use std::mem;

use log::trace;

use crate::labeled::{format_labeled, LabeledPoint};
use crate::r#type::{format_coord, Coordinate, Point2D};
use crate::rect::Rectangle2D;

/// A node of the tree: either a bucket of points or a splitting plane.
#[derive(Debug, Clone)]
pub(crate) enum Node<P: LabeledPoint> {
    Leaf(Leaf<P>),
    Internal(Internal<P>),
}

/// External node holding up to `bucket_size` points, kept in label order.
#[derive(Debug, Clone)]
pub(crate) struct Leaf<P: LabeledPoint> {
    pub(crate) points: Vec<P>,
}

/// Interior node carrying only its splitting plane.
///
/// Points with `p[cut_dim] < cut_value` are routed left on insertion. The initial split of a
/// bucket may leave points equal to `cut_value` on the left.
#[derive(Debug, Clone)]
pub(crate) struct Internal<P: LabeledPoint> {
    pub(crate) cut_dim: usize,
    pub(crate) cut_value: P::T,
    pub(crate) left: Box<Node<P>>,
    pub(crate) right: Box<Node<P>>,
}

impl<P: LabeledPoint> Default for Node<P> {
    fn default() -> Self {
        Node::Leaf(Leaf { points: vec![] })
    }
}

impl<P: LabeledPoint> Node<P> {
    pub(crate) fn find(&self, q: &Point2D<P::T>) -> Option<&P> {
        match self {
            Node::Leaf(leaf) => leaf.find(q),
            Node::Internal(internal) => internal.find(q),
        }
    }

    /// Insert a batch below this node and return the node that should take its place.
    pub(crate) fn bulk_insert(self, pts: Vec<P>, bucket_size: usize) -> Node<P> {
        match self {
            Node::Leaf(leaf) => leaf.bulk_insert(pts, bucket_size),
            Node::Internal(mut internal) => {
                internal.bulk_insert(pts, bucket_size);
                Node::Internal(internal)
            }
        }
    }

    /// Append the right-to-left preorder listing of this subtree to `out`.
    pub(crate) fn list(&self, out: &mut Vec<String>) {
        match self {
            Node::Leaf(leaf) => out.push(leaf.describe()),
            Node::Internal(internal) => {
                out.push(internal.describe());
                internal.right.list(out);
                internal.left.list(out);
            }
        }
    }

    pub(crate) fn num_points(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.points.len(),
            Node::Internal(internal) => internal.left.num_points() + internal.right.num_points(),
        }
    }

    pub(crate) fn num_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(internal) => internal.left.num_leaves() + internal.right.num_leaves(),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(internal) => 1 + internal.left.depth().max(internal.right.depth()),
        }
    }
}

impl<P: LabeledPoint> Leaf<P> {
    fn find(&self, q: &Point2D<P::T>) -> Option<&P> {
        self.points.iter().find(|p| p.point() == *q)
    }

    fn bulk_insert(mut self, pts: Vec<P>, bucket_size: usize) -> Node<P> {
        self.points.extend(pts);
        self.points.sort_by(|a, b| a.label().cmp(b.label()));

        if self.points.len() <= bucket_size {
            return Node::Leaf(self);
        }
        split(self.points, bucket_size)
    }

    fn describe(&self) -> String {
        let mut out = String::from("[ ");
        for p in self.points.iter() {
            out.push('{');
            out.push_str(&format_labeled(p));
            out.push_str("} ");
        }
        out.push(']');
        out
    }
}

impl<P: LabeledPoint> Internal<P> {
    fn find(&self, q: &Point2D<P::T>) -> Option<&P> {
        let k = q.get(self.cut_dim);
        if k > self.cut_value {
            self.right.find(q)
        } else if k < self.cut_value {
            self.left.find(q)
        } else {
            self.left.find(q).or_else(|| self.right.find(q))
        }
    }

    fn bulk_insert(&mut self, pts: Vec<P>, bucket_size: usize) {
        let (left_pts, right_pts): (Vec<P>, Vec<P>) = pts
            .into_iter()
            .partition(|p| p.get(self.cut_dim) < self.cut_value);

        let left = mem::take(self.left.as_mut());
        *self.left = left.bulk_insert(left_pts, bucket_size);
        let right = mem::take(self.right.as_mut());
        *self.right = right.bulk_insert(right_pts, bucket_size);
    }

    fn describe(&self) -> String {
        let axis = if self.cut_dim == 0 { 'x' } else { 'y' };
        format!("({}={})", axis, format_coord(self.cut_value))
    }
}

/// Split an overflowing bucket on the wider side of its bounding box.
///
/// The points are partitioned by index around the median, so both halves are non-empty even
/// when every point shares the same coordinate.
fn split<P: LabeledPoint>(mut points: Vec<P>, bucket_size: usize) -> Node<P> {
    debug_assert!(points.len() >= 2);

    let mut bbox = Rectangle2D::empty();
    for p in points.iter() {
        bbox.expand(&p.point());
    }

    let cut_dim = if bbox.width(0) >= bbox.width(1) { 0 } else { 1 };
    let other = 1 - cut_dim;

    // Stable, so coincident points keep their label order
    points.sort_by(|a, b| {
        cmp_coord(a.get(cut_dim), b.get(cut_dim))
            .then_with(|| cmp_coord(a.get(other), b.get(other)))
    });

    let n = points.len();
    let m = n / 2;
    let cut_value = if n % 2 != 0 {
        points[m].get(cut_dim)
    } else {
        midpoint(points[m - 1].get(cut_dim), points[m].get(cut_dim))
    };

    trace!(
        "splitting bucket of {} points on axis {} at {:?}",
        n,
        cut_dim,
        cut_value
    );

    let right_pts = points.split_off(m);
    let left = Node::default().bulk_insert(points, bucket_size);
    let right = Node::default().bulk_insert(right_pts, bucket_size);

    Node::Internal(Internal {
        cut_dim,
        cut_value,
        left: Box::new(left),
        right: Box::new(right),
    })
}

#[inline]
fn midpoint<N: Coordinate>(a: N, b: N) -> N {
    (a + b) / (N::one() + N::one())
}

// Points are bounds-checked before insertion, so NaN never reaches a comparison.
#[inline]
fn cmp_coord<N: Coordinate>(a: N, b: N) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
