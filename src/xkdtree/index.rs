use geo_traits::CoordTrait;
use log::debug;
use num_traits::ToPrimitive;

use crate::error::{Result, XkdTreeError};
use crate::labeled::LabeledPoint;
use crate::r#type::Point2D;
use crate::rect::Rectangle2D;
use crate::xkdtree::node::Node;
use crate::xkdtree::traversal::{nearest_neighbor, NodeRef};

/// The bucket capacity used by [`XkdTree::new`].
pub const DEFAULT_BUCKET_SIZE: usize = 16;

/// A mutable, bucketed k-d tree over labeled points.
///
/// Interior nodes store only a splitting plane. Leaves store up to `bucket_size` points; a leaf
/// that overflows is split on the wider side of the bounding box of its points.
///
/// ```
/// use xkd_index::xkdtree::XkdTree;
/// use xkd_index::{LabeledPoint2D, Point2D, Rectangle2D};
///
/// let bbox = Rectangle2D::from_corners(0., 0., 10., 10.);
/// let mut tree: XkdTree<LabeledPoint2D<f64>> = XkdTree::new_with_bucket_size(2, bbox);
/// tree.insert(LabeledPoint2D::new("a", 1., 1.)).unwrap();
/// tree.insert(LabeledPoint2D::new("b", 9., 2.)).unwrap();
/// tree.insert(LabeledPoint2D::new("c", 5., 5.)).unwrap();
///
/// assert_eq!(
///     tree.list(),
///     vec!["(x=5.0)", "[ {b 9.0 2.0} {c 5.0 5.0} ]", "[ {a 1.0 1.0} ]"]
/// );
///
/// let nearest = tree.nearest_neighbor(&Point2D::new(4., 4.)).unwrap();
/// assert_eq!(nearest.to_string(), "c 5.0 5.0");
/// ```
#[derive(Debug, Clone)]
pub struct XkdTree<P: LabeledPoint> {
    root: Option<Node<P>>,
    bucket_size: usize,
    bbox: Rectangle2D<P::T>,
    size: usize,
}

impl<P: LabeledPoint> XkdTree<P> {
    /// Create a new, empty tree covering `bbox` with the default bucket size.
    pub fn new(bbox: Rectangle2D<P::T>) -> Self {
        Self::new_with_bucket_size(DEFAULT_BUCKET_SIZE, bbox)
    }

    /// Create a new, empty tree covering `bbox` whose leaves hold up to `bucket_size` points.
    ///
    /// ## Panics
    ///
    /// - If `bucket_size` is zero.
    pub fn new_with_bucket_size(bucket_size: usize, bbox: Rectangle2D<P::T>) -> Self {
        assert!(bucket_size >= 1, "Bucket size must be at least 1.");
        Self {
            root: None,
            bucket_size,
            bbox,
            size: 0,
        }
    }

    /// The maximum number of points held by each leaf.
    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// The region that every inserted point must lie in.
    pub fn bbox(&self) -> &Rectangle2D<P::T> {
        &self.bbox
    }

    /// The number of points in this tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if this tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Remove all points from this tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} points", self.size);
        self.root = None;
        self.size = 0;
    }

    /// Find an item whose coordinates equal `q`.
    ///
    /// Labels are ignored. If several items share the coordinates, the first one reached is
    /// returned.
    pub fn find(&self, q: &Point2D<P::T>) -> Option<&P> {
        if self.size == 0 {
            return None;
        }
        self.root.as_ref()?.find(q)
    }

    /// Find an item whose coordinates equal `coord`.
    pub fn find_coord(&self, coord: &impl CoordTrait<T = P::T>) -> Option<&P> {
        self.find(&Point2D::from_coord(coord))
    }

    /// Insert a single item.
    ///
    /// Returns [`XkdTreeError::OutOfBounds`] and leaves the tree untouched if the item lies
    /// outside [`bbox`][Self::bbox].
    pub fn insert(&mut self, item: P) -> Result<()> {
        self.check_bounds(&item)?;
        self.bulk_insert([item])
    }

    /// Insert a batch of items.
    ///
    /// Every item is checked against the bounding box before anything is inserted, so either the
    /// whole batch is added or an [`XkdTreeError::OutOfBounds`] is returned and the tree is
    /// unchanged.
    pub fn bulk_insert(&mut self, items: impl IntoIterator<Item = P>) -> Result<()> {
        let items: Vec<P> = items.into_iter().collect();
        for item in items.iter() {
            self.check_bounds(item)?;
        }

        let root = if self.size == 0 {
            Node::default()
        } else {
            self.root.take().unwrap_or_default()
        };

        let num_items = items.len();
        self.root = Some(root.bulk_insert(items, self.bucket_size));
        self.size += num_items;

        debug!(
            "inserted batch of {} points, tree now holds {}",
            num_items, self.size
        );
        Ok(())
    }

    /// A right-to-left preorder listing of the tree.
    ///
    /// Interior nodes render as `(x=<v>)` or `(y=<v>)`. Leaves render as
    /// `[ {<label> <x> <y>} ... ]` with their points in label order.
    pub fn list(&self) -> Vec<String> {
        let mut out = vec![];
        match self.root.as_ref() {
            Some(root) if self.size > 0 => root.list(&mut out),
            _ => Node::<P>::default().list(&mut out),
        }
        out
    }

    /// Find the item closest to `q` by Euclidean distance.
    ///
    /// Returns `None` if the tree is empty.
    pub fn nearest_neighbor(&self, q: &Point2D<P::T>) -> Option<&P> {
        if self.size == 0 {
            return None;
        }
        nearest_neighbor(self.root.as_ref()?, self.bbox, q)
    }

    /// Find the item closest to `coord` by Euclidean distance.
    pub fn nearest_neighbor_coord(&self, coord: &impl CoordTrait<T = P::T>) -> Option<&P> {
        self.nearest_neighbor(&Point2D::from_coord(coord))
    }

    /// Access the root node of the tree for manual traversal.
    ///
    /// Returns `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, P>> {
        if self.size == 0 {
            return None;
        }
        self.root.as_ref().map(NodeRef::new)
    }

    /// The number of levels of the tree. A tree with a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self.root.as_ref() {
            Some(root) if self.size > 0 => root.depth(),
            _ => 0,
        }
    }

    /// The number of leaf buckets in the tree.
    pub fn num_leaves(&self) -> usize {
        match self.root.as_ref() {
            Some(root) if self.size > 0 => root.num_leaves(),
            _ => 0,
        }
    }

    /// Check the structural invariants of the tree.
    ///
    /// Every leaf must hold at most [`bucket_size`][Self::bucket_size] points, the leaves must
    /// hold exactly [`size`][Self::size] points in total, and every point must lie inside the
    /// bounding box and on the correct side of each splitting plane above it. Points equal to a
    /// cut value are accepted on either side.
    pub fn validate(&self) -> Result<()> {
        let root = match self.root.as_ref() {
            Some(root) if self.size > 0 => root,
            _ => return Ok(()),
        };

        let mut planes = vec![];
        self.validate_node(root, &mut planes)?;

        let total = root.num_points();
        if total != self.size {
            return Err(XkdTreeError::InvariantViolation(format!(
                "Tree reports {} points but its leaves hold {}.",
                self.size, total
            )));
        }
        Ok(())
    }

    /// `planes` holds `(cut_dim, cut_value, is_right)` for every split above `node`.
    fn validate_node(&self, node: &Node<P>, planes: &mut Vec<(usize, P::T, bool)>) -> Result<()> {
        match node {
            Node::Leaf(leaf) => {
                if leaf.points.len() > self.bucket_size {
                    return Err(XkdTreeError::InvariantViolation(format!(
                        "Leaf holds {} points, more than the bucket size {}.",
                        leaf.points.len(),
                        self.bucket_size
                    )));
                }
                for p in leaf.points.iter() {
                    if !self.bbox.contains(&p.point()) {
                        return Err(XkdTreeError::InvariantViolation(format!(
                            "Point {} lies outside the bounding box.",
                            p.label()
                        )));
                    }
                    for &(d, v, is_right) in planes.iter() {
                        let k = p.get(d);
                        let misplaced = if is_right { k < v } else { k > v };
                        if misplaced {
                            return Err(XkdTreeError::InvariantViolation(format!(
                                "Point {} lies on the wrong side of the split at {:?} on axis {}.",
                                p.label(),
                                v,
                                d
                            )));
                        }
                    }
                }
                Ok(())
            }
            Node::Internal(internal) => {
                planes.push((internal.cut_dim, internal.cut_value, false));
                self.validate_node(&internal.left, planes)?;
                planes.pop();

                planes.push((internal.cut_dim, internal.cut_value, true));
                self.validate_node(&internal.right, planes)?;
                planes.pop();
                Ok(())
            }
        }
    }

    fn check_bounds(&self, item: &P) -> Result<()> {
        if self.bbox.contains(&item.point()) {
            return Ok(());
        }
        Err(XkdTreeError::OutOfBounds {
            label: item.label().to_string(),
            x: item.x().to_f64().unwrap_or(f64::NAN),
            y: item.y().to_f64().unwrap_or(f64::NAN),
        })
    }
}
