
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::xkdtree::XkdTree;
use crate::{LabeledPoint, LabeledPoint2D, Point2D, Rectangle2D};

pub(crate) const EXTENT: f64 = 1000.;

pub(crate) fn test_bbox() -> Rectangle2D<f64> {
    Rectangle2D::from_corners(0., 0., EXTENT, EXTENT)
}

/// Uniformly distributed points with labels `p0`, `p1`, ... in insertion order.
pub(crate) fn random_points(n: usize, seed: u64) -> Vec<LabeledPoint2D<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            LabeledPoint2D::new(
                format!("p{}", i),
                rng.gen_range(0.0..=EXTENT),
                rng.gen_range(0.0..=EXTENT),
            )
        })
        .collect()
}

/// Points snapped to a coarse integer grid, so that many share a coordinate.
pub(crate) fn gridded_points(n: usize, cells: u32, seed: u64) -> Vec<LabeledPoint2D<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = EXTENT / cells as f64;
    (0..n)
        .map(|i| {
            LabeledPoint2D::new(
                format!("g{}", i),
                rng.gen_range(0..=cells) as f64 * step,
                rng.gen_range(0..=cells) as f64 * step,
            )
        })
        .collect()
}

pub(crate) fn random_queries(n: usize, seed: u64) -> Vec<Point2D<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Queries may fall outside the bounding box
    (0..n)
        .map(|_| {
            Point2D::new(
                rng.gen_range(-100.0..EXTENT + 100.),
                rng.gen_range(-100.0..EXTENT + 100.),
            )
        })
        .collect()
}

pub(crate) fn build_tree(
    points: &[LabeledPoint2D<f64>],
    bucket_size: usize,
) -> XkdTree<LabeledPoint2D<f64>> {
    let mut tree = XkdTree::new_with_bucket_size(bucket_size, test_bbox());
    tree.bulk_insert(points.iter().cloned()).unwrap();
    tree
}

/// The smallest distance from `q` to any of `points`, found by linear scan.
pub(crate) fn brute_force_nearest(points: &[LabeledPoint2D<f64>], q: &Point2D<f64>) -> f64 {
    points
        .iter()
        .map(|p| q.distance(&p.point()))
        .fold(f64::INFINITY, f64::min)
}
