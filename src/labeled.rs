//! Points carrying a textual label.

use std::fmt::{self, Display};

use crate::r#type::{format_coord, Coordinate, Point2D};

/// An item that can be stored in an [`XkdTree`][crate::xkdtree::XkdTree].
///
/// Labels order the points within a bucket. They need not be unique and are never used for
/// lookup. Labels are compared as `str`, which orders by Unicode scalar value. This agrees with
/// UTF-16 code unit order except between characters in U+E000..=U+FFFF and characters above
/// U+FFFF.
pub trait LabeledPoint {
    /// The coordinate type of this point
    type T: Coordinate;

    /// The location of this point.
    fn point(&self) -> Point2D<Self::T>;

    /// The label of this point.
    fn label(&self) -> &str;

    /// The coordinate on `axis` (0 = x, 1 = y).
    #[inline]
    fn get(&self, axis: usize) -> Self::T {
        self.point().get(axis)
    }

    /// The x coordinate.
    #[inline]
    fn x(&self) -> Self::T {
        self.point().x()
    }

    /// The y coordinate.
    #[inline]
    fn y(&self) -> Self::T {
        self.point().y()
    }
}

/// A simple owned labeled point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint2D<N: Coordinate> {
    label: String,
    point: Point2D<N>,
}

impl<N: Coordinate> LabeledPoint2D<N> {
    /// Create a new labeled point.
    pub fn new(label: impl Into<String>, x: N, y: N) -> Self {
        Self {
            label: label.into(),
            point: Point2D::new(x, y),
        }
    }
}

impl<N: Coordinate> LabeledPoint for LabeledPoint2D<N> {
    type T = N;

    fn point(&self) -> Point2D<N> {
        self.point
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl<N: Coordinate> Display for LabeledPoint2D<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_labeled(self))
    }
}

/// Render `"<label> <x> <y>"`.
pub(crate) fn format_labeled<P: LabeledPoint>(p: &P) -> String {
    format!(
        "{} {} {}",
        p.label(),
        format_coord(p.x()),
        format_coord(p.y())
    )
}
