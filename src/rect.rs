//! Axis-aligned rectangles used for bounding boxes and search cells.

use geo_traits::{
    CoordTrait, Dimensions, GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection,
    UnimplementedLine, UnimplementedLineString, UnimplementedMultiLineString,
    UnimplementedMultiPoint, UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon,
    UnimplementedTriangle,
};

use crate::r#type::{Coordinate, Point2D};

/// An axis-aligned rectangle.
///
/// A rectangle may be empty (inverted, with `min > max`) until it is expanded by a point. All
/// bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle2D<N: Coordinate> {
    min: Point2D<N>,
    max: Point2D<N>,
}

impl<N: Coordinate> Rectangle2D<N> {
    /// Create a rectangle from its lower-left and upper-right corners.
    pub fn new(min: Point2D<N>, max: Point2D<N>) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from raw corner coordinates.
    pub fn from_corners(min_x: N, min_y: N, max_x: N, max_y: N) -> Self {
        Self::new(Point2D::new(min_x, min_y), Point2D::new(max_x, max_y))
    }

    /// Copy the corners out of any [`RectTrait`] implementation.
    pub fn from_rect(rect: &impl RectTrait<T = N>) -> Self {
        Self::from_corners(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// An empty rectangle which contains nothing until expanded.
    pub fn empty() -> Self {
        Self::from_corners(
            N::max_value(),
            N::max_value(),
            N::min_value(),
            N::min_value(),
        )
    }

    /// The lower-left corner.
    pub fn min(&self) -> Point2D<N> {
        self.min
    }

    /// The upper-right corner.
    pub fn max(&self) -> Point2D<N> {
        self.max
    }

    /// Returns `true` if no point can be contained in this rectangle.
    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    /// Grow this rectangle so that it encloses `p`.
    pub fn expand(&mut self, p: &Point2D<N>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Side length on `axis`.
    pub fn width(&self, axis: usize) -> N {
        self.max.get(axis) - self.min.get(axis)
    }

    /// Returns `true` if `p` lies inside or on the boundary of this rectangle.
    pub fn contains(&self, p: &Point2D<N>) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// The part of this rectangle at or below `value` on `axis`.
    pub fn left_part(&self, axis: usize, value: N) -> Self {
        let mut max = self.max;
        if axis == 0 {
            max.x = value;
        } else {
            max.y = value;
        }
        Self::new(self.min, max)
    }

    /// The part of this rectangle at or above `value` on `axis`.
    pub fn right_part(&self, axis: usize, value: N) -> Self {
        let mut min = self.min;
        if axis == 0 {
            min.x = value;
        } else {
            min.y = value;
        }
        Self::new(min, self.max)
    }

    /// Squared distance from `p` to the closest point of this rectangle; zero if `p` is inside.
    pub fn distance_sq(&self, p: &Point2D<N>) -> N {
        let dx = axis_dist(p.x, self.min.x, self.max.x);
        let dy = axis_dist(p.y, self.min.y, self.max.y);
        dx * dx + dy * dy
    }
}

impl<N: Coordinate> GeometryTrait for Rectangle2D<N> {
    type T = N;
    type PointType<'a>
        = UnimplementedPoint<N>
    where
        Self: 'a;
    type LineStringType<'a>
        = UnimplementedLineString<N>
    where
        Self: 'a;
    type PolygonType<'a>
        = UnimplementedPolygon<N>
    where
        Self: 'a;
    type MultiPointType<'a>
        = UnimplementedMultiPoint<N>
    where
        Self: 'a;
    type MultiLineStringType<'a>
        = UnimplementedMultiLineString<N>
    where
        Self: 'a;
    type MultiPolygonType<'a>
        = UnimplementedMultiPolygon<N>
    where
        Self: 'a;
    type GeometryCollectionType<'a>
        = UnimplementedGeometryCollection<N>
    where
        Self: 'a;
    type RectType<'a>
        = Rectangle2D<N>
    where
        Self: 'a;
    type TriangleType<'a>
        = UnimplementedTriangle<N>
    where
        Self: 'a;
    type LineType<'a>
        = UnimplementedLine<N>
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        UnimplementedPoint<N>,
        UnimplementedLineString<N>,
        UnimplementedPolygon<N>,
        UnimplementedMultiPoint<N>,
        UnimplementedMultiLineString<N>,
        UnimplementedMultiPolygon<N>,
        UnimplementedGeometryCollection<N>,
        Rectangle2D<N>,
        UnimplementedTriangle<N>,
        UnimplementedLine<N>,
    > {
        GeometryType::Rect(self)
    }
}

impl<N: Coordinate> RectTrait for Rectangle2D<N> {
    type CoordType<'a>
        = Point2D<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.min
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.max
    }
}

/// 1D distance from a value to a range.
#[inline]
fn axis_dist<N: Coordinate>(k: N, min: N, max: N) -> N {
    if k < min {
        min - k
    } else if k <= max {
        N::zero()
    } else {
        k - max
    }
}
