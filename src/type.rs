use std::fmt::Debug;

use geo_traits::{CoordTrait, Dimensions};
use num_traits::Float;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Split values are computed
/// as midpoints between neighboring coordinates, which only makes sense for floating point.
pub trait Coordinate: private::Sealed + Float + Debug + Send + Sync + 'static {}

impl Coordinate for f32 {}

impl Coordinate for f64 {}

/// A point in the plane.
///
/// Axis 0 is x and axis 1 is y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D<N: Coordinate> {
    pub(crate) x: N,
    pub(crate) y: N,
}

impl<N: Coordinate> Point2D<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// Copy the coordinates out of any [`CoordTrait`] implementation.
    pub fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        Self::new(coord.x(), coord.y())
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// The coordinate on `axis`.
    ///
    /// ## Panics
    ///
    /// - If `axis` is not 0 or 1.
    #[inline]
    pub fn get(&self, axis: usize) -> N {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("Axis {} out of range for a 2D point.", axis),
        }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_sq(&self, other: &Self) -> N {
        sq_dist(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> N {
        self.distance_sq(other).sqrt()
    }
}

impl<N: Coordinate> From<(N, N)> for Point2D<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: Coordinate> From<[N; 2]> for Point2D<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: Coordinate> CoordTrait for Point2D<N> {
    type T = N;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        self.get(n)
    }
}

/// Render a coordinate so that finite values always carry a decimal point, as in `5.0` or
/// `1.0e16`.
pub(crate) fn format_coord<N: Coordinate>(value: N) -> String {
    let mut out = format!("{:?}", value);
    if value.is_finite() && !out.contains('.') {
        let at = out.find('e').unwrap_or(out.len());
        out.insert_str(at, ".0");
    }
    out
}

#[inline]
pub(crate) fn sq_dist<N: Coordinate>(ax: N, ay: N, bx: N, by: N) -> N {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
