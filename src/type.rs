use std::fmt::{Debug, Display};

use geo_traits::CoordTrait;
use num_traits::Float;

/// A trait for types that can be used as tree coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Nearest-neighbor search
/// needs a square root and a "no candidate yet" maximum, so only the floating point primitives
/// qualify.
pub trait CoordNum: private::Sealed + Float + Debug + Display {}

impl CoordNum for f32 {}

impl CoordNum for f64 {}

/// A 2D coordinate used as the key of every node in a [`KDTree`][crate::kdtree::KDTree].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord<N: CoordNum> {
    pub(crate) x: N,
    pub(crate) y: N,
}

impl<N: CoordNum> Coord<N> {
    /// Create a new coordinate.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The value on the x axis
    pub fn x(&self) -> N {
        self.x
    }

    /// The value on the y axis
    pub fn y(&self) -> N {
        self.y
    }

    /// The value on the given split axis: 0 for x, 1 for y.
    #[inline]
    pub fn value(&self, axis: usize) -> N {
        if axis == 0 {
            self.x
        } else {
            self.y
        }
    }
}

impl<N: CoordNum> From<(N, N)> for Coord<N> {
    fn from((x, y): (N, N)) -> Self {
        Self { x, y }
    }
}

impl<N: CoordNum> From<[N; 2]> for Coord<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self { x, y }
    }
}

impl<N: CoordNum> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Coord only has two dimensions"),
        }
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
