// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The vector capabilities the curve algorithms are written against.

use core::fmt::Debug;
use core::ops::{Add, Neg, Sub};

use num_traits::{Float, One};

use crate::Real;

/// A point or vector in a fixed-dimension space.
///
/// Method names avoid those of [`Float`], since every scalar is also a
/// vector and both traits are usually in scope together.
///
/// The curve algorithms are generic over this trait rather than tied to one
/// vector library. Implementations are provided for `f32` and `f64` (as
/// one-dimensional vectors), [`Vec2`](crate::Vec2) and
/// [`VecN`](crate::VecN); other vector types can implement it directly.
pub trait Vector:
    Copy + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self>
{
    /// The scalar type of the coordinates.
    type Scalar: Real;

    /// Number of coordinates.
    const DIM: usize;

    /// The zero vector.
    const ZERO: Self;

    /// The coordinate along axis `i`.
    ///
    /// Panics if `i >= Self::DIM`.
    fn component(self, i: usize) -> Self::Scalar;

    /// Multiply every coordinate by `s`.
    #[must_use]
    fn scale(self, s: Self::Scalar) -> Self;

    /// Dot product of two vectors.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Magnitude squared of vector.
    #[inline]
    fn length_squared(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Magnitude of vector.
    #[inline]
    fn length(self) -> Self::Scalar {
        self.length_squared().sqrt()
    }

    /// Returns a vector of magnitude 1 with the same direction as `self`.
    ///
    /// This produces `NaN` values when the magnitude is `0`.
    #[inline]
    #[must_use]
    fn normalize(self) -> Self {
        self.scale(self.length().recip())
    }

    /// Linearly interpolate between two vectors.
    ///
    /// Exact at both ends: `t == 0` gives `self` and `t == 1` gives `other`.
    #[inline]
    #[must_use]
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self.scale(Self::Scalar::one() - t) + other.scale(t)
    }
}

/// A two-dimensional [`Vector`].
pub trait Planar: Vector {
    /// Construct from the two coordinates.
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    /// Turn by 90 degrees, counter-clockwise in a y-up frame.
    ///
    /// `(x, y)` becomes `(-y, x)`.
    #[inline]
    #[must_use]
    fn turn_90(self) -> Self {
        Self::from_xy(-self.component(1), self.component(0))
    }

    /// Cross product of two vectors.
    ///
    /// This is signed so that (0, 1) × (1, 0) = -1.
    #[inline]
    fn cross(self, other: Self) -> Self::Scalar {
        self.component(0) * other.component(1) - self.component(1) * other.component(0)
    }
}

macro_rules! scalar_vector {
    ($($ty:ty),*) => {$(
        impl Vector for $ty {
            type Scalar = $ty;

            const DIM: usize = 1;

            const ZERO: $ty = 0.0;

            #[inline]
            fn component(self, i: usize) -> $ty {
                assert!(i == 0, "scalar has a single component");
                self
            }

            #[inline]
            fn scale(self, s: $ty) -> $ty {
                self * s
            }

            #[inline]
            fn dot(self, other: $ty) -> $ty {
                self * other
            }

            #[inline]
            fn length(self) -> $ty {
                self.abs()
            }
        }
    )*};
}

scalar_vector!(f32, f64);

#[cfg(test)]
mod tests {
    use super::{Planar, Vector};
    use crate::Vec2;

    #[test]
    fn scalar_is_one_dimensional() {
        assert_eq!(<f64 as Vector>::DIM, 1);
        assert_eq!((-3.0f64).length(), 3.0);
        assert_eq!((-3.0f64).normalize(), -1.0);
        assert_eq!(2.0f32.lerp(4.0, 0.25), 2.5);
    }

    #[test]
    fn lerp_is_exact_at_ends() {
        let a = Vec2::new(0.1f64, 0.7);
        let b = Vec2::new(-3.3, 1e10);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn turn_and_cross() {
        let v = Vec2::new(3.0f64, 4.0);
        assert_eq!(v.turn_90(), Vec2::new(-4.0, 3.0));
        assert_eq!(v.turn_90().dot(v), 0.0);
        assert_eq!(Vec2::new(0.0f64, 1.0).cross(Vec2::new(1.0, 0.0)), -1.0);
    }
}
