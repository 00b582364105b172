// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-dimension vectors.

use core::array;
use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::{Planar, Real, Vector};

/// A vector with `N` coordinates.
///
/// Curves over three or four dimensional points, or over 2D points carrying
/// extra channels such as width or color, use this type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VecN<T, const N: usize>(pub [T; N]);

/// A 3D vector.
pub type Vec3<T> = VecN<T, 3>;

/// A 4D vector.
pub type Vec4<T> = VecN<T, 4>;

impl<T, const N: usize> VecN<T, N> {
    /// Create a new vector from its coordinates.
    #[inline]
    pub const fn new(coords: [T; N]) -> Self {
        VecN(coords)
    }

    /// The coordinates as an array.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Real, const N: usize> VecN<T, N> {
    #[inline]
    fn zip(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        VecN(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    #[inline]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        VecN(array::from_fn(|i| f(self.0[i])))
    }
}

impl<T: Real, const N: usize> Default for VecN<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Real, const N: usize> Vector for VecN<T, N> {
    type Scalar = T;

    const DIM: usize = N;

    const ZERO: Self = VecN([T::ZERO; N]);

    #[inline]
    fn component(self, i: usize) -> T {
        self.0[i]
    }

    #[inline]
    fn scale(self, s: T) -> Self {
        self.map(|x| x * s)
    }

    #[inline]
    fn dot(self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

impl<T: Real> Planar for VecN<T, 2> {
    #[inline]
    fn from_xy(x: T, y: T) -> Self {
        VecN([x, y])
    }
}

impl<T, const N: usize> From<[T; N]> for VecN<T, N> {
    #[inline]
    fn from(coords: [T; N]) -> Self {
        VecN(coords)
    }
}

impl<T, const N: usize> Index<usize> for VecN<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for VecN<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Real, const N: usize> Add for VecN<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.zip(other, |a, b| a + b)
    }
}

impl<T: Real, const N: usize> Sub for VecN<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }
}

impl<T: Real, const N: usize> Mul<T> for VecN<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, other: T) -> Self {
        self.scale(other)
    }
}

impl<T: Real, const N: usize> Div<T> for VecN<T, N> {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: T) -> Self {
        self.scale(other.recip())
    }
}

impl<T: Real, const N: usize> Neg for VecN<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl<T> From<VecN<T, 3>> for mint::Vector3<T> {
    #[inline]
    fn from(v: VecN<T, 3>) -> mint::Vector3<T> {
        let [x, y, z] = v.0;
        mint::Vector3 { x, y, z }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector3<T>> for VecN<T, 3> {
    #[inline]
    fn from(v: mint::Vector3<T>) -> VecN<T, 3> {
        VecN([v.x, v.y, v.z])
    }
}

#[cfg(feature = "mint")]
impl<T> From<VecN<T, 3>> for mint::Point3<T> {
    #[inline]
    fn from(v: VecN<T, 3>) -> mint::Point3<T> {
        let [x, y, z] = v.0;
        mint::Point3 { x, y, z }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Point3<T>> for VecN<T, 3> {
    #[inline]
    fn from(v: mint::Point3<T>) -> VecN<T, 3> {
        VecN([v.x, v.y, v.z])
    }
}

#[cfg(feature = "mint")]
impl<T> From<VecN<T, 4>> for mint::Vector4<T> {
    #[inline]
    fn from(v: VecN<T, 4>) -> mint::Vector4<T> {
        let [x, y, z, w] = v.0;
        mint::Vector4 { x, y, z, w }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector4<T>> for VecN<T, 4> {
    #[inline]
    fn from(v: mint::Vector4<T>) -> VecN<T, 4> {
        VecN([v.x, v.y, v.z, v.w])
    }
}

#[cfg(test)]
mod tests {
    use super::{Vec3, VecN};
    use crate::{Planar, Vector};

    #[test]
    fn vec3_ops() {
        let a: Vec3<f64> = VecN([1.0, 2.0, 2.0]);
        let b: Vec3<f64> = VecN([0.5, -1.0, 4.0]);
        assert_eq!(a + b, VecN([1.5, 1.0, 6.0]));
        assert_eq!(a - b, VecN([0.5, 3.0, -2.0]));
        assert_eq!(-a, VecN([-1.0, -2.0, -2.0]));
        assert_eq!(a * 2.0, VecN([2.0, 4.0, 4.0]));
        assert_eq!(a.dot(b), 6.5);
        assert_eq!(a.length(), 3.0);
        assert_eq!(a[2], 2.0);
        assert_eq!(<Vec3<f32> as Vector>::DIM, 3);
        assert_eq!(Vec3::<f32>::default(), Vec3::ZERO);
    }

    #[test]
    fn planar_vecn() {
        let v: VecN<f64, 2> = VecN([3.0, 4.0]);
        assert_eq!(v.turn_90(), VecN([-4.0, 3.0]));
        assert_eq!(v.cross(v.turn_90()), 25.0);
    }
}
