// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Planar, Real, Vector};

/// A 2D vector.
///
/// This serves both as a point and as a displacement, generic over the
/// scalar type.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec2<T> {
    /// The x-coordinate.
    pub x: T,
    /// The y-coordinate.
    pub y: T,
}

impl<T> Vec2<T> {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Vec2 { x, y }
    }
}

impl<T: Real> Vec2<T> {
    /// Create a `Vec2` with the same value for x and y
    #[inline]
    pub const fn splat(v: T) -> Self {
        Vec2 { x: v, y: v }
    }

    /// Is this vector finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn cast<U: Real>(self) -> Vec2<U> {
        Vec2::new(cast_scalar(self.x), cast_scalar(self.y))
    }
}

/// Convert between scalar types, going through `f64`.
#[inline]
fn cast_scalar<T: Real, U: Real>(x: T) -> U {
    U::from_f64(x.to_f64().unwrap_or(f64::NAN))
}

impl<T: Real> Vector for Vec2<T> {
    type Scalar = T;

    const DIM: usize = 2;

    const ZERO: Self = Vec2 {
        x: T::ZERO,
        y: T::ZERO,
    };

    #[inline]
    fn component(self, i: usize) -> T {
        match i {
            0 => self.x,
            1 => self.y,
            _ => panic!("component {i} out of range for Vec2"),
        }
    }

    #[inline]
    fn scale(self, s: T) -> Self {
        Vec2::new(self.x * s, self.y * s)
    }

    #[inline]
    fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    fn length(self) -> T {
        self.x.hypot(self.y)
    }
}

impl<T: Real> Planar for Vec2<T> {
    #[inline]
    fn from_xy(x: T, y: T) -> Self {
        Vec2::new(x, y)
    }

    #[inline]
    fn turn_90(self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    #[inline]
    fn from(v: (T, T)) -> Self {
        Vec2 { x: v.0, y: v.1 }
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Vec2 { x, y }
    }
}

impl<T> From<Vec2<T>> for (T, T) {
    #[inline]
    fn from(v: Vec2<T>) -> (T, T) {
        (v.x, v.y)
    }
}

impl<T: Real> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Real> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Real> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Real> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Real> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, other: T) -> Self {
        self.scale(other)
    }
}

impl<T: Real> MulAssign<T> for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, other: T) {
        *self = self.scale(other);
    }
}

macro_rules! scalar_mul_vec2 {
    ($($ty:ty),*) => {$(
        impl Mul<Vec2<$ty>> for $ty {
            type Output = Vec2<$ty>;

            #[inline]
            fn mul(self, other: Vec2<$ty>) -> Vec2<$ty> {
                other.scale(self)
            }
        }
    )*};
}

scalar_mul_vec2!(f32, f64);

impl<T: Real> Div<T> for Vec2<T> {
    type Output = Self;

    /// Note: division by a scalar is implemented by multiplying by the reciprocal.
    ///
    /// This is more efficient but has different roundoff behavior than division.
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: T) -> Self {
        self.scale(other.recip())
    }
}

impl<T: Real> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "𝐯=(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl<T> From<Vec2<T>> for mint::Vector2<T> {
    #[inline]
    fn from(p: Vec2<T>) -> mint::Vector2<T> {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector2<T>> for Vec2<T> {
    #[inline]
    fn from(p: mint::Vector2<T>) -> Vec2<T> {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vec2<T>> for mint::Point2<T> {
    #[inline]
    fn from(p: Vec2<T>) -> mint::Point2<T> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Point2<T>> for Vec2<T> {
    #[inline]
    fn from(p: mint::Point2<T>) -> Vec2<T> {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::Vec2;
    use crate::Vector;

    #[test]
    fn display() {
        let v = Vec2::new(1.2332421f64, 532.10721213123);
        let s = format!("{:.2}", v);
        assert_eq!(s.as_str(), "𝐯=(1.23, 532.11)");
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0f64, 2.0);
        let b = Vec2::new(3.0f64, -4.0);
        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec2::new(1.5, -2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(b.length(), 5.0);
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(Vec2::<f32>::ZERO, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn cast_precision() {
        let v = Vec2::new(0.1f64, -2.5);
        let w: Vec2<f32> = v.cast();
        assert_eq!(w, Vec2::new(0.1f32, -2.5));
    }

    #[cfg(feature = "mint")]
    #[test]
    fn mint_round_trip() {
        let v = Vec2::new(1.0f64, 2.0);
        let m: mint::Point2<f64> = v.into();
        assert_eq!(Vec2::from(m), v);
    }
}
