// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating point scalars.

use core::fmt::Debug;

use num_traits::Float;

use crate::Vector;

/// The precision category of a scalar type.
///
/// Several algorithms pick their iteration counts from a small table keyed
/// by this category rather than by the concrete type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit floats.
    Single,
    /// 64-bit floats.
    Double,
}

/// A floating point scalar usable as a curve coordinate.
///
/// Every scalar is also a one-dimensional [`Vector`], so scalar valued
/// curves (such as taper profiles) are ordinary curves.
pub trait Real: Float + Debug + Default + Vector<Scalar = Self> + 'static {
    /// The precision category of this type.
    const PRECISION: Precision;

    /// Convert from an `f64` constant, rounding as needed.
    fn from_f64(x: f64) -> Self;

    /// One half.
    #[inline]
    fn half() -> Self {
        Self::from_f64(0.5)
    }
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::{Precision, Real};

    #[test]
    fn precision_category() {
        assert_eq!(f32::PRECISION, Precision::Single);
        assert_eq!(f64::PRECISION, Precision::Double);
    }

    #[test]
    fn from_f64_rounds() {
        assert_eq!(f32::from_f64(1.0 / 3.0), 1.0f32 / 3.0);
        assert_eq!(f64::half(), 0.5);
    }
}
