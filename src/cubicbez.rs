// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;
use num_traits::One;
use smallvec::SmallVec;

use crate::common::in_unit;
use crate::extrema::{cusp, extrema};
use crate::fit::cubic_through;
use crate::{
    ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema, QuadBez, Real, Vector,
    MAX_EXTREMA,
};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct CubicBez<P> {
    pub p0: P,
    pub p1: P,
    pub p2: P,
    pub p3: P,
}

impl<P: Vector> CubicBez<P> {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub const fn new(p0: P, p1: P, p2: P, p3: P) -> Self {
        CubicBez { p0, p1, p2, p3 }
    }

    /// The cubic from `a` to `d` passing through `k0` at `t = 1/3` and
    /// `k1` at `t = 2/3`.
    #[inline]
    pub fn through(a: P, k0: P, k1: P, d: P) -> Self {
        let (b, c) = cubic_through(a, k0, k1, d);
        CubicBez::new(a, b, c, d)
    }

    /// Find a cusp, where the derivative vanishes in every dimension.
    ///
    /// Returns the parameter of the first cusp in `[0, 1]`, if any.
    /// Dimensions along which the curve does not move are ignored, so a
    /// planar curve embedded in 3D still reports its cusp. The points must
    /// have at least two dimensions.
    pub fn cusp(&self) -> Option<P::Scalar> {
        cusp(&[self.p0, self.p1, self.p2, self.p3])
    }
}

impl<P: Vector> ParamCurve for CubicBez<P> {
    type Point = P;

    #[inline]
    fn eval(&self, t: P::Scalar) -> P {
        let mt = P::Scalar::one() - t;
        let three = P::Scalar::from_f64(3.0);
        self.p0.scale(mt * mt * mt)
            + (self.p1.scale(mt * mt * three)
                + (self.p2.scale(mt * three) + self.p3.scale(t)).scale(t))
            .scale(t)
    }

    #[inline]
    fn deriv_at(&self, t: P::Scalar) -> P {
        let mt = P::Scalar::one() - t;
        let two = P::Scalar::from_f64(2.0);
        let three = P::Scalar::from_f64(3.0);
        ((self.p1 - self.p0).scale(mt * mt)
            + (self.p2 - self.p1).scale(two * mt * t)
            + (self.p3 - self.p2).scale(t * t))
        .scale(three)
    }

    fn split(&self, t: P::Scalar) -> (Self, Self) {
        debug_assert!(in_unit(t), "split parameter {t:?} outside [0, 1]");
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let pm = p012.lerp(p123, t);
        (
            CubicBez::new(self.p0, p01, p012, pm),
            CubicBez::new(pm, p123, p23, self.p3),
        )
    }

    #[inline]
    fn start(&self) -> P {
        self.p0
    }

    #[inline]
    fn end(&self) -> P {
        self.p3
    }

    #[inline]
    fn points(&self) -> ArrayVec<P, 4> {
        ArrayVec::from([self.p0, self.p1, self.p2, self.p3])
    }

    #[inline]
    fn arity(&self) -> usize {
        4
    }
}

impl<P: Vector> ParamCurveDeriv for CubicBez<P> {
    type DerivResult = QuadBez<P>;

    #[inline]
    fn deriv(&self) -> QuadBez<P> {
        let three = P::Scalar::from_f64(3.0);
        QuadBez::new(
            (self.p1 - self.p0).scale(three),
            (self.p2 - self.p1).scale(three),
            (self.p3 - self.p2).scale(three),
        )
    }
}

impl<P: Vector> ParamCurveArclen for CubicBez<P> {}

impl<P: Vector> ParamCurveExtrema for CubicBez<P> {
    fn extrema(&self) -> SmallVec<[P::Scalar; MAX_EXTREMA]> {
        extrema(&[self.p0, self.p1, self.p2, self.p3])
    }
}
