// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use arrayvec::ArrayVec;
use num_traits::Zero;
use smallvec::SmallVec;

use crate::common::in_unit;
use crate::{
    ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema, QuadBez, Real, Vector,
    MAX_EXTREMA,
};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<P> {
    /// The line's start point.
    pub p0: P,
    /// The line's end point.
    pub p1: P,
}

impl<P: Vector> Line<P> {
    /// Create a new line.
    #[inline]
    pub const fn new(p0: P, p1: P) -> Self {
        Line { p0, p1 }
    }

    /// Raise the order by 1.
    ///
    /// Returns a quadratic Bézier segment that exactly represents this line.
    #[inline]
    pub fn raise(&self) -> QuadBez<P> {
        QuadBez::new(self.p0, self.p0.lerp(self.p1, P::Scalar::half()), self.p1)
    }
}

impl<P: Vector> ParamCurve for Line<P> {
    type Point = P;

    #[inline]
    fn eval(&self, t: P::Scalar) -> P {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn deriv_at(&self, _t: P::Scalar) -> P {
        self.p1 - self.p0
    }

    #[inline]
    fn split(&self, t: P::Scalar) -> (Self, Self) {
        debug_assert!(in_unit(t), "split parameter {t:?} outside [0, 1]");
        let pm = self.eval(t);
        (Line::new(self.p0, pm), Line::new(pm, self.p1))
    }

    #[inline]
    fn start(&self) -> P {
        self.p0
    }

    #[inline]
    fn end(&self) -> P {
        self.p1
    }

    #[inline]
    fn points(&self) -> ArrayVec<P, 4> {
        [self.p0, self.p1].into_iter().collect()
    }

    #[inline]
    fn arity(&self) -> usize {
        2
    }
}

impl<P: Vector> ParamCurveDeriv for Line<P> {
    type DerivResult = ConstPoint<P>;

    #[inline]
    fn deriv(&self) -> ConstPoint<P> {
        ConstPoint(self.p1 - self.p0)
    }
}

impl<P: Vector> ParamCurveArclen for Line<P> {
    #[inline]
    fn arclen(&self) -> P::Scalar {
        (self.p1 - self.p0).length()
    }

    #[inline]
    fn arclen_samples(&self, _n: usize) -> P::Scalar {
        self.arclen()
    }
}

impl<P: Vector> ParamCurveExtrema for Line<P> {
    #[inline]
    fn extrema(&self) -> SmallVec<[P::Scalar; MAX_EXTREMA]> {
        SmallVec::new()
    }
}

/// A trivial "curve" that is just a constant.
///
/// This is the derivative of a [`Line`]. With a scalar point type it also
/// serves as a constant width profile for offsetting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstPoint<P>(pub P);

impl<P: Vector> ParamCurve for ConstPoint<P> {
    type Point = P;

    #[inline]
    fn eval(&self, _t: P::Scalar) -> P {
        self.0
    }

    #[inline]
    fn deriv_at(&self, _t: P::Scalar) -> P {
        P::ZERO
    }

    #[inline]
    fn split(&self, _t: P::Scalar) -> (Self, Self) {
        (*self, *self)
    }

    #[inline]
    fn subsegment(&self, _range: core::ops::Range<P::Scalar>) -> Self {
        *self
    }

    #[inline]
    fn start(&self) -> P {
        self.0
    }

    #[inline]
    fn end(&self) -> P {
        self.0
    }

    #[inline]
    fn points(&self) -> ArrayVec<P, 4> {
        [self.0].into_iter().collect()
    }

    #[inline]
    fn arity(&self) -> usize {
        1
    }
}

impl<P: Vector> ParamCurveDeriv for ConstPoint<P> {
    type DerivResult = Self;

    #[inline]
    fn deriv(&self) -> Self {
        ConstPoint(P::ZERO)
    }
}

impl<P: Vector> ParamCurveArclen for ConstPoint<P> {
    #[inline]
    fn arclen(&self) -> P::Scalar {
        P::Scalar::zero()
    }

    #[inline]
    fn arclen_samples(&self, _n: usize) -> P::Scalar {
        P::Scalar::zero()
    }
}
