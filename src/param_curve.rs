// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use core::ops::Range;

use arrayvec::ArrayVec;
use num_traits::Float;
use smallvec::SmallVec;

use crate::arclen::{vincent_forsey, ArclenSamples};
use crate::common::subsegment_epsilon;
use crate::{Planar, PointSink, Real, Vector};

/// The scalar type of a curve's points.
pub type Scalar<C> = <<C as ParamCurve>::Point as Vector>::Scalar;

/// The number of extrema that fit inline.
///
/// A cubic curve has at most two extrema per dimension, so results for curves
/// of up to two dimensions never allocate.
pub const MAX_EXTREMA: usize = 4;

/// A curve parametrized by a scalar.
///
/// If the result is interpreted as a point, this represents a curve.
/// But the result can be interpreted as a vector as well.
pub trait ParamCurve: Sized {
    /// The type of the control points and of evaluated points.
    type Point: Vector;

    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1]; values outside it extrapolate.
    fn eval(&self, t: Scalar<Self>) -> Self::Point;

    /// The first derivative at parameter `t`.
    fn deriv_at(&self, t: Scalar<Self>) -> Self::Point;

    /// The unit tangent at parameter `t`.
    ///
    /// This is `NaN` where the derivative vanishes.
    #[inline]
    fn tangent(&self, t: Scalar<Self>) -> Self::Point {
        self.deriv_at(t).normalize()
    }

    /// Split the curve at `t`, using de Casteljau.
    ///
    /// The end of the first half and the start of the second half are the
    /// same value, bit for bit.
    fn split(&self, t: Scalar<Self>) -> (Self, Self);

    /// The part of the curve on `[0, t]`, reparametrized to `[0, 1]`.
    #[inline]
    fn left_split(&self, t: Scalar<Self>) -> Self {
        self.split(t).0
    }

    /// The part of the curve on `[t, 1]`, reparametrized to `[0, 1]`.
    #[inline]
    fn right_split(&self, t: Scalar<Self>) -> Self {
        self.split(t).1
    }

    /// Split at `t`, writing the control points of both halves to `sink`.
    ///
    /// The shared point is written once, so `2 * arity - 1` points are
    /// written. Returns that count.
    fn split_into(&self, t: Scalar<Self>, mut sink: impl PointSink<Self::Point>) -> usize {
        let (left, right) = self.split(t);
        let n = left.write_points(&mut sink);
        let rest = right.points();
        sink.push_all(rest.iter().skip(1).copied());
        n + rest.len() - 1
    }

    /// Get a subsegment of the curve for the given parameter range.
    ///
    /// The range end is split off first and the result is split again at
    /// the start, rescaled into the new parametrization. Ranges ending
    /// within a few ulps of zero are taken as a single split at the start.
    fn subsegment(&self, range: Range<Scalar<Self>>) -> Self {
        let (t0, t1) = (range.start, range.end);
        debug_assert!(t0 <= t1, "subsegment range is reversed");
        if t1.abs() <= subsegment_epsilon() {
            return self.left_split(t0);
        }
        self.left_split(t1).right_split(t0 / t1)
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (Self, Self) {
        self.split(<Scalar<Self> as Real>::half())
    }

    /// The start point.
    fn start(&self) -> Self::Point;

    /// The end point.
    fn end(&self) -> Self::Point;

    /// The control points, in order.
    fn points(&self) -> ArrayVec<Self::Point, 4>;

    /// The number of control points.
    #[inline]
    fn arity(&self) -> usize {
        self.points().len()
    }

    /// Append the control points to `sink`, returning how many were written.
    fn write_points(&self, mut sink: impl PointSink<Self::Point>) -> usize {
        let points = self.points();
        sink.push_all(points.iter().copied());
        points.len()
    }
}

/// A differentiable parametrized curve.
pub trait ParamCurveDeriv: ParamCurve {
    /// The parametric curve obtained by taking the derivative of this one.
    type DerivResult: ParamCurve<Point = Self::Point>;

    /// The derivative of the curve.
    ///
    /// Note that the type of the return value is somewhat inaccurate, as
    /// the derivative of a curve (mapping of param to point) is a mapping
    /// of param to vector. We choose to accept this rather than have a
    /// more complex type scheme.
    fn deriv(&self) -> Self::DerivResult;
}

/// A parametrized curve that can have its arc length measured.
pub trait ParamCurveArclen: ParamCurve {
    /// The arc length of the curve.
    ///
    /// The number of samples is picked from [`ArclenSamples`] according to
    /// the curve degree and the scalar precision.
    #[inline]
    fn arclen(&self) -> Scalar<Self> {
        let n = ArclenSamples::for_precision(<Scalar<Self> as Real>::PRECISION)
            .for_arity(self.arity());
        self.arclen_samples(n)
    }

    /// The arc length, using `n` samples of the circle-arc estimator.
    ///
    /// `n` should be odd and at least 3.
    #[inline]
    fn arclen_samples(&self, n: usize) -> Scalar<Self> {
        vincent_forsey(self, n)
    }
}

/// A parametrized curve that reports its extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Compute the extrema of the curve.
    ///
    /// Extrema on the closed interval `[0, 1]` count, so a curve whose
    /// tangent is axis-aligned at an endpoint reports that endpoint. At
    /// most four extrema can be reported for a 2D cubic.
    ///
    /// The extrema should be reported in increasing parameter order.
    fn extrema(&self) -> SmallVec<[Scalar<Self>; MAX_EXTREMA]>;

    /// Return parameter ranges, each of which is monotonic within the range.
    fn extrema_ranges(&self) -> SmallVec<[Range<Scalar<Self>>; MAX_EXTREMA + 1]> {
        let mut result = SmallVec::new();
        let mut t0 = <Scalar<Self> as num_traits::Zero>::zero();
        for t in self.extrema() {
            result.push(t0..t);
            t0 = t;
        }
        result.push(t0..<Scalar<Self> as num_traits::One>::one());
        result
    }
}

/// A planar curve that reports its normal.
pub trait ParamCurveNormal: ParamCurve
where
    Self::Point: Planar,
{
    /// The unit normal at parameter `t`.
    ///
    /// This is the tangent turned by 90 degrees counter-clockwise, so it
    /// points to the left of the direction of travel in a y-up frame.
    #[inline]
    fn normal(&self, t: Scalar<Self>) -> Self::Point {
        self.tangent(t).turn_90()
    }
}

impl<C: ParamCurve> ParamCurveNormal for C where C::Point: Planar {}
