// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier segments of any supported degree.

use core::fmt;
use core::ops::Range;

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::fit::through_controls;
use crate::{
    CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, PointSink, QuadBez, Vector,
    MAX_EXTREMA,
};

/// A segment of a Bézier path, of degree 1 to 3.
///
/// This is the type to reach for when the number of control points is only
/// known at runtime, for example when reading them from a slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BezSeg<P> {
    /// A line segment.
    Line(Line<P>),
    /// A quadratic bezier segment.
    Quad(QuadBez<P>),
    /// A cubic bezier segment.
    Cubic(CubicBez<P>),
}

/// The error returned when a slice holds no supported number of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArityError {
    /// Fewer than two points were given.
    TooFew(usize),
    /// More than four points were given.
    TooMany(usize),
}

impl ArityError {
    pub(crate) fn new(len: usize) -> Self {
        if len < 2 {
            ArityError::TooFew(len)
        } else {
            ArityError::TooMany(len)
        }
    }
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityError::TooFew(n) => write!(f, "Too few control points: {n}, expected 2 to 4"),
            ArityError::TooMany(n) => write!(f, "Too many control points: {n}, expected 2 to 4"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArityError {}

impl<P: Vector> BezSeg<P> {
    /// Build a segment from 2 to 4 control points.
    pub fn from_points(points: &[P]) -> Result<Self, ArityError> {
        match *points {
            [p0, p1] => Ok(BezSeg::Line(Line::new(p0, p1))),
            [p0, p1, p2] => Ok(BezSeg::Quad(QuadBez::new(p0, p1, p2))),
            [p0, p1, p2, p3] => Ok(BezSeg::Cubic(CubicBez::new(p0, p1, p2, p3))),
            _ => Err(ArityError::new(points.len())),
        }
    }

    /// Build the segment passing through 2 to 4 waypoints.
    ///
    /// See [`through_controls`](crate::through_controls) for the parameters
    /// at which the waypoints are reached.
    pub fn through(waypoints: &[P]) -> Result<Self, ArityError> {
        Self::from_points(&through_controls(waypoints)?)
    }

    /// Convert this segment to a cubic bezier.
    pub fn to_cubic(&self) -> CubicBez<P> {
        match *self {
            BezSeg::Line(line) => line.raise().raise(),
            BezSeg::Quad(quad) => quad.raise(),
            BezSeg::Cubic(cubic) => cubic,
        }
    }
}

impl<P: Vector> ParamCurve for BezSeg<P> {
    type Point = P;

    fn eval(&self, t: P::Scalar) -> P {
        match *self {
            BezSeg::Line(line) => line.eval(t),
            BezSeg::Quad(quad) => quad.eval(t),
            BezSeg::Cubic(cubic) => cubic.eval(t),
        }
    }

    fn deriv_at(&self, t: P::Scalar) -> P {
        match *self {
            BezSeg::Line(line) => line.deriv_at(t),
            BezSeg::Quad(quad) => quad.deriv_at(t),
            BezSeg::Cubic(cubic) => cubic.deriv_at(t),
        }
    }

    fn split(&self, t: P::Scalar) -> (Self, Self) {
        match *self {
            BezSeg::Line(line) => {
                let (a, b) = line.split(t);
                (BezSeg::Line(a), BezSeg::Line(b))
            }
            BezSeg::Quad(quad) => {
                let (a, b) = quad.split(t);
                (BezSeg::Quad(a), BezSeg::Quad(b))
            }
            BezSeg::Cubic(cubic) => {
                let (a, b) = cubic.split(t);
                (BezSeg::Cubic(a), BezSeg::Cubic(b))
            }
        }
    }

    fn subsegment(&self, range: Range<P::Scalar>) -> Self {
        match *self {
            BezSeg::Line(line) => BezSeg::Line(line.subsegment(range)),
            BezSeg::Quad(quad) => BezSeg::Quad(quad.subsegment(range)),
            BezSeg::Cubic(cubic) => BezSeg::Cubic(cubic.subsegment(range)),
        }
    }

    fn start(&self) -> P {
        match *self {
            BezSeg::Line(line) => line.p0,
            BezSeg::Quad(quad) => quad.p0,
            BezSeg::Cubic(cubic) => cubic.p0,
        }
    }

    fn end(&self) -> P {
        match *self {
            BezSeg::Line(line) => line.p1,
            BezSeg::Quad(quad) => quad.p2,
            BezSeg::Cubic(cubic) => cubic.p3,
        }
    }

    fn points(&self) -> ArrayVec<P, 4> {
        match *self {
            BezSeg::Line(line) => line.points(),
            BezSeg::Quad(quad) => quad.points(),
            BezSeg::Cubic(cubic) => cubic.points(),
        }
    }

    fn arity(&self) -> usize {
        match self {
            BezSeg::Line(_) => 2,
            BezSeg::Quad(_) => 3,
            BezSeg::Cubic(_) => 4,
        }
    }

    fn write_points(&self, sink: impl PointSink<P>) -> usize {
        match *self {
            BezSeg::Line(line) => line.write_points(sink),
            BezSeg::Quad(quad) => quad.write_points(sink),
            BezSeg::Cubic(cubic) => cubic.write_points(sink),
        }
    }
}

impl<P: Vector> ParamCurveArclen for BezSeg<P> {
    fn arclen(&self) -> P::Scalar {
        match *self {
            BezSeg::Line(line) => line.arclen(),
            BezSeg::Quad(quad) => quad.arclen(),
            BezSeg::Cubic(cubic) => cubic.arclen(),
        }
    }

    fn arclen_samples(&self, n: usize) -> P::Scalar {
        match *self {
            BezSeg::Line(line) => line.arclen_samples(n),
            BezSeg::Quad(quad) => quad.arclen_samples(n),
            BezSeg::Cubic(cubic) => cubic.arclen_samples(n),
        }
    }
}

impl<P: Vector> ParamCurveExtrema for BezSeg<P> {
    fn extrema(&self) -> SmallVec<[P::Scalar; MAX_EXTREMA]> {
        match *self {
            BezSeg::Line(line) => line.extrema(),
            BezSeg::Quad(quad) => quad.extrema(),
            BezSeg::Cubic(cubic) => cubic.extrema(),
        }
    }
}

impl<P> From<Line<P>> for BezSeg<P> {
    fn from(line: Line<P>) -> Self {
        BezSeg::Line(line)
    }
}

impl<P> From<QuadBez<P>> for BezSeg<P> {
    fn from(quad: QuadBez<P>) -> Self {
        BezSeg::Quad(quad)
    }
}

impl<P> From<CubicBez<P>> for BezSeg<P> {
    fn from(cubic: CubicBez<P>) -> Self {
        BezSeg::Cubic(cubic)
    }
}
