// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc length estimation by circle-arc approximation.
//!
//! This is the method from "Fast and Accurate Parametric Curve Length
//! Computation" by Stephen Vincent and David Forsey, Journal of Graphics
//! Tools 6(4), 2001. The curve is sampled at evenly spaced parameters and
//! every three consecutive samples are taken to lie on a circular arc,
//! whose length is estimated from the chords.

use crate::{ParamCurve, Precision, Real, Vector};

/// Sample counts for the arc length estimator.
///
/// Counts are odd. More samples are needed for cubics than for quadratics,
/// and double precision can make use of more samples than single precision
/// before roundoff dominates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArclenSamples {
    /// Samples for quadratic curves.
    pub quad: usize,
    /// Samples for cubic curves.
    pub cubic: usize,
}

impl ArclenSamples {
    /// The sample counts for a precision category.
    pub const fn for_precision(precision: Precision) -> Self {
        match precision {
            Precision::Single => ArclenSamples {
                quad: 25,
                cubic: 35,
            },
            Precision::Double => ArclenSamples {
                quad: 41,
                cubic: 61,
            },
        }
    }

    /// The sample count for a curve with `arity` control points.
    ///
    /// Lines and constants need only their endpoints.
    pub const fn for_arity(self, arity: usize) -> usize {
        match arity {
            0..=2 => 3,
            3 => self.quad,
            _ => self.cubic,
        }
    }
}

/// Length of the circular arc through three points, from its chords.
///
/// `d1` is the chord between the outer points, `d2` the sum of the two
/// inner chords.
#[inline]
fn circle_arc<T: Real>(d1: T, d2: T) -> T {
    d2 + (d2 - d1) / T::from_f64(3.0)
}

/// Length of the arc through `a`, `b` and `c`.
#[inline]
fn window<P: Vector>(a: P, b: P, c: P) -> P::Scalar {
    circle_arc((c - a).length(), (b - a).length() + (c - b).length())
}

/// Estimate the arc length of `c` from `n` evenly spaced samples.
///
/// Every interval except the first and last is covered by two windows. The
/// first and last intervals are covered once by the sliding window and once
/// more by a window at twice the sample density, and the total is halved.
pub(crate) fn vincent_forsey<C, T>(c: &C, n: usize) -> T
where
    C: ParamCurve,
    C::Point: Vector<Scalar = T>,
    T: Real,
{
    debug_assert!(n >= 3 && n % 2 == 1, "sample count must be odd and at least 3");
    let n = n.max(3);
    let delta = T::from_f64((n - 1) as f64).recip();
    let half = T::half();
    let param = |i: usize| T::from_f64(i as f64) * delta;

    let mut total = T::zero();
    let mut p0 = c.start();
    let mut p1 = c.eval(delta);
    for i in 2..n {
        let p2 = if i == n - 1 { c.end() } else { c.eval(param(i)) };
        total = total + window(p0, p1, p2);
        p0 = p1;
        p1 = p2;
    }

    let one = T::one();
    total = total + window(c.start(), c.eval(delta * half), c.eval(delta));
    total = total + window(c.eval(one - delta), c.eval(one - delta * half), c.end());
    total * half
}

#[cfg(test)]
mod tests {
    use super::{vincent_forsey, ArclenSamples};
    use crate::{CubicBez, ParamCurve, ParamCurveArclen, Precision, QuadBez, Vec2};

    fn v(x: f64, y: f64) -> Vec2<f64> {
        Vec2::new(x, y)
    }

    fn assert_rel(actual: f64, expected: f64, tol: f64) {
        assert!(
            ((actual - expected) / expected).abs() < tol,
            "arc length {actual} expected {expected}"
        );
    }

    #[test]
    fn sample_table() {
        let single = ArclenSamples::for_precision(Precision::Single);
        let double = ArclenSamples::for_precision(Precision::Double);
        assert_eq!((single.quad, single.cubic), (25, 35));
        assert_eq!((double.quad, double.cubic), (41, 61));
        assert_eq!(double.for_arity(3), 41);
        assert_eq!(double.for_arity(4), 61);
    }

    #[test]
    fn quad_reference_lengths() {
        // Values from numerical integration.
        let cases = [
            ([v(-5.0, -3.0), v(6.0, 6.0), v(12.0, -5.0)], 20.6084839302),
            ([v(5.0, 0.0), v(-3.0, 7.0), v(-4.0, -1.0)], 12.685172),
            ([v(-1.0, 0.0), v(10.0, 4.0), v(4.0, 4.0)], 10.3360033),
            ([v(2.0, 7.0), v(7.0, -9.0), v(19.0, 20.0)], 30.8623807),
        ];
        for ([p0, p1, p2], expected) in cases {
            assert_rel(QuadBez::new(p0, p1, p2).arclen(), expected, 1e-5);
        }
    }

    #[test]
    fn cubic_reference_lengths() {
        let cases = [
            (
                [v(-5.0, -3.0), v(-9.0, 12.0), v(9.0, 10.0), v(10.0, 2.0)],
                26.8508042,
            ),
            (
                [v(4.0, 5.0), v(-3.0, 7.0), v(-4.0, -1.0), v(4.0, -1.0)],
                14.5075297,
            ),
            (
                [v(0.0, 0.0), v(1.0 / 3.0, 0.0), v(2.0 / 3.0, 1.0 / 3.0), v(1.0, 1.0)],
                1.4789428575,
            ),
        ];
        for ([p0, p1, p2, p3], expected) in cases {
            assert_rel(CubicBez::new(p0, p1, p2, p3).arclen(), expected, 1e-5);
        }
    }

    #[test]
    fn single_precision() {
        let q = QuadBez::new(
            Vec2::new(-5.0f32, -3.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(12.0, -5.0),
        );
        let len = q.arclen();
        assert!((len - 20.608_484).abs() < 1e-3, "{len}");
    }

    #[test]
    fn straight_quad_is_exact() {
        let q = QuadBez::new(v(0.0, 0.0), v(1.5, 2.0), v(3.0, 4.0));
        assert!((vincent_forsey(&q, 5) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn split_lengths_add_up() {
        let c = CubicBez::new(v(-5.0, -3.0), v(-9.0, 12.0), v(9.0, 10.0), v(10.0, 2.0));
        let full = c.arclen();
        for i in 1..10 {
            let t = i as f64 * 0.1;
            let (left, right) = c.split(t);
            assert_rel(left.arclen() + right.arclen(), full, 1e-4);
            let sub = c.subsegment(t * 0.5..t);
            assert!(sub.arclen() <= full);
        }
    }
}
