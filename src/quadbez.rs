// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use arrayvec::ArrayVec;
use num_traits::One;
use smallvec::SmallVec;

use crate::common::in_unit;
use crate::extrema::extrema;
use crate::fit::quad_through;
use crate::{
    CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema, Real,
    Vector, MAX_EXTREMA,
};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct QuadBez<P> {
    pub p0: P,
    pub p1: P,
    pub p2: P,
}

impl<P: Vector> QuadBez<P> {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub const fn new(p0: P, p1: P, p2: P) -> Self {
        QuadBez { p0, p1, p2 }
    }

    /// The quadratic from `p0` to `p2` passing through `m` at `t = 1/2`.
    #[inline]
    pub fn through(p0: P, m: P, p2: P) -> Self {
        QuadBez::new(p0, quad_through(p0, m, p2), p2)
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    #[inline]
    pub fn raise(&self) -> CubicBez<P> {
        let two_thirds = P::Scalar::from_f64(2.0 / 3.0);
        CubicBez::new(
            self.p0,
            self.p0 + (self.p1 - self.p0).scale(two_thirds),
            self.p2 + (self.p1 - self.p2).scale(two_thirds),
            self.p2,
        )
    }
}

impl<P: Vector> ParamCurve for QuadBez<P> {
    type Point = P;

    #[inline]
    fn eval(&self, t: P::Scalar) -> P {
        let mt = P::Scalar::one() - t;
        let two = P::Scalar::from_f64(2.0);
        self.p0.scale(mt * mt) + (self.p1.scale(mt * two) + self.p2.scale(t)).scale(t)
    }

    #[inline]
    fn deriv_at(&self, t: P::Scalar) -> P {
        let two = P::Scalar::from_f64(2.0);
        (self.p1 - self.p0).lerp(self.p2 - self.p1, t).scale(two)
    }

    fn split(&self, t: P::Scalar) -> (Self, Self) {
        debug_assert!(in_unit(t), "split parameter {t:?} outside [0, 1]");
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let pm = p01.lerp(p12, t);
        (QuadBez::new(self.p0, p01, pm), QuadBez::new(pm, p12, self.p2))
    }

    #[inline]
    fn start(&self) -> P {
        self.p0
    }

    #[inline]
    fn end(&self) -> P {
        self.p2
    }

    #[inline]
    fn points(&self) -> ArrayVec<P, 4> {
        [self.p0, self.p1, self.p2].into_iter().collect()
    }

    #[inline]
    fn arity(&self) -> usize {
        3
    }
}

impl<P: Vector> ParamCurveDeriv for QuadBez<P> {
    type DerivResult = Line<P>;

    #[inline]
    fn deriv(&self) -> Line<P> {
        let two = P::Scalar::from_f64(2.0);
        Line::new((self.p1 - self.p0).scale(two), (self.p2 - self.p1).scale(two))
    }
}

impl<P: Vector> ParamCurveArclen for QuadBez<P> {}

impl<P: Vector> ParamCurveExtrema for QuadBez<P> {
    fn extrema(&self) -> SmallVec<[P::Scalar; MAX_EXTREMA]> {
        extrema(&[self.p0, self.p1, self.p2])
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{
        ParamCurve, ParamCurveDeriv, ParamCurveExtrema, ParamCurveNormal, QuadBez, Vec2, Vector,
    };

    fn v(x: f64, y: f64) -> Vec2<f64> {
        Vec2::new(x, y)
    }

    fn assert_near(p0: Vec2<f64>, p1: Vec2<f64>, epsilon: f64) {
        assert!((p1 - p0).length() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn quadbez_eval() {
        let q = QuadBez::new(v(5.0, 0.0), v(-3.0, 7.0), v(-4.0, -1.0));
        let expected = [
            (0.0, v(5.0, 0.0)),
            (0.25, v(1.4375, 2.5625)),
            (0.5, v(-1.25, 3.25)),
            (0.75, v(-3.0625, 2.0625)),
            (1.0, v(-4.0, -1.0)),
        ];
        for (t, p) in expected {
            assert_near(q.eval(t), p, 1e-12);
        }
        assert_eq!(q.eval(0.0), q.start());
        assert_eq!(q.eval(1.0), q.end());
    }

    #[test]
    fn quadbez_deriv() {
        let q = QuadBez::new(v(-5.0, -3.0), v(-9.0, 12.0), v(9.0, 10.0));
        let expected = [
            (0.0, v(-8.0, 30.0)),
            (0.25, v(3.0, 21.5)),
            (0.5, v(14.0, 13.0)),
            (0.75, v(25.0, 4.5)),
            (1.0, v(36.0, -4.0)),
        ];
        let deriv = q.deriv();
        for (t, p) in expected {
            assert_near(q.deriv_at(t), p, 1e-12);
            assert_near(deriv.eval(t), p, 1e-12);
        }
    }

    #[test]
    fn quadbez_tangent_normal() {
        let q = QuadBez::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0));
        assert_near(q.tangent(0.5), v(1.0, 0.0), 1e-12);
        assert_near(q.normal(0.5), v(0.0, 1.0), 1e-12);
        let s = core::f64::consts::FRAC_1_SQRT_2;
        assert_near(q.normal(0.0), v(-s, s), 1e-12);
    }

    #[test]
    fn quadbez_split() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = QuadBez::new(v(-1.0, 0.0), v(10.0, 4.0), v(4.0, 4.0));
        for _ in 0..50 {
            let t = rng.random_range(0.0..1.0);
            let (l, r) = q.split(t);
            assert_eq!(l.end(), r.start());
            assert_near(l.end(), q.eval(t), 1e-12);
            assert_near(l.eval(1.0), q.eval(t), 1e-12);
            assert_near(r.eval(0.0), q.eval(t), 1e-12);
            assert_eq!(q.left_split(t), l);
            assert_eq!(q.right_split(t), r);
            // The halves trace the same curve.
            assert_near(l.eval(0.5), q.eval(t * 0.5), 1e-12);
            assert_near(r.eval(0.5), q.eval(t + (1.0 - t) * 0.5), 1e-12);
        }
    }

    #[test]
    fn quadbez_split_into() {
        let q = QuadBez::new(v(0.0, 0.0), v(1.0, 2.0), v(2.0, 0.0));
        let mut out = Vec::new();
        assert_eq!(q.split_into(0.25, &mut out), 5);
        let (l, r) = q.split(0.25);
        assert_eq!(out, [l.p0, l.p1, l.p2, r.p1, r.p2]);
    }

    #[test]
    fn quadbez_subsegment() {
        let q = QuadBez::new(v(3.1, 4.1), v(5.9, 2.6), v(5.3, 5.8));
        let t0 = 0.1;
        let t1 = 0.8;
        let qs = q.subsegment(t0..t1);
        let epsilon = 1e-12;
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(q.eval(ts), qs.eval(t), epsilon);
        }
        assert_near(q.subsegment(0.0..0.0).eval(0.5), q.p0, epsilon);
    }

    #[test]
    fn quadbez_raise() {
        let q = QuadBez::new(v(3.1, 4.1), v(5.9, 2.6), v(5.3, 5.8));
        let c = q.raise();
        for i in 0..=10 {
            let t = i as f64 * 0.1;
            assert_near(q.eval(t), c.eval(t), 1e-12);
        }
    }

    #[test]
    fn quadbez_through() {
        let q = QuadBez::through(v(0.0, 0.0), v(1.0, 1.0), v(3.0, 0.0));
        assert_near(q.eval(0.5), v(1.0, 1.0), 1e-12);
    }

    #[test]
    fn quadbez_extrema() {
        // y = x^2
        let q = QuadBez::new(v(-1.0, 1.0), v(0.0, -1.0), v(1.0, 1.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn scalar_quad() {
        let q = QuadBez::new(1.0f32, 3.0, 2.0);
        assert_eq!(q.eval(0.5), 2.25);
        assert_eq!(q.deriv_at(0.5), 1.0);
    }
}
