// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting Bézier curves through given points.
//!
//! This inverts the Bernstein blend at fixed parameters: a quadratic passes
//! through its middle waypoint at `t = 1/2`, a cubic through its two middle
//! waypoints at `t = 1/3` and `t = 2/3`. The end waypoints are the end
//! control points.

use arrayvec::ArrayVec;

use crate::{ArityError, Real, Vector};

/// The control point of a quadratic through `p0`, `m` and `p2`.
///
/// The resulting curve passes through `m` at `t = 1/2`.
#[inline]
pub fn quad_through<P: Vector>(p0: P, m: P, p2: P) -> P {
    let quarter = P::Scalar::from_f64(0.25);
    (m - p0.scale(quarter) - p2.scale(quarter)).scale(P::Scalar::from_f64(2.0))
}

/// The inner control points of a cubic through `a`, `k0`, `k1` and `d`.
///
/// The resulting curve passes through `k0` at `t = 1/3` and `k1` at
/// `t = 2/3`.
#[inline]
pub fn cubic_through<P: Vector>(a: P, k0: P, k1: P, d: P) -> (P, P) {
    let c = |x: f64| P::Scalar::from_f64(x);
    let b = k0.scale(c(54.0 / 18.0)) + k1.scale(c(-27.0 / 18.0)) + a.scale(c(-15.0 / 18.0))
        + d.scale(c(6.0 / 18.0));
    let cc = k0.scale(c(27.0 / 6.0)) + a.scale(c(-8.0 / 6.0)) + b.scale(c(-12.0 / 6.0))
        + d.scale(c(-1.0 / 6.0));
    (b, cc)
}

/// Control points of the curve through 2 to 4 waypoints.
///
/// The waypoints are passed through at [`through_params`] of their count.
/// Two waypoints are already the control points of a line, and waypoints
/// that all coincide are returned unchanged.
pub fn through_controls<P: Vector>(waypoints: &[P]) -> Result<ArrayVec<P, 4>, ArityError> {
    let controls = match *waypoints {
        [p0, ..]
            if (2..=4).contains(&waypoints.len()) && waypoints[1..].iter().all(|p| *p == p0) =>
        {
            waypoints.iter().copied().collect()
        }
        [p0, p1] => [p0, p1].into_iter().collect(),
        [p0, m, p2] => [p0, quad_through(p0, m, p2), p2].into_iter().collect(),
        [a, k0, k1, d] => {
            let (b, c) = cubic_through(a, k0, k1, d);
            [a, b, c, d].into_iter().collect()
        }
        _ => return Err(ArityError::new(waypoints.len())),
    };
    Ok(controls)
}

/// The parameters at which a fitted curve with `arity` control points
/// passes through its waypoints.
///
/// These are evenly spaced over `[0, 1]`, ends included. An arity of 1
/// gives the single parameter 0, and arities above 4 are treated as 4.
pub fn through_params<T: Real>(arity: usize) -> ArrayVec<T, 4> {
    let (zero, one) = (T::zero(), T::one());
    match arity {
        0 | 1 => [zero].into_iter().collect(),
        2 => [zero, one].into_iter().collect(),
        3 => [zero, T::half(), one].into_iter().collect(),
        _ => [
            zero,
            T::from_f64(1.0 / 3.0),
            T::from_f64(2.0 / 3.0),
            one,
        ]
        .into_iter()
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{cubic_through, quad_through, through_controls, through_params};
    use crate::{ArityError, CubicBez, ParamCurve, QuadBez, Vec2, Vec3, VecN, Vector};

    fn rand_point(rng: &mut StdRng) -> Vec2<f64> {
        Vec2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
    }

    #[test]
    fn quad_through_midpoint() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let (p0, m, p2) = (rand_point(&mut rng), rand_point(&mut rng), rand_point(&mut rng));
            let q = QuadBez::new(p0, quad_through(p0, m, p2), p2);
            assert!((q.eval(0.5) - m).length() < 1e-9, "{q:?} misses {m:?}");
        }
    }

    #[test]
    fn cubic_through_thirds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let [a, k0, k1, d] = [(); 4].map(|_| rand_point(&mut rng));
            let (b, c) = cubic_through(a, k0, k1, d);
            let cb = CubicBez::new(a, b, c, d);
            assert!((cb.eval(1.0 / 3.0) - k0).length() < 1e-9);
            assert!((cb.eval(2.0 / 3.0) - k1).length() < 1e-9);
        }
    }

    #[test]
    fn fitting_reproduces_curve() {
        let q = QuadBez::new(Vec2::new(5.0f64, 0.0), Vec2::new(-3.0, 7.0), Vec2::new(-4.0, -1.0));
        assert_eq!(quad_through(q.p0, q.eval(0.5), q.p2), q.p1);

        let c: CubicBez<Vec3<f64>> = CubicBez::new(
            VecN([0.0, 1.0, 2.0]),
            VecN([3.0, -1.0, 0.5]),
            VecN([4.0, 4.0, 1.0]),
            VecN([-2.0, 0.0, 3.0]),
        );
        let (b, cc) = cubic_through(c.p0, c.eval(1.0 / 3.0), c.eval(2.0 / 3.0), c.p3);
        assert!((b - c.p1).length() < 1e-12);
        assert!((cc - c.p2).length() < 1e-12);
    }

    #[test]
    fn controls_by_count() {
        let p = [
            Vec2::new(0.0f64, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(3.0, 0.0),
        ];
        assert_eq!(through_controls(&p[..2]).unwrap().as_slice(), &p[..2]);
        assert_eq!(through_controls(&p[..3]).unwrap().len(), 3);
        assert_eq!(through_controls(&p).unwrap().len(), 4);
        assert_eq!(through_controls(&p[..1]), Err(ArityError::new(1)));
    }

    #[test]
    fn coincident_waypoints_are_kept() {
        let p = Vec2::new(1.0f64, 1.0);
        for n in 2..=4 {
            let controls = through_controls(&[p; 4][..n]).unwrap();
            assert_eq!(controls.as_slice(), &[p; 4][..n]);
        }
        // The blend weights alone do not reproduce the point exactly.
        let (b, c) = cubic_through(p, p, p, p);
        assert!((b - p).length() < 1e-12 && (c - p).length() < 1e-12);
        assert_eq!(through_controls(&[p; 5]), Err(ArityError::TooMany(5)));
        assert_eq!(through_controls(&[p; 1]), Err(ArityError::TooFew(1)));
    }

    #[test]
    fn params_by_arity() {
        assert_eq!(through_params::<f64>(2).as_slice(), &[0.0, 1.0]);
        assert_eq!(through_params::<f64>(3).as_slice(), &[0.0, 0.5, 1.0]);
        assert_eq!(
            through_params::<f32>(4).as_slice(),
            &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]
        );
    }
}
