// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use arrayvec::ArrayVec;

use crate::Real;

/// Tolerance under which two parameter values are considered the same.
///
/// This is the square root of the machine epsilon of `T`, which is about
/// `1.5e-8` for `f64` and `3.5e-4` for `f32`.
#[inline]
pub fn root_epsilon<T: Real>() -> T {
    T::epsilon().sqrt()
}

/// The smallest end parameter for which a subsegment is computed by
/// rescaling rather than by a single split.
#[inline]
pub(crate) fn subsegment_epsilon<T: Real>() -> T {
    T::epsilon() * T::from_f64(10.0)
}

/// Is `t` within the unit interval?
#[inline]
pub(crate) fn in_unit<T: Real>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}

/// Find real roots of linear equation.
///
/// Return values of x for which c0 + c1 x = 0.
///
/// When both coefficients are zero, every x is a root; in that case a single
/// root of 0 is reported.
pub fn solve_linear<T: Real>(c0: T, c1: T) -> ArrayVec<T, 1> {
    let mut result = ArrayVec::new();
    let root = -c0 / c1;
    if root.is_finite() {
        result.push(root);
    } else if c0 == T::zero() && c1 == T::zero() {
        // Degenerate case
        result.push(T::zero());
    }
    result
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// This function tries to be quite numerically robust. If the equation
/// is nearly linear, it will return the root ignoring the quadratic term;
/// the other root might be out of representable range. In the degenerate
/// case where all coefficients are zero, so that all values of x satisfy
/// the equation, a single `0.0` is returned.
///
/// The roots are returned in increasing order.
pub fn solve_quadratic<T: Real>(c0: T, c1: T, c2: T) -> ArrayVec<T, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        result.extend(solve_linear(c0, c1));
        return result;
    }
    let half = T::half();
    let arg = sc1 * sc1 - T::from_f64(4.0) * sc0;
    let root1 = if !arg.is_finite() {
        // sc1 * sc1 overflowed. Find one root using sc1 x + x² = 0,
        // the other as sc0 / root1.
        -sc1
    } else {
        if arg < T::zero() {
            return result;
        } else if arg == T::zero() {
            result.push(-half * sc1);
            return result;
        }
        // See https://math.stackexchange.com/questions/866331
        -half * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}

/// Sort parameter values in place and move near duplicates to the back.
///
/// Values closer than `eps` to the previously kept value are dropped.
/// Returns the number of values kept at the front of the slice.
pub(crate) fn sort_dedup<T: Real>(values: &mut [T], eps: T) -> usize {
    debug_assert!(values.iter().all(|t| !t.is_nan()), "NaN parameter");
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    let mut kept = 0;
    for i in 0..values.len() {
        if kept == 0 || values[i] - values[kept - 1] > eps {
            values[kept] = values[i];
            kept += 1;
        }
    }
    kept
}
