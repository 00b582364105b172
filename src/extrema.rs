// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extrema and cusps from the roots of the derivative.

use arrayvec::ArrayVec;
use num_traits::Zero;
use smallvec::{smallvec, SmallVec};

use crate::common::{in_unit, root_epsilon, solve_linear, solve_quadratic, sort_dedup};
use crate::{Real, Vector, MAX_EXTREMA};

/// The derivative of a Bézier curve in power basis, lowest degree first.
///
/// The common factor of the degree is dropped, since only the roots matter.
/// A quadratic gives `d0 + (d1 - d0) t` and a cubic gives
/// `d0 + 2 (d1 - d0) t + (d0 - 2 d1 + d2) t²`, where `dk` are the
/// differences of consecutive control points.
fn deriv_power_basis<P: Vector>(points: &[P]) -> ArrayVec<P, 3> {
    let two = P::Scalar::from_f64(2.0);
    match *points {
        [p0, p1, p2] => {
            let (d0, d1) = (p1 - p0, p2 - p1);
            [d0, d1 - d0].into_iter().collect()
        }
        [p0, p1, p2, p3] => {
            let (d0, d1, d2) = (p1 - p0, p2 - p1, p3 - p2);
            [d0, (d1 - d0).scale(two), (d2 - d1) - (d1 - d0)]
                .into_iter()
                .collect()
        }
        _ => ArrayVec::new(),
    }
}

/// Roots in `[0, 1]` of the derivative along axis `dim`.
///
/// Returns `None` when the derivative along that axis is identically zero.
fn axis_roots<P: Vector>(coeffs: &[P], dim: usize) -> Option<ArrayVec<P::Scalar, 2>> {
    let c: ArrayVec<P::Scalar, 3> = coeffs.iter().map(|p| p.component(dim)).collect();
    if c.iter().all(|x| *x == P::Scalar::zero()) {
        return None;
    }
    let mut roots = ArrayVec::new();
    match *c.as_slice() {
        [c0, c1] => roots.extend(solve_linear(c0, c1)),
        [c0, c1, c2] => roots.extend(solve_quadratic(c0, c1, c2)),
        _ => {}
    }
    roots.retain(|t| in_unit(*t));
    Some(roots)
}

/// Parameters in `[0, 1]` where the derivative vanishes along some axis.
///
/// The result is sorted and free of duplicates closer than
/// [`root_epsilon`].
pub(crate) fn extrema<P: Vector>(points: &[P]) -> SmallVec<[P::Scalar; MAX_EXTREMA]> {
    let coeffs = deriv_power_basis(points);
    let mut result = SmallVec::new();
    for dim in 0..P::DIM {
        result.extend(axis_roots(&coeffs, dim).into_iter().flatten());
    }
    let kept = sort_dedup(&mut result, root_epsilon());
    result.truncate(kept);
    result
}

/// The first parameter in `[0, 1]` where the derivative vanishes along
/// every axis at once.
///
/// Roots of all axes are tagged with their axis and sorted. A run of roots
/// spanning less than [`root_epsilon`] that includes a root of every axis
/// is a cusp, reported at the run's first root. Axes along which the curve
/// does not move at all place no constraint.
pub(crate) fn cusp<P: Vector>(points: &[P]) -> Option<P::Scalar> {
    debug_assert!(P::DIM >= 2, "cusp detection needs at least two dimensions");
    let coeffs = deriv_power_basis(points);
    let eps = root_epsilon::<P::Scalar>();
    let mut constrained: SmallVec<[bool; 4]> = smallvec![false; P::DIM];
    let mut tagged: SmallVec<[(P::Scalar, usize); 8]> = SmallVec::new();
    for dim in 0..P::DIM {
        if let Some(roots) = axis_roots(&coeffs, dim) {
            if roots.is_empty() {
                return None;
            }
            constrained[dim] = true;
            tagged.extend(roots.into_iter().map(|t| (t, dim)));
        }
    }
    let needed = constrained.iter().filter(|c| **c).count();
    if needed == 0 {
        // The curve is a single point.
        return None;
    }
    tagged.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(core::cmp::Ordering::Equal));
    let mut seen: SmallVec<[bool; 4]> = smallvec![false; P::DIM];
    for (i, &(t0, _)) in tagged.iter().enumerate() {
        seen.iter_mut().for_each(|s| *s = false);
        let mut count = 0;
        for &(_, dim) in tagged[i..].iter().take_while(|(t, _)| *t - t0 <= eps) {
            if !seen[dim] {
                seen[dim] = true;
                count += 1;
            }
        }
        if count == needed {
            return Some(t0);
        }
    }
    None
}
