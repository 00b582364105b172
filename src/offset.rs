// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset curves, for stroking.
//!
//! The curve is cut into pieces that turn little enough to be offset one at
//! a time. The offset of each piece is sampled at the parameters of
//! [`through_params`] and refit with a curve of the same degree, so the
//! result is a chain of segments of the input's arity written back to back.
//!
//! Pieces are found by halving what is left of the curve until the front
//! part passes a flatness test on its unit tangents, offsetting that part,
//! and starting over on the remainder.

use arrayvec::ArrayVec;
use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::common::root_epsilon;
use crate::fit::{through_controls, through_params};
use crate::{
    ConstPoint, ParamCurve, ParamCurveExtrema, Planar, PointSink, Real, Vector, MAX_EXTREMA,
};

/// Tuning for the offset engine.
///
/// A piece is flat enough to offset when the dot products of its unit
/// tangents at 0 and ½, and at ½ and 1, both reach the threshold for its
/// kind of curve. Higher thresholds give more, shorter pieces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetOpts<T> {
    /// Flatness threshold for lines and quadratic curves.
    pub quad_threshold: T,
    /// Flatness threshold for cubic curves.
    pub cubic_threshold: T,
    /// Flatness threshold for tapered offsets of any degree.
    pub tapered_threshold: T,
    /// How many times a piece may be halved before it is offset as is.
    pub max_depth: usize,
    /// The most pieces a single run emits. Once reached, the rest of the
    /// curve is offset as one piece.
    pub max_segments: usize,
}

impl<T: Real> Default for OffsetOpts<T> {
    fn default() -> Self {
        OffsetOpts {
            quad_threshold: T::from_f64(0.921),
            cubic_threshold: T::from_f64(0.93),
            tapered_threshold: T::from_f64(0.97),
            max_depth: 12,
            max_segments: 256,
        }
    }
}

impl<T: Copy> OffsetOpts<T> {
    fn threshold(&self, arity: usize) -> T {
        if arity >= 4 {
            self.cubic_threshold
        } else {
            self.quad_threshold
        }
    }
}

/// Offset a curve by a constant distance, writing the control points of
/// the result to `sink`.
///
/// A positive `delta` offsets to the clockwise side of the direction of
/// travel, opposite [`normal`](crate::ParamCurveNormal::normal); a negative
/// one offsets along the normal.
///
/// Returns the number of points written, a multiple of the curve's arity.
/// The end point of each segment is repeated, bit for bit, as the start of
/// the next.
///
/// ```
/// use casteljau::{offset, QuadBez, Vec2};
///
/// let q = QuadBez::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0));
/// let mut out = vec![];
/// assert_eq!(offset(&q, 1.0, &mut out), 3);
/// assert_eq!(out, [Vec2::new(0.0, -1.0), Vec2::new(1.0, -1.0), Vec2::new(2.0, -1.0)]);
/// ```
pub fn offset<C, P>(curve: &C, delta: P::Scalar, sink: impl PointSink<P>) -> usize
where
    C: ParamCurve<Point = P> + Copy,
    P: Planar,
{
    offset_with(curve, delta, &OffsetOpts::default(), sink)
}

/// Offset a curve by a constant distance, with explicit tuning.
///
/// See [`offset`].
pub fn offset_with<C, P>(
    curve: &C,
    delta: P::Scalar,
    opts: &OffsetOpts<P::Scalar>,
    mut sink: impl PointSink<P>,
) -> usize
where
    C: ParamCurve<Point = P> + Copy,
    P: Planar,
{
    let engine = Engine {
        threshold: opts.threshold(curve.arity()),
        sign: -P::Scalar::one(),
        opts,
    };
    engine.run(*curve, ConstPoint(delta), &mut sink, &mut None)
}

/// Offset a curve by a varying distance.
///
/// The `taper` is a scalar curve giving the distance at each parameter of
/// `curve`. The curve and taper are first cut at the curve's interior
/// extrema, and each span is offset on its own.
///
/// Sign convention and output are as for [`offset`].
pub fn offset_tapered<C, W, P>(curve: &C, taper: &W, sink: impl PointSink<P>) -> usize
where
    C: ParamCurveExtrema<Point = P> + Copy,
    W: ParamCurve<Point = P::Scalar> + Copy,
    P: Planar,
{
    offset_tapered_with(curve, taper, &OffsetOpts::default(), sink)
}

/// Offset a curve by a varying distance, with explicit tuning.
///
/// See [`offset_tapered`].
pub fn offset_tapered_with<C, W, P>(
    curve: &C,
    taper: &W,
    opts: &OffsetOpts<P::Scalar>,
    mut sink: impl PointSink<P>,
) -> usize
where
    C: ParamCurveExtrema<Point = P> + Copy,
    W: ParamCurve<Point = P::Scalar> + Copy,
    P: Planar,
{
    let one = P::Scalar::one();
    let eps = root_epsilon::<P::Scalar>();
    let mut cuts: SmallVec<[P::Scalar; MAX_EXTREMA + 2]> = smallvec![P::Scalar::zero()];
    cuts.extend(
        curve
            .extrema()
            .into_iter()
            .filter(|&t| t > eps && t < one - eps),
    );
    cuts.push(one);

    let engine = Engine {
        threshold: opts.tapered_threshold,
        sign: -one,
        opts,
    };
    let mut joint = None;
    let mut written = 0;
    for span in cuts.windows(2) {
        let range = span[0]..span[1];
        written += engine.run(
            curve.subsegment(range.clone()),
            taper.subsegment(range),
            &mut sink,
            &mut joint,
        );
    }
    written
}

struct Engine<'a, T> {
    threshold: T,
    sign: T,
    opts: &'a OffsetOpts<T>,
}

impl<T: Real> Engine<'_, T> {
    /// Offset `curve` by `taper`, appending the segments to `sink`.
    ///
    /// If `joint` holds a point it replaces the first offset point, and on
    /// return it holds the last point written.
    fn run<C, W, P>(
        &self,
        curve: C,
        taper: W,
        sink: &mut impl PointSink<P>,
        joint: &mut Option<P>,
    ) -> usize
    where
        C: ParamCurve<Point = P> + Copy,
        W: ParamCurve<Point = T> + Copy,
        P: Planar<Scalar = T>,
    {
        let arity = curve.arity();
        if !(2..=4).contains(&arity) {
            return 0;
        }
        let params = through_params::<T>(arity);
        let (one, half) = (T::one(), T::half());

        let mut base = curve;
        let mut base_taper = taper;
        let mut start = T::zero();
        let mut end = one;
        let mut depth = 0;
        let mut pieces = 0;
        let mut written = 0;
        loop {
            let last_piece = pieces + 1 >= self.opts.max_segments;
            if depth < self.opts.max_depth && !last_piece && !is_flat(&base, self.threshold) {
                base = base.left_split(half);
                base_taper = base_taper.left_split(half);
                end = (start + end) * half;
                depth += 1;
                continue;
            }

            let mut waypoints: ArrayVec<P, 4> = params
                .iter()
                .map(|&t| offset_point(&base, &base_taper, t, self.sign))
                .collect();
            if let Some(p) = *joint {
                waypoints[0] = p;
            }
            let Ok(controls) = through_controls(&waypoints) else {
                break;
            };
            sink.push_all(controls.iter().copied());
            written += controls.len();
            *joint = controls.last().copied();
            pieces += 1;

            if end >= one {
                break;
            }
            start = end;
            end = one;
            depth = 0;
            base = curve.right_split(start);
            base_taper = taper.right_split(start);
        }
        written
    }
}

/// The unit tangent at `t`.
///
/// Where the derivative vanishes, the direction of the control polygon is
/// used instead: the first nonzero leg out of the start for `t <= ½`, the
/// last one into the end otherwise. `None` when all control points coincide.
fn unit_tangent<C, P>(c: &C, t: P::Scalar) -> Option<P>
where
    C: ParamCurve<Point = P>,
    P: Vector,
{
    let zero = P::Scalar::zero();
    let d = c.deriv_at(t);
    if d.length_squared() > zero {
        return Some(d.normalize());
    }
    let points = c.points();
    let (&first, &last) = (points.first()?, points.last()?);
    let leg = if t <= P::Scalar::half() {
        points
            .iter()
            .skip(1)
            .map(|&p| p - first)
            .find(|v| v.length_squared() > zero)
    } else {
        points
            .iter()
            .rev()
            .skip(1)
            .map(|&p| last - p)
            .find(|v| v.length_squared() > zero)
    };
    leg.map(Vector::normalize)
}

fn is_flat<C, P>(c: &C, threshold: P::Scalar) -> bool
where
    C: ParamCurve<Point = P>,
    P: Vector,
{
    match (
        unit_tangent(c, P::Scalar::zero()),
        unit_tangent(c, P::Scalar::half()),
        unit_tangent(c, P::Scalar::one()),
    ) {
        (Some(t0), Some(t_half), Some(t1)) => {
            t0.dot(t_half) >= threshold && t_half.dot(t1) >= threshold
        }
        // Degenerate.
        _ => true,
    }
}

fn offset_point<C, W, P>(c: &C, taper: &W, t: P::Scalar, sign: P::Scalar) -> P
where
    C: ParamCurve<Point = P>,
    W: ParamCurve<Point = P::Scalar>,
    P: Planar,
{
    let p = c.eval(t);
    match unit_tangent(c, t) {
        Some(tangent) => p + tangent.turn_90().scale(taper.eval(t) * sign),
        None => p,
    }
}
