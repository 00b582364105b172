// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destinations for generated points.

use alloc::vec::Vec;

use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// An append-only destination for points.
///
/// Operations that produce a variable number of points, such as splitting
/// and offsetting, write them to a sink and return how many were written.
/// The caller owns the sink and decides how the points are stored.
///
/// Fixed-capacity sinks like [`ArrayVec`] panic when they overflow, so the
/// caller must size them for the worst case.
pub trait PointSink<P> {
    /// Append one point.
    fn push(&mut self, p: P);

    /// Append every point of an iterator.
    fn push_all<I: IntoIterator<Item = P>>(&mut self, points: I)
    where
        Self: Sized,
    {
        for p in points {
            self.push(p);
        }
    }
}

impl<P> PointSink<P> for Vec<P> {
    #[inline]
    fn push(&mut self, p: P) {
        Vec::push(self, p);
    }
}

impl<P, const N: usize> PointSink<P> for ArrayVec<P, N> {
    #[inline]
    fn push(&mut self, p: P) {
        ArrayVec::push(self, p);
    }
}

impl<A: smallvec::Array> PointSink<A::Item> for SmallVec<A> {
    #[inline]
    fn push(&mut self, p: A::Item) {
        SmallVec::push(self, p);
    }
}

impl<P, S: PointSink<P> + ?Sized> PointSink<P> for &mut S {
    #[inline]
    fn push(&mut self, p: P) {
        (**self).push(p);
    }
}

/// A sink that hands every point to a closure.
///
/// ```
/// use casteljau::{FnSink, ParamCurve, QuadBez, Vec2};
///
/// let q = QuadBez::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
/// let mut xs = vec![];
/// q.split_into(0.5, FnSink(|p: Vec2<f64>| xs.push(p.x)));
/// assert_eq!(xs.len(), 5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnSink<F>(pub F);

impl<P, F: FnMut(P)> PointSink<P> for FnSink<F> {
    #[inline]
    fn push(&mut self, p: P) {
        (self.0)(p);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use arrayvec::ArrayVec;
    use smallvec::SmallVec;

    use super::{FnSink, PointSink};

    fn write_three<S: PointSink<f64>>(mut sink: S) {
        sink.push_all([1.0, 2.0, 3.0]);
    }

    #[test]
    fn sinks_receive_points_in_order() {
        let mut v = Vec::new();
        write_three(&mut v);
        assert_eq!(v, [1.0, 2.0, 3.0]);

        let mut a = ArrayVec::<f64, 4>::new();
        write_three(&mut a);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);

        let mut s = SmallVec::<[f64; 2]>::new();
        write_three(&mut s);
        assert_eq!(s.as_slice(), &[1.0, 2.0, 3.0]);

        let mut sum = 0.0;
        write_three(FnSink(|x: f64| sum += x));
        assert_eq!(sum, 6.0);
    }
}
