// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier curves of degree 1 to 3, generic over scalar and dimension.
//!
//! The casteljau library evaluates, splits, measures and offsets Bézier
//! curves whose control points are any type implementing [`Vector`]: the
//! scalars `f32` and `f64` themselves, the planar [`Vec2`], or the
//! fixed-size [`VecN`]. Everything is a pure function of caller-owned data;
//! operations that produce a variable number of points append them to a
//! [`PointSink`].
//!
//! # Examples
//!
//! Evaluating and splitting a cubic:
//! ```
//! use casteljau::{CubicBez, ParamCurve, ParamCurveArclen, Vec2};
//!
//! let c = CubicBez::new(
//!     Vec2::new(0.0f64, 0.0),
//!     Vec2::new(0.0, 1.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(1.0, 0.0),
//! );
//! assert_eq!(c.eval(0.5), Vec2::new(0.5, 0.75));
//! let (left, right) = c.subdivide();
//! assert_eq!(left.end(), right.start());
//! assert!((left.arclen() + right.arclen() - c.arclen()).abs() < 1e-9);
//! ```
//!
//! Stroking one side of a quadratic, 2 units to the right of its direction
//! of travel:
//! ```
//! use casteljau::{offset, BezSeg, QuadBez, Vec2};
//!
//! let q = QuadBez::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 100.0), Vec2::new(100.0, 0.0));
//! let mut points = vec![];
//! let n = offset(&q, 2.0, &mut points);
//! let segments: Vec<_> = points
//!     .chunks(3)
//!     .map(|pts| BezSeg::from_points(pts).unwrap())
//!     .collect();
//! assert_eq!(segments.len() * 3, n);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality, through `num-traits`. The `std` feature is enabled
//! by default, but can be disabled, as long as the `libm` feature is
//! enabled. This is useful for `no_std` environments. The crate still uses
//! the `alloc` crate regardless.
//!
//! The `mint` feature adds conversions between [`Vec2`] / [`VecN`] and the
//! [`mint`] interoperability types.
//!
//! [`libm`]: https://docs.rs/libm
//! [`mint`]: https://docs.rs/mint

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("casteljau requires either the `std` or `libm` feature");

extern crate alloc;

mod arclen;
mod bezseg;
pub mod common;
mod cubicbez;
mod extrema;
mod fit;
mod line;
mod offset;
mod param_curve;
mod quadbez;
mod real;
mod sink;
mod vec2;
mod vecn;
mod vector;

pub use crate::arclen::ArclenSamples;
pub use crate::bezseg::{ArityError, BezSeg};
pub use crate::cubicbez::CubicBez;
pub use crate::fit::{cubic_through, quad_through, through_controls, through_params};
pub use crate::line::{ConstPoint, Line};
pub use crate::offset::{offset, offset_tapered, offset_tapered_with, offset_with, OffsetOpts};
pub use crate::param_curve::{
    ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema, ParamCurveNormal, Scalar,
    MAX_EXTREMA,
};
pub use crate::quadbez::QuadBez;
pub use crate::real::{Precision, Real};
pub use crate::sink::{FnSink, PointSink};
pub use crate::vec2::Vec2;
pub use crate::vecn::{Vec3, Vec4, VecN};
pub use crate::vector::{Planar, Vector};
