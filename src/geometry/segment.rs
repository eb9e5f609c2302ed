//! Tagged segment primitive an edge reduces to.
//!
//! An anchor pair classifies as a line when both facing handles are
//! exactly zero; anything else is a cubic. Classification is exact by
//! contract — callers wanting fuzzy linearity must pre-round handles.

use super::cubic::CubicBezier;
use super::math::Line;
use crate::model::{Anchor, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line(Line),
    Cubic(CubicBezier),
}

impl Segment {
    /// Classify the span between two anchors as a line or a cubic.
    pub fn from_anchors(a1: Anchor, a2: Anchor) -> Segment {
        if a1.handle_out.is_zero() && a2.handle_in.is_zero() {
            Segment::Line(Line::new(a1.position, a2.position))
        } else {
            Segment::Cubic(cubic_between(a1, a2))
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Segment::Line(_))
    }

    pub fn length(&self) -> f32 {
        match self {
            Segment::Line(line) => line.length(),
            Segment::Cubic(cubic) => cubic.length(),
        }
    }

    pub fn eval(&self, t: f32) -> Vec2 {
        match self {
            Segment::Line(line) => line.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
        }
    }

    /// Closest on-segment point to `point`, as (position, t).
    pub fn closest_point(&self, point: Vec2) -> (Vec2, f32) {
        match self {
            Segment::Line(line) => line.closest_point(point),
            Segment::Cubic(cubic) => cubic.closest_point(point),
        }
    }
}

/// Cubic between two anchors: control points are the outgoing handle of
/// the first anchor and the incoming handle of the second, in absolute
/// coordinates.
pub fn cubic_between(a1: Anchor, a2: Anchor) -> CubicBezier {
    CubicBezier::new(
        a1.position,
        a1.handle_out_abs(),
        a2.handle_in_abs(),
        a2.position,
    )
}

/// Chord between two anchor positions, ignoring handles.
pub fn line_between(a1: Anchor, a2: Anchor) -> Line {
    Line::new(a1.position, a2.position)
}
