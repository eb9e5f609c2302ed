use super::tolerance::{clamp01, EPS_LEN};
use crate::model::Vec2;

/// A straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Line {
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Line { p1, p2 }
    }

    pub fn length(&self) -> f32 {
        self.p1.distance(self.p2)
    }

    pub fn eval(&self, t: f32) -> Vec2 {
        self.p1.lerp(self.p2, t)
    }

    /// Closest point on the segment (not its extension) to `point`.
    ///
    /// Projects onto the infinite line then clamps t to [0, 1]. A
    /// zero-length segment answers (p1, 0.0).
    pub fn closest_point(&self, point: Vec2) -> (Vec2, f32) {
        let v = self.p2 - self.p1;
        let vv = v.length_sq();
        if vv <= EPS_LEN * EPS_LEN {
            return (self.p1, 0.0);
        }
        let t = clamp01((point - self.p1).dot(v) / vv);
        (self.p1 + v.scale(t), t)
    }
}
