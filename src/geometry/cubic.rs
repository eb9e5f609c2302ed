//! Cubic Bézier curve evaluation and closest-point projection.
//!
//! Point projection onto a cubic has no closed form, so `closest_point`
//! pairs a uniform coarse scan with a bounded golden-section refinement
//! of the squared-distance function around the scan winner.

use super::tolerance::{
    CUBIC_LENGTH_SAMPLES, CUBIC_SCAN_SAMPLES, EPS_LEN, EPS_T, GOLDEN_MAX_ITERS, INV_PHI,
};
use crate::model::Vec2;

/// Control points of a cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2, // Start point
    pub p1: Vec2, // First control point
    pub p2: Vec2, // Second control point
    pub p3: Vec2, // End point
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Vec2 {
            x: mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            y: mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        }
    }

    /// Evaluate the tangent (derivative) at parameter t.
    pub fn tangent(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        Vec2 {
            x: 3.0 * mt2 * (self.p1.x - self.p0.x)
                + 6.0 * mt * t * (self.p2.x - self.p1.x)
                + 3.0 * t2 * (self.p3.x - self.p2.x),
            y: 3.0 * mt2 * (self.p1.y - self.p0.y)
                + 6.0 * mt * t * (self.p2.y - self.p1.y)
                + 3.0 * t2 * (self.p3.y - self.p2.y),
        }
    }

    /// Approximate arc length by summing chords at a fixed uniform
    /// resolution. Accuracy improves monotonically with the sample count.
    pub fn length(&self) -> f32 {
        let n = CUBIC_LENGTH_SAMPLES;
        let mut total = 0.0;
        let mut prev = self.p0;
        for i in 1..=n {
            let t = i as f32 / n as f32;
            let p = self.eval(t);
            total += prev.distance(p);
            prev = p;
        }
        total
    }

    /// Closest point on the curve to `point`, as (position, t).
    ///
    /// Coarse uniform scan followed by golden-section search on the
    /// squared distance over a one-sample bracket around the scan
    /// winner, t clamped to [0, 1] throughout. Derivative-free, so it
    /// stays robust where B'(t) vanishes (degenerate parametrizations at
    /// the endpoints). The refined t is kept only if it does not
    /// increase the squared distance, so the answer is deterministic and
    /// never worse than the scan winner.
    pub fn closest_point(&self, point: Vec2) -> (Vec2, f32) {
        if self.is_degenerate() {
            return (self.p0, 0.0);
        }

        // Coarse scan, endpoints included
        let n = CUBIC_SCAN_SAMPLES;
        let mut best_t = 0.0;
        let mut best_d2 = f32::INFINITY;
        for i in 0..=n {
            let t = i as f32 / n as f32;
            let d2 = self.eval(t).distance_sq(point);
            if d2 < best_d2 {
                best_d2 = d2;
                best_t = t;
            }
        }

        // Golden-section refinement: the true minimum lies within one
        // sample spacing of the scan winner
        let spacing = 1.0 / n as f32;
        let mut lo = (best_t - spacing).max(0.0);
        let mut hi = (best_t + spacing).min(1.0);
        let mut x1 = hi - INV_PHI * (hi - lo);
        let mut x2 = lo + INV_PHI * (hi - lo);
        let mut f1 = self.eval(x1).distance_sq(point);
        let mut f2 = self.eval(x2).distance_sq(point);
        for _ in 0..GOLDEN_MAX_ITERS {
            if hi - lo < EPS_T {
                break;
            }
            if f1 <= f2 {
                hi = x2;
                x2 = x1;
                f2 = f1;
                x1 = hi - INV_PHI * (hi - lo);
                f1 = self.eval(x1).distance_sq(point);
            } else {
                lo = x1;
                x1 = x2;
                f1 = f2;
                x2 = lo + INV_PHI * (hi - lo);
                f2 = self.eval(x2).distance_sq(point);
            }
        }
        let refined = 0.5 * (lo + hi);
        if self.eval(refined).distance_sq(point) < best_d2 {
            best_t = refined;
        }
        (self.eval(best_t), best_t)
    }

    // All four control points coincident
    fn is_degenerate(&self) -> bool {
        let eps2 = EPS_LEN * EPS_LEN;
        self.p0.distance_sq(self.p1) <= eps2
            && self.p1.distance_sq(self.p2) <= eps2
            && self.p2.distance_sq(self.p3) <= eps2
    }
}
