use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    pub fn distance_sq(self, other: Vec2) -> f32 {
        (other - self).length_sq()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        self.distance_sq(other).sqrt()
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }

    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A path vertex: a position plus incoming/outgoing Bézier handle offsets.
///
/// Handles are stored relative to `position`; a zero handle contributes no
/// curvature on its side of the vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Vec2,
    #[serde(default)]
    pub handle_in: Vec2,
    #[serde(default)]
    pub handle_out: Vec2,
}

impl Anchor {
    pub fn new(position: Vec2) -> Self {
        Anchor {
            position,
            handle_in: Vec2::ZERO,
            handle_out: Vec2::ZERO,
        }
    }

    pub fn with_handles(position: Vec2, handle_in: Vec2, handle_out: Vec2) -> Self {
        Anchor {
            position,
            handle_in,
            handle_out,
        }
    }

    /// Absolute position of the incoming control point.
    pub fn handle_in_abs(self) -> Vec2 {
        self.position + self.handle_in
    }

    /// Absolute position of the outgoing control point.
    pub fn handle_out_abs(self) -> Vec2 {
        self.position + self.handle_out
    }

    pub fn is_valid(self) -> bool {
        self.position.is_finite() && self.handle_in.is_finite() && self.handle_out.is_finite()
    }
}

/// An ordered anchor sequence with an open/closed flag. This is the shape
/// the edge-list builders consume and what `Edge::to_path` produces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub anchors: Vec<Anchor>,
    #[serde(default)]
    pub closed: bool,
}

impl Path {
    pub fn new(anchors: Vec<Anchor>, closed: bool) -> Self {
        Path { anchors, closed }
    }

    pub fn open(anchors: Vec<Anchor>) -> Self {
        Path {
            anchors,
            closed: false,
        }
    }

    pub fn closed(anchors: Vec<Anchor>) -> Self {
        Path {
            anchors,
            closed: true,
        }
    }
}
