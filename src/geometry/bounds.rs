use crate::model::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, min ≤ max component-wise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        BoundingBox { min, max }
    }

    /// Degenerate box around a single point.
    pub fn at(p: Vec2) -> Self {
        BoundingBox { min: p, max: p }
    }

    /// Smallest box covering all points; None for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut b = BoundingBox::at(first);
        for p in iter {
            b.include(p);
        }
        Some(b)
    }

    /// Grow in place to cover `p`.
    pub fn include(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(self, other: BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Inflate uniformly by `pad` in every direction.
    pub fn expand(self, pad: f32) -> BoundingBox {
        BoundingBox {
            min: Vec2::new(self.min.x - pad, self.min.y - pad),
            max: Vec2::new(self.max.x + pad, self.max.y + pad),
        }
    }

    /// Inclusive point containment.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Inclusive box containment: `other` fully inside self.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Inclusive overlap test.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max).scale(0.5)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
