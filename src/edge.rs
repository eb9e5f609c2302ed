//! Edge: the segment between two consecutive anchors of a path, annotated
//! with its position in the path. Edges are transient views rebuilt
//! whenever the underlying anchors change; they copy anchor data and are
//! never written back.

use crate::geometry::bounds::BoundingBox;
use crate::geometry::cubic::CubicBezier;
use crate::geometry::math::Line;
use crate::geometry::segment::{cubic_between, line_between, Segment};
use crate::model::{Anchor, Path, Vec2};
use serde::{Deserialize, Serialize};

/// Stable identity of an edge across rebuilds: which sub-path it belongs
/// to and where it sits in that path's edge sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub path_index: u32,
    pub index: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub anchor1: Anchor,
    pub anchor2: Anchor,
    pub index: u32,
    pub path_index: u32,
    pub closed: bool,
}

/// Closest on-edge point to a query, with the parameter it occurs at and
/// the distance back to the query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosestPoint {
    pub position: Vec2,
    pub time: f32,
    pub distance: f32,
}

impl Edge {
    pub fn new(anchor1: Anchor, anchor2: Anchor, index: u32, path_index: u32, closed: bool) -> Self {
        Edge {
            anchor1,
            anchor2,
            index,
            path_index,
            closed,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            path_index: self.path_index,
            index: self.index,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.anchor1.is_valid() && self.anchor2.is_valid()
    }

    /// The geometric primitive this edge reduces to.
    pub fn segment(&self) -> Segment {
        Segment::from_anchors(self.anchor1, self.anchor2)
    }

    /// True iff the facing handles are exactly zero.
    pub fn is_linear(&self) -> bool {
        self.anchor1.handle_out.is_zero() && self.anchor2.handle_in.is_zero()
    }

    pub fn length(&self) -> f32 {
        self.segment().length()
    }

    /// Chord between the anchor positions, ignoring handles.
    pub fn to_line(&self) -> Line {
        line_between(self.anchor1, self.anchor2)
    }

    /// Cubic with the facing handles as control points (possibly
    /// degenerate when the handles are zero).
    pub fn to_cubic(&self) -> CubicBezier {
        cubic_between(self.anchor1, self.anchor2)
    }

    /// Closest on-edge point to `point`. The single entry point all
    /// hit-testing builds on.
    pub fn closest_point(&self, point: Vec2) -> ClosestPoint {
        let (position, time) = self.segment().closest_point(point);
        ClosestPoint {
            position,
            time,
            distance: position.distance(point),
        }
    }

    /// Box over both anchor positions, widened by the absolute handle
    /// points when the edge is curved. Every on-curve point lies inside
    /// (convex-hull property of Bézier control points).
    pub fn bounds(&self) -> BoundingBox {
        let mut b = BoundingBox::at(self.anchor1.position);
        b.include(self.anchor2.position);
        if !self.is_linear() {
            b.include(self.anchor1.handle_out_abs());
            b.include(self.anchor2.handle_in_abs());
        }
        b
    }

    /// Minimal standalone two-anchor path for downstream rendering.
    pub fn to_path(&self) -> Path {
        Path::open(vec![self.anchor1, self.anchor2])
    }
}

/// Edges of a single path: consecutive anchor pairs, plus a wrap-around
/// pair when the path is closed. 0 or 1 anchors yield no edges.
pub fn edges_of_path(path: &Path, path_index: u32) -> Vec<Edge> {
    let n = path.anchors.len();
    if n < 2 {
        return Vec::new();
    }
    let count = if path.closed { n } else { n - 1 };
    let mut edges = Vec::with_capacity(count);
    for i in 0..count {
        let j = (i + 1) % n;
        edges.push(Edge::new(
            path.anchors[i],
            path.anchors[j],
            i as u32,
            path_index,
            path.closed,
        ));
    }
    edges
}

/// Edges of a multi-sub-path shape, `path_index` assigned by position.
pub fn edges_of_paths(paths: &[Path]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (pi, path) in paths.iter().enumerate() {
        edges.extend(edges_of_path(path, pi as u32));
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(x: f32, y: f32) -> Anchor {
        Anchor::new(Vec2::new(x, y))
    }

    #[test]
    fn test_open_path_edges() {
        let path = Path::open(vec![anchor(0.0, 0.0), anchor(10.0, 0.0), anchor(10.0, 10.0)]);
        let edges = edges_of_path(&path, 0);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].index, 0);
        assert_eq!(edges[1].index, 1);
        assert_eq!(edges[1].anchor2.position, Vec2::new(10.0, 10.0));
        assert!(!edges[0].closed);
    }

    #[test]
    fn test_closed_path_wraps() {
        let path = Path::closed(vec![anchor(0.0, 0.0), anchor(10.0, 0.0), anchor(10.0, 10.0)]);
        let edges = edges_of_path(&path, 3);
        assert_eq!(edges.len(), 3);
        let last = edges[2];
        assert_eq!(last.anchor1.position, Vec2::new(10.0, 10.0));
        assert_eq!(last.anchor2.position, Vec2::new(0.0, 0.0));
        assert_eq!(last.path_index, 3);
        assert!(last.closed);
    }

    #[test]
    fn test_tiny_paths_yield_no_edges() {
        assert!(edges_of_path(&Path::open(vec![]), 0).is_empty());
        assert!(edges_of_path(&Path::closed(vec![anchor(1.0, 1.0)]), 0).is_empty());
    }

    #[test]
    fn test_multi_path_indices() {
        let paths = vec![
            Path::open(vec![anchor(0.0, 0.0), anchor(1.0, 0.0)]),
            Path::open(vec![anchor(5.0, 0.0), anchor(6.0, 0.0), anchor(7.0, 0.0)]),
        ];
        let edges = edges_of_paths(&paths);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].key(), EdgeKey { path_index: 0, index: 0 });
        assert_eq!(edges[1].key(), EdgeKey { path_index: 1, index: 0 });
        assert_eq!(edges[2].key(), EdgeKey { path_index: 1, index: 1 });
    }

    #[test]
    fn test_closest_point_distance_consistent() {
        let e = Edge::new(anchor(0.0, 0.0), anchor(100.0, 0.0), 0, 0, false);
        let hit = e.closest_point(Vec2::new(50.0, 10.0));
        assert!((hit.position.x - 50.0).abs() < 1e-4);
        assert!((hit.time - 0.5).abs() < 1e-6);
        assert!((hit.distance - 10.0).abs() < 1e-4);
        assert!((hit.distance - hit.position.distance(Vec2::new(50.0, 10.0))).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_cover_curve_handles() {
        let a = Anchor::with_handles(Vec2::new(0.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 20.0));
        let b = Anchor::with_handles(Vec2::new(10.0, 0.0), Vec2::new(0.0, 20.0), Vec2::ZERO);
        let e = Edge::new(a, b, 0, 0, false);
        let bb = e.bounds();
        assert_eq!(bb.min, Vec2::new(0.0, 0.0));
        assert_eq!(bb.max, Vec2::new(10.0, 20.0));

        // Linear edge ignores the off-side handles
        let e = Edge::new(
            Anchor::with_handles(Vec2::new(0.0, 0.0), Vec2::new(-50.0, 0.0), Vec2::ZERO),
            anchor(10.0, 0.0),
            0,
            0,
            false,
        );
        assert_eq!(e.bounds().min, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_to_path_roundtrip() {
        let e = Edge::new(anchor(0.0, 0.0), anchor(10.0, 0.0), 2, 1, true);
        let p = e.to_path();
        assert_eq!(p.anchors.len(), 2);
        assert!(!p.closed);
        assert_eq!(edges_of_path(&p, 0).len(), 1);
    }
}
