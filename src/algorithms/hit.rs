//! Stateless hit-testing over edge lists.
//!
//! Batch functions silently skip edges whose anchors are non-finite; one
//! bad edge never fails a batch.

use crate::edge::Edge;
use crate::geometry::bounds::BoundingBox;
use crate::model::Vec2;
use crate::EdgeHit;

/// Hit result for a single edge, or None when the closest point is
/// farther than `tolerance` (or the edge is invalid).
pub fn hit_test_edge(edge: &Edge, point: Vec2, tolerance: f32) -> Option<EdgeHit> {
    if !edge.is_valid() {
        return None;
    }
    let cp = edge.closest_point(point);
    if cp.distance <= tolerance {
        Some(EdgeHit {
            edge: *edge,
            position: cp.position,
            time: cp.time,
            distance: cp.distance,
        })
    } else {
        None
    }
}

/// Best hit across a list: the edge with globally minimal distance among
/// those within `max_distance`. Strictly-less comparison, so the first
/// edge in iteration order wins ties.
pub fn hit_test_edges(edges: &[Edge], point: Vec2, max_distance: f32) -> Option<EdgeHit> {
    let mut best: Option<EdgeHit> = None;
    for edge in edges {
        if let Some(hit) = hit_test_edge(edge, point, max_distance) {
            if best.as_ref().map_or(true, |b| hit.distance < b.distance) {
                best = Some(hit);
            }
        }
    }
    best
}

/// Every edge within `tolerance`, sorted ascending by distance. The sort
/// is stable: equally distant edges keep their input order.
pub fn hit_test_edges_all(edges: &[Edge], point: Vec2, tolerance: f32) -> Vec<EdgeHit> {
    let mut hits: Vec<EdgeHit> = edges
        .iter()
        .filter_map(|e| hit_test_edge(e, point, tolerance))
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Edges whose own bounds (anchor positions, plus absolute handle points
/// for curves) overlap the query box.
pub fn edges_intersecting_box(edges: &[Edge], query: &BoundingBox) -> Vec<Edge> {
    edges
        .iter()
        .filter(|e| e.is_valid() && e.bounds().intersects(query))
        .copied()
        .collect()
}

/// Edges lying entirely inside the query box (inclusive): both anchor
/// positions and, for curves, both absolute handle points. Monotone under
/// box shrinking.
pub fn edges_contained_in_box(edges: &[Edge], query: &BoundingBox) -> Vec<Edge> {
    edges
        .iter()
        .filter(|e| e.is_valid() && query.contains_box(&e.bounds()))
        .copied()
        .collect()
}
