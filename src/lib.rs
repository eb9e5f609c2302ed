pub mod model;
pub mod edge;
pub mod geometry {
    pub mod bounds;
    pub mod cubic;
    pub mod math;
    pub mod segment;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod hit;
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

pub use crate::edge::{edges_of_path, edges_of_paths, ClosestPoint, Edge, EdgeKey};
pub use crate::geometry::bounds::BoundingBox;
pub use crate::model::{Anchor, Path, Vec2};

/// A batch hit result: the winning edge plus where on it the hit landed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeHit {
    pub edge: Edge,
    pub position: Vec2,
    pub time: f32,
    pub distance: f32,
}

/// Stateful hit tester: owns an edge list and answers repeated point/box
/// queries, rejecting far-away points through lazily cached bounds before
/// any per-edge math runs.
///
/// The cache covers the anchor positions and, for curved edges, the
/// absolute handle points — every on-curve point lies inside it, so the
/// tolerance-inflated reject can never drop a real hit. Edges are
/// snapshots: after mutating the source anchors, rebuild and call
/// `set_edges`/`set_path` again.
pub struct EdgeHitTester {
    edges: Vec<Edge>,
    tolerance: f32,
    // None whenever edges changed and no query recomputed it since
    bounds: RefCell<Option<BoundingBox>>,
}

impl EdgeHitTester {
    pub fn new(tolerance: f32) -> Self {
        EdgeHitTester {
            edges: Vec::new(),
            tolerance,
            bounds: RefCell::new(None),
        }
    }

    pub fn with_edges(edges: Vec<Edge>, tolerance: f32) -> Self {
        EdgeHitTester {
            edges,
            tolerance,
            bounds: RefCell::new(None),
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    // Bounds do not depend on tolerance, so the cache survives
    pub fn set_tolerance(&mut self, tolerance: f32) {
        self.tolerance = tolerance;
    }

    /// Replace the owned edge list and invalidate the bounds cache.
    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
        *self.bounds.borrow_mut() = None;
    }

    /// Derive the edge list from a single path.
    pub fn set_path(&mut self, path: &Path) {
        self.set_edges(edges_of_path(path, 0));
    }

    /// Derive the edge list from a multi-sub-path shape.
    pub fn set_paths(&mut self, paths: &[Path]) {
        self.set_edges(edges_of_paths(paths));
    }

    /// Box covering every owned edge, memoized until the next
    /// `set_edges`/`set_path`. None for an empty edge set.
    pub fn bounds(&self) -> Option<BoundingBox> {
        if self.edges.is_empty() {
            return None;
        }
        if let Some(b) = *self.bounds.borrow() {
            return Some(b);
        }
        // Invalid edges are skipped everywhere else; a NaN anchor must
        // not poison the box either
        let mut computed: Option<BoundingBox> = None;
        for e in &self.edges {
            if !e.is_valid() {
                continue;
            }
            let eb = e.bounds();
            computed = Some(match computed {
                Some(b) => b.union(eb),
                None => eb,
            });
        }
        *self.bounds.borrow_mut() = computed;
        computed
    }

    /// Best hit within tolerance, or None. O(1) reject when the point
    /// falls outside the tolerance-inflated bounds.
    pub fn test(&self, point: Vec2) -> Option<EdgeHit> {
        if !self.within_inflated_bounds(point) {
            return None;
        }
        algorithms::hit::hit_test_edges(&self.edges, point, self.tolerance)
    }

    /// All hits within tolerance, sorted ascending by distance.
    pub fn test_all(&self, point: Vec2) -> Vec<EdgeHit> {
        if !self.within_inflated_bounds(point) {
            return Vec::new();
        }
        algorithms::hit::hit_test_edges_all(&self.edges, point, self.tolerance)
    }

    /// Edges overlapping (or, with `fully_contained`, lying inside) a box.
    pub fn test_box(&self, query: &BoundingBox, fully_contained: bool) -> Vec<Edge> {
        if fully_contained {
            algorithms::hit::edges_contained_in_box(&self.edges, query)
        } else {
            algorithms::hit::edges_intersecting_box(&self.edges, query)
        }
    }

    fn within_inflated_bounds(&self, point: Vec2) -> bool {
        match self.bounds() {
            Some(b) => b.expand(self.tolerance).contains(point),
            // Empty edge list: nothing to prune, let the scan answer
            None => true,
        }
    }
}

/// Order-preserving set of selected edges, keyed by the stable
/// `(path_index, index)` identity so a selection survives edge rebuilds.
#[derive(Clone, Debug, Default)]
pub struct EdgeSelection {
    edges: IndexMap<EdgeKey, Edge>,
}

impl EdgeSelection {
    pub fn new() -> Self {
        EdgeSelection {
            edges: IndexMap::new(),
        }
    }

    /// Idempotent insert. Re-adding an already selected edge refreshes
    /// its snapshot without changing its position in the order.
    pub fn add(&mut self, edge: Edge) {
        self.edges.insert(edge.key(), edge);
    }

    /// Idempotent delete, preserving the order of the remaining edges.
    pub fn remove(&mut self, edge: &Edge) {
        self.edges.shift_remove(&edge.key());
    }

    /// Insert if absent (returns true), remove if present (returns false).
    pub fn toggle(&mut self, edge: Edge) -> bool {
        if self.edges.contains_key(&edge.key()) {
            self.edges.shift_remove(&edge.key());
            false
        } else {
            self.edges.insert(edge.key(), edge);
            true
        }
    }

    /// Replace the whole selection with a single edge.
    pub fn set(&mut self, edge: Edge) {
        self.edges.clear();
        self.edges.insert(edge.key(), edge);
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    pub fn has(&self, edge: &Edge) -> bool {
        self.edges.contains_key(&edge.key())
    }

    /// Snapshot in insertion order. The returned vector is independent of
    /// the selection.
    pub fn all(&self) -> Vec<Edge> {
        self.edges.values().copied().collect()
    }

    /// The earliest-inserted member still selected.
    pub fn first(&self) -> Option<&Edge> {
        self.edges.values().next()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }
}
