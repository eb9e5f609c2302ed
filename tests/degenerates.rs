use edgekit::algorithms::hit::{
    edges_contained_in_box, edges_intersecting_box, hit_test_edges, hit_test_edges_all,
};
use edgekit::geometry::segment::{cubic_between, line_between};
use edgekit::{edges_of_path, Anchor, BoundingBox, Edge, EdgeHitTester, Path, Vec2};

fn anchor(x: f32, y: f32) -> Anchor {
    Anchor::new(Vec2::new(x, y))
}

#[test]
fn zero_length_edge_never_divides_by_zero() {
    let e = Edge::new(anchor(10.0, 10.0), anchor(10.0, 10.0), 0, 0, false);
    let cp = e.closest_point(Vec2::new(10.0, 10.0));
    assert_eq!(cp.time, 0.0);
    assert_eq!(cp.distance, 0.0);

    let far = e.closest_point(Vec2::new(-1e6, 1e6));
    assert_eq!(far.position, Vec2::new(10.0, 10.0));
    assert!(far.distance.is_finite());
}

#[test]
fn zero_length_cubic_with_zero_handles() {
    let p = Vec2::new(7.0, -3.0);
    let a = Anchor::new(p);
    let cubic = cubic_between(a, a);
    let (pos, t) = cubic.closest_point(Vec2::new(0.0, 0.0));
    assert_eq!(pos, p);
    assert_eq!(t, 0.0);
    assert_eq!(cubic.length(), 0.0);
}

#[test]
fn zero_handle_cubic_matches_line_near_endpoints() {
    // The regression case for derivative-based refinement: the query
    // projects just inside the start of a long chord
    let a = anchor(0.0, 0.0);
    let b = anchor(200.0, 0.0);
    let line = line_between(a, b);
    let cubic = cubic_between(a, b);

    for q in [
        Vec2::new(0.3, 2.0),
        Vec2::new(1.0, -2.0),
        Vec2::new(199.0, 2.0),
        Vec2::new(199.7, -2.0),
    ] {
        let (lp, _) = line.closest_point(q);
        let (cp, _) = cubic.closest_point(q);
        assert!(
            lp.distance(cp) < 1e-3,
            "position mismatch at {:?}: {:?} vs {:?}",
            q,
            lp,
            cp
        );
    }
}

#[test]
fn empty_and_singleton_paths_yield_no_edges() {
    assert!(edges_of_path(&Path::open(vec![]), 0).is_empty());
    assert!(edges_of_path(&Path::closed(vec![]), 0).is_empty());
    assert!(edges_of_path(&Path::open(vec![anchor(1.0, 2.0)]), 0).is_empty());
    assert!(edges_of_path(&Path::closed(vec![anchor(1.0, 2.0)]), 0).is_empty());
}

#[test]
fn closed_two_anchor_path_has_forward_and_back_edges() {
    let path = Path::closed(vec![anchor(0.0, 0.0), anchor(10.0, 0.0)]);
    let edges = edges_of_path(&path, 0);
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].anchor1.position, edges[1].anchor2.position);
    assert_eq!(edges[0].anchor2.position, edges[1].anchor1.position);
}

#[test]
fn empty_tester_answers_without_bounds() {
    let tester = EdgeHitTester::new(5.0);
    assert_eq!(tester.bounds(), None);
    assert!(tester.test(Vec2::new(0.0, 0.0)).is_none());
    assert!(tester.test_all(Vec2::new(0.0, 0.0)).is_empty());
    let b = BoundingBox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
    assert!(tester.test_box(&b, false).is_empty());
    assert!(tester.test_box(&b, true).is_empty());
}

#[test]
fn non_finite_edges_are_skipped_not_fatal() {
    let mut bad = Edge::new(anchor(0.0, 0.0), anchor(10.0, 0.0), 0, 0, false);
    bad.anchor1.position.y = f32::NAN;
    let mut worse = Edge::new(anchor(0.0, 5.0), anchor(10.0, 5.0), 1, 0, false);
    worse.anchor2.handle_in = Vec2::new(f32::INFINITY, 0.0);
    let good = Edge::new(anchor(0.0, 2.0), anchor(10.0, 2.0), 2, 0, false);
    let edges = vec![bad, worse, good];

    let q = Vec2::new(5.0, 0.0);
    let hit = hit_test_edges(&edges, q, 50.0).expect("good edge still hit");
    assert_eq!(hit.edge.index, 2);

    let all = hit_test_edges_all(&edges, q, 50.0);
    assert_eq!(all.len(), 1);

    let query = BoundingBox::new(Vec2::new(-100.0, -100.0), Vec2::new(100.0, 100.0));
    assert_eq!(edges_intersecting_box(&edges, &query).len(), 1);
    assert_eq!(edges_contained_in_box(&edges, &query).len(), 1);
}

#[test]
fn tolerance_zero_only_hits_on_contact() {
    let e = Edge::new(anchor(0.0, 0.0), anchor(10.0, 0.0), 0, 0, false);
    let tester = EdgeHitTester::with_edges(vec![e], 0.0);
    assert!(tester.test(Vec2::new(5.0, 0.0)).is_some());
    assert!(tester.test(Vec2::new(5.0, 0.1)).is_none());
}
