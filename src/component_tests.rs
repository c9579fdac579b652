//! Component tests exercising the tree and the selector together,
//! plus structural invariants checked over whole trees.

use crate::geom::{Point, Rect};
use crate::nearest::NearestHeap;
use crate::quadtree::{NODE_CAPACITY, QuadTree};

// ============================================================================
// STRUCTURAL INVARIANTS
// ============================================================================

/// Every subdivided node's children must exactly tile it: half the parent's
/// half-extents, centered at the four quadrant offsets.
fn assert_children_tile_parent(tree: &QuadTree) {
    for idx in 0..tree.node_count() {
        let parent = tree.node(idx);
        let Some(first) = parent.first_child else {
            continue;
        };
        let Rect { x, y, hw, hh } = parent.boundary;
        let expected = [
            Rect::new(x - hw / 2.0, y - hh / 2.0, hw / 2.0, hh / 2.0),
            Rect::new(x + hw / 2.0, y - hh / 2.0, hw / 2.0, hh / 2.0),
            Rect::new(x - hw / 2.0, y + hh / 2.0, hw / 2.0, hh / 2.0),
            Rect::new(x + hw / 2.0, y + hh / 2.0, hw / 2.0, hh / 2.0),
        ];
        for (offset, rect) in expected.iter().enumerate() {
            assert_eq!(
                tree.node(first + offset).boundary,
                *rect,
                "child {offset} of node {idx} tiles its quadrant"
            );
        }
    }
}

/// Every point stored in a node must lie within that node's boundary.
fn assert_containment_invariant(tree: &QuadTree) {
    for idx in 0..tree.node_count() {
        let node = tree.node(idx);
        for point in &node.points {
            assert!(
                node.boundary.contains(*point),
                "point {point:?} stored outside node {idx} boundary"
            );
        }
    }
}

#[test]
fn subdivided_trees_keep_their_invariants() {
    let mut tree = QuadTree::new(Rect::new(10.0, -10.0, 80.0, 120.0));
    let points: Vec<Point> = (0..300)
        .map(|i| {
            Point::new(
                10.0 + ((i * 61) % 159) as f64 - 79.0,
                -10.0 + ((i * 89) % 239) as f64 - 119.0,
            )
        })
        .collect();
    for &p in &points {
        assert!(tree.insert(p), "generated point lies in the universe");
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.node_count() > 1, "300 points force subdivision");
    assert_children_tile_parent(&tree);
    assert_containment_invariant(&tree);
}

#[test]
fn direct_storage_stops_after_subdivision() {
    // A node keeps the points it held when it split, and never takes more.
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    for i in 0..40 {
        let spread = (i * 11 % 90) as f64;
        assert!(tree.insert(Point::new(spread - 45.0, 45.0 - spread)), "in bounds");
    }
    for idx in 0..tree.node_count() {
        let node = tree.node(idx);
        if node.first_child.is_some() {
            assert!(
                node.points.len() <= NODE_CAPACITY,
                "subdivided node {idx} holds at most its pre-split points"
            );
        }
    }
}

// ============================================================================
// BUILD-THEN-QUERY FLOWS
// ============================================================================

#[test]
fn ranked_query_over_a_grid() {
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 50.0, 50.0));
    for gx in -4i32..=4 {
        for gy in -4i32..=4 {
            let p = Point::new(f64::from(gx) * 10.0, f64::from(gy) * 10.0);
            assert!(tree.insert(p), "grid point in bounds");
        }
    }
    assert_eq!(tree.len(), 81);

    // From a grid vertex, the nearest is itself, then its four axis neighbors.
    let results = tree.query_nearest_k(Point::new(0.0, 0.0), 5);
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].distance, 0.0, "vertex itself first");
    for neighbor in &results[1..] {
        assert_eq!(neighbor.distance, 10.0, "axis neighbors at one grid step");
    }
}

#[test]
fn selector_capacity_caps_result_count() {
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    for i in 0..25 {
        assert!(tree.insert(Point::new(i as f64, 0.0)), "in bounds");
    }
    for k in [1, 3, 10, 25, 60] {
        let results = tree.query_nearest_k(Point::new(0.0, 0.0), k);
        assert_eq!(results.len(), k.min(25), "k = {k}");
    }
}

#[test]
fn streaming_heap_can_be_inspected_mid_flight() {
    // The caller owns the selector, so it can carry a running threshold
    // across traversals of separate trees.
    let mut west = QuadTree::new(Rect::new(-50.0, 0.0, 50.0, 50.0));
    let mut east = QuadTree::new(Rect::new(50.0, 0.0, 50.0, 50.0));
    assert!(west.insert(Point::new(-10.0, 0.0)), "west point");
    assert!(east.insert(Point::new(5.0, 0.0)), "east point");

    let target = Point::new(0.0, 0.0);
    let mut heap = NearestHeap::new(1);
    west.query_nearest_into(target, &mut heap);
    assert_eq!(heap.worst_distance(), Some(10.0), "west candidate held");
    east.query_nearest_into(target, &mut heap);
    assert_eq!(heap.worst_distance(), Some(5.0), "east candidate evicted it");
}

#[test]
fn rejected_points_never_appear_in_results() {
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(tree.insert(Point::new(9.0, 9.0)), "in bounds");
    assert!(!tree.insert(Point::new(11.0, 0.0)), "out of bounds");
    let results = tree.query_nearest_k(Point::new(11.0, 0.0), 10);
    assert_eq!(results.len(), 1, "only the indexed point is returned");
    assert_eq!(results[0].point, Point::new(9.0, 9.0));
}

#[test]
fn duplicate_flood_still_answers_queries() {
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    for _ in 0..100 {
        assert!(tree.insert(Point::new(30.0, 30.0)), "duplicate accepted");
    }
    assert!(tree.insert(Point::new(-30.0, -30.0)), "distinct point accepted");

    let results = tree.query_nearest_k(Point::new(30.0, 30.0), 3);
    assert_eq!(results.len(), 3);
    for neighbor in &results {
        assert_eq!(neighbor.point, Point::new(30.0, 30.0), "duplicates are closest");
        assert_eq!(neighbor.distance, 0.0);
    }

    let far = tree.query_nearest_k(Point::new(-30.0, -30.0), 1);
    assert_eq!(far[0].point, Point::new(-30.0, -30.0), "distinct point reachable");
}
