//! Find the K nearest neighbors of a target point.
//!
//! This example walks through building a small quadtree and issuing ranked
//! nearest-neighbor queries with `query_nearest_k`. Results come back sorted
//! by distance (closest first).

use quadknn::prelude::*;

fn main() {
    // Index a 20x20 universe centered at the origin
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));

    assert!(tree.insert(Point::new(0.0, 0.0))); // Point 0: distance 0 from (0, 0)
    assert!(tree.insert(Point::new(1.0, 0.0))); // Point 1: distance 1 from (0, 0)
    assert!(tree.insert(Point::new(0.0, 2.0))); // Point 2: distance 2 from (0, 0)
    assert!(tree.insert(Point::new(3.0, 4.0))); // Point 3: distance 5 from (0, 0)
    assert!(tree.insert(Point::new(9.0, 9.0))); // Point 4: far corner

    println!("=== Query Nearest K Example ===\n");

    // Query 1: three nearest neighbors of the origin
    println!("Query 1: 3 nearest neighbors of (0, 0):");
    let target = Point::new(0.0, 0.0);
    let nearest = tree.query_nearest_k(target, 3);
    for (rank, neighbor) in nearest.iter().enumerate() {
        println!(
            "  #{} ({:.2}, {:.2}) - distance {:.2}",
            rank + 1,
            neighbor.point.x,
            neighbor.point.y,
            neighbor.distance
        );
    }
    assert_eq!(nearest.len(), 3, "expected 3 results");
    assert_eq!(nearest[0].distance, 0.0, "the indexed origin is closest");
    assert_eq!(nearest[1].distance, 1.0, "then point 1");
    assert_eq!(nearest[2].distance, 2.0, "then point 2");
    println!("  ok\n");

    // Query 2: asking for more neighbors than there are points
    println!("Query 2: 10 nearest neighbors of (0, 0) with only 5 points indexed:");
    let all = tree.query_nearest_k(target, 10);
    println!("  Found {} results", all.len());
    assert_eq!(all.len(), 5, "every indexed point is returned");
    println!("  ok\n");

    // Query 3: out-of-universe points are rejected at insertion
    println!("Query 3: inserting (100, 100) into a 20x20 universe:");
    let inserted = tree.insert(Point::new(100.0, 100.0));
    println!("  insert returned {inserted}");
    assert!(!inserted, "point outside the universe is rejected");
    assert_eq!(tree.len(), 5, "tree unchanged");
    println!("  ok");
}
