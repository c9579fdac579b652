//! K-nearest-neighbor search over a random point cloud.
//!
//! Builds a quadtree over a 200x200 universe, fills it with 1000 random
//! points, and prints the 5 nearest neighbors of a fixed target.

use quadknn::prelude::*;
use rand::Rng;
use rand::SeedableRng;

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    for _ in 0..1000 {
        let p = Point::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
        let inserted = tree.insert(p);
        assert!(inserted, "generated points lie inside the universe");
    }
    println!(
        "Indexed {} points across {} nodes",
        tree.len(),
        tree.node_count()
    );

    let target = Point::new(10.0, 10.0);
    let k = 5;

    println!("K Nearest Neighbors of ({:.2}, {:.2}):", target.x, target.y);
    for neighbor in tree.query_nearest_k(target, k) {
        println!(
            "Point ({:.2}, {:.2}) - Distance: {:.2}",
            neighbor.point.x, neighbor.point.y, neighbor.distance
        );
    }
}
