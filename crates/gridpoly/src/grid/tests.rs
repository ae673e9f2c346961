use super::*;
use crate::lattice::Polygon;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[test]
fn full_and_ring_point_counts() {
    assert_eq!(Grid::new(2, 0).points().len(), 4);
    assert_eq!(Grid::new(4, 0).points().len(), 16);
    // odd sizes lose the centre even at depth 0 (its border distance equals B)
    assert_eq!(Grid::new(3, 0).points().len(), 8);
    assert_eq!(Grid::new(4, 2).points().len(), 12);
    assert_eq!(Grid::new(5, 1).points().len(), 24);
    assert_eq!(Grid::new(5, 3).points().len(), 16);
    assert_eq!(Grid::new(7, 3).points().len(), 40);
    // depth equal to size removes everything
    assert!(Grid::new(3, 3).points().is_empty());
}

#[test]
fn centre_removed_from_three_by_three() {
    let g = Grid::new(3, 1);
    assert_eq!(g.boundary(), 1);
    let pts = g.points();
    assert_eq!(pts.len(), 8);
    assert!(!pts.contains(&Point::new(1, 1)));
    assert!(pts.windows(2).all(|w| w[0] < w[1]));
    assert!(!g.contains(Point::new(3, 0)));
    assert!(!g.contains(Point::new(-1, 0)));
}

#[test]
fn quarter_turn_maps_corners() {
    let rot = GridRotation::quarter_turn(3);
    assert_eq!(rot.apply(Point::new(0, 0)), Point::new(0, 2));
    assert_eq!(rot.apply(Point::new(0, 2)), Point::new(2, 2));
    assert_eq!(rot.apply(Point::new(2, 2)), Point::new(2, 0));
    assert_eq!(rot.apply(Point::new(2, 0)), Point::new(0, 0));
    assert_eq!(rot.apply(Point::new(1, 1)), Point::new(1, 1));
    assert_eq!(rot.pow(4), GridRotation::identity());
    assert_ne!(rot.pow(2), GridRotation::identity());
}

#[test]
fn rotated_polygon_keeps_vertex_order() {
    let rot = Grid::new(3, 1).rotation();
    let tri = Polygon::new(vec![Point::new(0, 0), Point::new(0, 2), Point::new(2, 0)]).unwrap();
    let img = tri.rotated(&rot);
    assert_eq!(
        img.vertices(),
        &[Point::new(0, 2), Point::new(2, 2), Point::new(0, 0)]
    );
    assert_ne!(img, tri);
    assert_eq!(img.rotated(&rot).rotated(&rot).rotated(&rot), tri);
}

proptest! {
    #[test]
    fn four_turns_return_every_point(size in 1usize..12, r in 0i64..12, c in 0i64..12) {
        let s = size as i64;
        let p = Point::new(r % s, c % s);
        let rot = GridRotation::quarter_turn(size);
        let back = (0..4).fold(p, |q, _| rot.apply(q));
        prop_assert_eq!(back, p);
    }

    #[test]
    fn admissible_set_closed_under_rotation(size in 1usize..10, depth in 0usize..10) {
        let g = Grid::new(size, depth);
        let rot = g.rotation();
        let pts: BTreeSet<Point> = g.points().into_iter().collect();
        let img: BTreeSet<Point> = pts.iter().map(|&p| rot.apply(p)).collect();
        prop_assert_eq!(pts, img);
    }

    #[test]
    fn validity_and_metrics_survive_rotation(
        pts in prop::collection::btree_set((0i64..5, 0i64..5), 3..6),
    ) {
        let rot = GridRotation::quarter_turn(5);
        let poly = Polygon::new(pts.into_iter().map(Point::from).collect()).unwrap();
        let img = poly.rotated(&rot);
        prop_assert_eq!(poly.is_valid(), img.is_valid());
        prop_assert_eq!(poly.metrics(), img.metrics());
    }
}
