//! Canonical order of polygons.
//!
//! Keys, in priority order:
//! 1. twice-area, descending;
//! 2. right-angle count, descending;
//! 3. distinct side lengths, ascending;
//! 4. vertex lists compared from each polygon's lowest vertex, winding kept.
//!
//! Key 4 separates any two polygons that are not edge-set equal: equal rotated
//! vertex lists mean the same cyclic sequence, hence the same edges. Sorting is
//! stable, so remaining ties keep discovery order.

use std::cmp::Ordering;

use crate::lattice::Polygon;

pub fn canonical_cmp(a: &Polygon, b: &Polygon) -> Ordering {
    let (ma, mb) = (a.metrics(), b.metrics());
    mb.twice_area
        .cmp(&ma.twice_area)
        .then(mb.right_angles.cmp(&ma.right_angles))
        .then(ma.distinct_sides.cmp(&mb.distinct_sides))
        .then_with(|| rotated_vertex_cmp(a, b))
}

/// Lexicographic comparison of vertex lists rotated to their lowest vertex.
pub fn rotated_vertex_cmp(a: &Polygon, b: &Polygon) -> Ordering {
    a.canonical_vertices().cmp(b.canonical_vertices())
}

/// Stable sort into canonical order.
pub fn sort_canonical(polygons: &mut [Polygon]) {
    polygons.sort_by(canonical_cmp);
}
